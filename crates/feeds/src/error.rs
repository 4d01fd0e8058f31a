/// Errors from the public feed clients and the email relay.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("{feed} error ({status}): {body}")]
    Status {
        feed: &'static str,
        status: u16,
        body: String,
    },

    /// The payload did not have the expected shape.
    #[error("Could not decode {feed} payload: {reason}")]
    Decode {
        feed: &'static str,
        reason: String,
    },

    /// The source is not configured (e.g. missing API key).
    #[error("{0} feed is disabled")]
    Disabled(&'static str),
}
