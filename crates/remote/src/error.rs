/// Errors from the content provider layer.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Provider error on {table} ({status}): {body}")]
    Status {
        table: &'static str,
        status: u16,
        body: String,
    },

    /// The payload was not a JSON array of rows.
    #[error("Unexpected {table} payload: expected an array, got {found}")]
    UnexpectedShape {
        table: &'static str,
        found: &'static str,
    },

    /// A row failed to decode or validate.
    #[error("Malformed {table} row {row}: {reason}")]
    Schema {
        table: &'static str,
        row: usize,
        reason: String,
    },

    /// Missing or unusable client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
