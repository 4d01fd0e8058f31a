//! Response helpers shared by the feed clients.

use serde::de::DeserializeOwned;

use crate::error::FeedError;

/// Return the response unchanged on 2xx, otherwise a [`FeedError::Status`]
/// containing the status and body text.
pub(crate) async fn ensure_success(
    feed: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, FeedError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(FeedError::Status {
            feed,
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON body into `T`, reporting shape mismatches as
/// [`FeedError::Decode`] rather than a transport error.
pub(crate) async fn parse_response<T: DeserializeOwned>(
    feed: &'static str,
    response: reqwest::Response,
) -> Result<T, FeedError> {
    let response = ensure_success(feed, response).await?;
    let value = response.json::<serde_json::Value>().await?;
    decode(feed, value)
}

pub(crate) fn decode<T: DeserializeOwned>(
    feed: &'static str,
    value: serde_json::Value,
) -> Result<T, FeedError> {
    serde_json::from_value(value).map_err(|e| FeedError::Decode {
        feed,
        reason: e.to_string(),
    })
}
