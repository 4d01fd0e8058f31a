use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;

use crate::error::RemoteError;
use crate::query::Select;

/// Default per-request timeout for provider calls.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the content provider.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public (anon) API key sent with every request.
    pub anon_key: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl RemoteConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var               | Default    |
    /// |-----------------------|------------|
    /// | `SUPABASE_URL`        | (required) |
    /// | `SUPABASE_ANON_KEY`   | (required) |
    /// | `REMOTE_TIMEOUT_SECS` | `10`       |
    pub fn from_env() -> Result<Self, RemoteError> {
        let url = std::env::var("SUPABASE_URL")
            .map_err(|_| RemoteError::Config("SUPABASE_URL must be set".into()))?;
        let anon_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| RemoteError::Config("SUPABASE_ANON_KEY must be set".into()))?;
        let timeout_secs = std::env::var("REMOTE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            url,
            anon_key,
            timeout_secs,
        })
    }
}

/// HTTP client for the provider's REST interface.
///
/// Cheap to clone; the inner [`reqwest::Client`] pools connections.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    rest_url: String,
}

impl ContentClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.anon_key)
            .map_err(|_| RemoteError::Config("SUPABASE_ANON_KEY is not a valid header".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|_| RemoteError::Config("SUPABASE_ANON_KEY is not a valid header".into()))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
        })
    }

    /// Start a read query against `table`.
    pub fn select(&self, table: &'static str) -> Select<'_> {
        Select::new(self, table)
    }

    /// Insert rows into `table` without asking for them back.
    pub async fn insert<T: Serialize>(
        &self,
        table: &'static str,
        rows: &[T],
    ) -> Result<(), RemoteError> {
        let response = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;

        ensure_success(table, response).await?;
        Ok(())
    }

    pub(crate) async fn get_rows(
        &self,
        table: &'static str,
        params: &[(String, String)],
    ) -> Result<serde_json::Value, RemoteError> {
        let response = self
            .http
            .get(self.table_url(table))
            .query(params)
            .send()
            .await?;

        let response = ensure_success(table, response).await?;
        Ok(response.json::<serde_json::Value>().await?)
    }

    pub(crate) async fn ping(&self) -> Result<(), RemoteError> {
        let response = self.http.get(format!("{}/", self.rest_url)).send().await?;
        ensure_success("<root>", response).await?;
        Ok(())
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }
}

/// Return the response unchanged on 2xx, otherwise a [`RemoteError::Status`]
/// carrying the body text.
async fn ensure_success(
    table: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(RemoteError::Status {
            table,
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
