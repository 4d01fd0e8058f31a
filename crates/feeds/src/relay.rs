//! Contact channel that forwards submissions to the transactional-email
//! relay.
//!
//! ```text
//! POST {url}/api/v1.0/email/send
//! { "service_id", "template_id", "user_id", "template_params": { user_name, user_email, message } }
//! ```

use async_trait::async_trait;
use folio_core::contact::{ContactChannel, ContactError, ContactForm};
use serde::Serialize;

use crate::config::RelayConfig;
use crate::error::FeedError;
use crate::http::ensure_success;

const SOURCE: &str = "email relay";

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    message: &'a str,
}

#[derive(Debug, Clone)]
pub struct EmailRelay {
    http: reqwest::Client,
    config: RelayConfig,
}

impl EmailRelay {
    pub fn new(http: reqwest::Client, config: RelayConfig) -> Self {
        Self { http, config }
    }

    async fn send(&self, form: &ContactForm) -> Result<(), FeedError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                user_name: &form.name,
                user_email: &form.email,
                message: &form.message,
            },
        };

        let response = self
            .http
            .post(format!(
                "{}/api/v1.0/email/send",
                self.config.url.trim_end_matches('/')
            ))
            .json(&body)
            .send()
            .await?;

        ensure_success(SOURCE, response).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactChannel for EmailRelay {
    fn name(&self) -> &'static str {
        "relay"
    }

    async fn deliver(&self, form: &ContactForm) -> Result<(), ContactError> {
        self.send(form).await.map_err(|e| {
            tracing::error!(error = %e, "Email relay failed");
            ContactError::Delivery {
                channel: self.name(),
                reason: e.to_string(),
            }
        })
    }
}
