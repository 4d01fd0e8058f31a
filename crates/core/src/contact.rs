//! Contact form input and the delivery channels it can be sent through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Contact form fields as posted by the browser.
///
/// Accepts both the plain field names and the `user_*` names the email
/// template expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct ContactForm {
    #[serde(default, alias = "user_name")]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default, alias = "user_email")]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

impl ContactForm {
    /// Trim surrounding whitespace and validate.
    pub fn normalized(&self) -> Result<ContactForm, CoreError> {
        let form = ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        form.validate()?;
        Ok(form)
    }
}

/// Label state of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
}

impl SubmitState {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitState::Idle => "Send Message",
            SubmitState::Pending => "Sending...",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Invalid contact form: {0}")]
    Invalid(String),

    #[error("{channel} delivery failed: {reason}")]
    Delivery {
        channel: &'static str,
        reason: String,
    },
}

impl From<CoreError> for ContactError {
    fn from(err: CoreError) -> Self {
        ContactError::Invalid(err.to_string())
    }
}

/// A destination for contact form submissions.
#[async_trait]
pub trait ContactChannel: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Deliver an already validated form. No retries.
    async fn deliver(&self, form: &ContactForm) -> Result<(), ContactError>;
}

/// Validate `form` and hand it to `channel`.
pub async fn submit(channel: &dyn ContactChannel, form: &ContactForm) -> Result<(), ContactError> {
    let form = form.normalized()?;
    channel.deliver(&form).await
}
