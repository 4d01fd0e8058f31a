use folio_core::contact::ContactForm;
use serde::Serialize;

/// Insert payload for `contact_submissions`. The table is write-only.
#[derive(Debug, Clone, Serialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactForm> for NewContactSubmission {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
        }
    }
}
