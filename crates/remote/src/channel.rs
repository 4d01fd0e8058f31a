//! Contact channel that stores submissions in the provider's table.

use async_trait::async_trait;
use folio_core::contact::{ContactChannel, ContactError, ContactForm};

use crate::client::ContentClient;
use crate::models::contact::NewContactSubmission;
use crate::repositories::ContactRepo;

#[derive(Debug, Clone)]
pub struct TableChannel {
    client: ContentClient,
}

impl TableChannel {
    pub fn new(client: ContentClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactChannel for TableChannel {
    fn name(&self) -> &'static str {
        "table"
    }

    async fn deliver(&self, form: &ContactForm) -> Result<(), ContactError> {
        ContactRepo::create(&self.client, &NewContactSubmission::from(form))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Contact insert failed");
                ContactError::Delivery {
                    channel: self.name(),
                    reason: e.to_string(),
                }
            })
    }
}
