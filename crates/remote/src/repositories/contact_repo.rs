//! Repository for the write-only `contact_submissions` table.

use crate::client::ContentClient;
use crate::error::RemoteError;
use crate::models::contact::NewContactSubmission;

const TABLE: &str = "contact_submissions";

pub struct ContactRepo;

impl ContactRepo {
    pub async fn create(
        client: &ContentClient,
        input: &NewContactSubmission,
    ) -> Result<(), RemoteError> {
        client.insert(TABLE, std::slice::from_ref(input)).await
    }
}
