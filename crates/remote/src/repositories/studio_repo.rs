//! Repository for the `studios` table.

use crate::client::ContentClient;
use crate::error::RemoteError;
use crate::models::studio::Studio;

const TABLE: &str = "studios";

pub struct StudioRepo;

impl StudioRepo {
    pub async fn find_by_slug(
        client: &ContentClient,
        slug: &str,
    ) -> Result<Option<Studio>, RemoteError> {
        client.select(TABLE).eq("slug", slug).fetch_optional().await
    }
}
