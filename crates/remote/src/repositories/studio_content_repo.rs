//! Repository for the `studio_content` table.

use crate::client::ContentClient;
use crate::error::RemoteError;
use crate::models::studio_content::StudioContent;
use crate::query::Order;

const TABLE: &str = "studio_content";

pub struct StudioContentRepo;

impl StudioContentRepo {
    /// All releases for a studio, newest first.
    pub async fn list_by_studio(
        client: &ContentClient,
        studio_slug: &str,
    ) -> Result<Vec<StudioContent>, RemoteError> {
        client
            .select(TABLE)
            .eq("studio_slug", studio_slug)
            .order("created_at", Order::Desc)
            .fetch_all()
            .await
    }
}
