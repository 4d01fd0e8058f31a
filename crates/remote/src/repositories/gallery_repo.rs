//! Repository for the `art_gallery` table.

use crate::client::ContentClient;
use crate::error::RemoteError;
use crate::models::gallery::GalleryItem;
use crate::query::Order;

const TABLE: &str = "art_gallery";

pub struct GalleryRepo;

impl GalleryRepo {
    /// The curated gallery, newest first. Filtering happens in memory.
    pub async fn list(client: &ContentClient) -> Result<Vec<GalleryItem>, RemoteError> {
        client
            .select(TABLE)
            .order("created_at", Order::Desc)
            .fetch_all()
            .await
    }
}
