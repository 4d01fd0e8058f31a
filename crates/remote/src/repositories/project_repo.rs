//! Repository for the `projects` table.

use crate::client::ContentClient;
use crate::error::RemoteError;
use crate::models::project::{Project, ProjectCard, CARD_COLUMNS};
use crate::query::Order;

const TABLE: &str = "projects";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Featured projects, newest first, optionally capped at `limit`.
    pub async fn list_featured(
        client: &ContentClient,
        limit: Option<usize>,
    ) -> Result<Vec<ProjectCard>, RemoteError> {
        let mut select = client
            .select(TABLE)
            .columns(CARD_COLUMNS)
            .eq("featured", true)
            .order("created_at", Order::Desc);
        if let Some(limit) = limit {
            select = select.limit(limit);
        }
        select.fetch_all().await
    }

    pub async fn find_by_id(
        client: &ContentClient,
        id: &str,
    ) -> Result<Option<Project>, RemoteError> {
        client.select(TABLE).eq("id", id).fetch_optional().await
    }
}
