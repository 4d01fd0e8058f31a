use folio_core::gallery::Categorized;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{id_string, null_as_default};

/// A row from the `art_gallery` table.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GalleryItem {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
}

impl Categorized for GalleryItem {
    fn category(&self) -> &str {
        &self.category
    }
}
