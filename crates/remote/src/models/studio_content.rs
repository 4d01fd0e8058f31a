//! Released games and tracks shown on a studio page.

use folio_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{id_string, null_as_default, path_safe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ContentKind {
    Game,
    Music,
}

/// A row from the `studio_content` table.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct StudioContent {
    #[serde(deserialize_with = "id_string")]
    #[validate(length(min = 1), custom(function = "path_safe"))]
    pub id: String,
    pub studio_slug: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// May be empty; the modal then shows a placeholder without controls.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl StudioContent {
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Audio source for music items only.
    pub fn audio(&self) -> Option<&str> {
        match self.kind {
            ContentKind::Music => self.audio_url.as_deref().filter(|u| !u.is_empty()),
            ContentKind::Game => None,
        }
    }

    /// "See More" target for game items only.
    pub fn see_more(&self) -> Option<&str> {
        match self.kind {
            ContentKind::Game => self.external_link.as_deref().filter(|u| !u.is_empty()),
            ContentKind::Music => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn music_row_exposes_audio_only() {
        let item: StudioContent = serde_json::from_value(json!({
            "id": "t1",
            "studio_slug": "xero",
            "type": "Music",
            "title": "Track",
            "images": [],
            "audio_url": "https://cdn.example/t.mp3",
            "external_link": "https://example.com"
        }))
        .unwrap();
        assert_eq!(item.kind, ContentKind::Music);
        assert_eq!(item.audio(), Some("https://cdn.example/t.mp3"));
        assert_eq!(item.see_more(), None);
        assert_eq!(item.cover(), None);
    }

    #[test]
    fn unknown_kind_fails_to_decode() {
        let result = serde_json::from_value::<StudioContent>(json!({
            "id": "x", "studio_slug": "dsy", "type": "Film", "title": "X"
        }));
        assert_matches!(result, Err(_));
    }
}
