//! Project entity model and the card projection used by list pages.

use folio_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{id_string, null_as_default, path_safe};

/// A row from the `projects` table.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct Project {
    #[serde(deserialize_with = "id_string")]
    #[validate(length(min = 1), custom(function = "path_safe"))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: Timestamp,
}

impl Project {
    /// Long-form description split into paragraphs on line breaks.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.full_description
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Release date as `Month D, YYYY`.
    pub fn release_date(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }
}

/// Column projection read by the home and projects grids.
pub const CARD_COLUMNS: &str = "id, title, category, image, description, featured";

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ProjectCard {
    #[serde(deserialize_with = "id_string")]
    #[validate(length(min = 1), custom(function = "path_safe"))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn project(full: Option<&str>) -> Project {
        serde_json::from_value(json!({
            "id": 12,
            "title": "Nightfall",
            "category": "Game",
            "image": "https://cdn.example/n.png",
            "description": "Short",
            "full_description": full,
            "technologies": null,
            "featured": true,
            "created_at": "2024-03-05T10:00:00+00:00"
        }))
        .unwrap()
    }

    #[test]
    fn paragraphs_skip_blank_lines() {
        let p = project(Some("First line.\n\n  Second line.  \n"));
        assert_eq!(p.paragraphs(), vec!["First line.", "Second line."]);
        assert!(project(None).paragraphs().is_empty());
    }

    #[test]
    fn release_date_is_long_form() {
        assert_eq!(project(None).release_date(), "March 5, 2024");
    }

    #[test]
    fn null_technologies_decode_as_empty() {
        let p = project(None);
        assert_eq!(p.id, "12");
        assert!(p.technologies.is_empty());
    }
}
