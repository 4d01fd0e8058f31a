//! Studio entity model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{css_safe_url, null_as_default, path_safe};

/// A row from the `studios` table. `slug` is the unique key.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct Studio {
    #[validate(length(min = 1), custom(function = "path_safe"))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "css_safe_url"))]
    pub hero_image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_short: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_long: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(nested)]
    pub team_members: Vec<TeamMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upcoming_projects: Vec<UpcomingProject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery_images: Vec<String>,
}

impl Studio {
    pub fn is_game_studio(&self) -> bool {
        self.role.to_lowercase().contains("game")
    }

    /// Heading for the content grid.
    pub fn section_title(&self) -> &'static str {
        if self.is_game_studio() {
            "Games"
        } else {
            "Discography"
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct TeamMember {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub insta_url: Option<String>,
    #[serde(default)]
    pub yt_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpcomingProject {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
}
