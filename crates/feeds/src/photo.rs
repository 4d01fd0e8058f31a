//! Photo feed from the social aggregator.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::FeedError;
use crate::http::parse_response;
use crate::Feed;

const SOURCE: &str = "photo feed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Image,
    Video,
    CarouselAlbum,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoPost {
    pub id: String,
    pub media_url: String,
    pub permalink: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub media_type: MediaType,
}

impl PhotoPost {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    pub fn alt_text(&self) -> &str {
        self.caption
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("Instagram Post")
    }
}

/// The aggregator returns either a profile object with a `posts` array or
/// a bare array of posts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedPayload {
    Profile { posts: Vec<PhotoPost> },
    Posts(Vec<PhotoPost>),
}

impl FeedPayload {
    fn into_posts(self) -> Vec<PhotoPost> {
        match self {
            FeedPayload::Profile { posts } | FeedPayload::Posts(posts) => posts,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhotoFeed {
    http: reqwest::Client,
    url: String,
}

impl PhotoFeed {
    pub fn new(http: reqwest::Client, url: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl Feed for PhotoFeed {
    type Item = PhotoPost;

    fn source(&self) -> &'static str {
        SOURCE
    }

    async fn fetch(&self) -> Result<Vec<PhotoPost>, FeedError> {
        let response = self.http.get(&self.url).send().await?;
        let payload: FeedPayload = parse_response(SOURCE, response).await?;
        Ok(payload.into_posts())
    }
}
