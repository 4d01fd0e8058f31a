//! Latest uploads from the video channel.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::FeedError;
use crate::http::parse_response;
use crate::Feed;

const SOURCE: &str = "youtube";
const MAX_RESULTS: &str = "6";

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub published_at: DateTime<Utc>,
}

impl Video {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    pub fn published_label(&self) -> String {
        self.published_at.format("%b %-d, %Y").to_string()
    }
}

// A response without `items` is an API error body and fails to decode.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    thumbnails: SnippetThumbnails,
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct SnippetThumbnails {
    high: ThumbnailRef,
}

#[derive(Debug, Deserialize)]
struct ThumbnailRef {
    url: String,
}

impl SearchResponse {
    /// Channel and playlist hits carry no video id and are skipped.
    fn into_videos(self) -> Vec<Video> {
        self.items
            .into_iter()
            .filter_map(|item| {
                let id = item.id.video_id?;
                Some(Video {
                    id,
                    title: item.snippet.title,
                    thumbnail: item.snippet.thumbnails.high.url,
                    published_at: item.snippet.published_at,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct VideoFeed {
    http: reqwest::Client,
    api_url: String,
    channel_id: String,
    api_key: Option<String>,
}

impl VideoFeed {
    pub fn new(
        http: reqwest::Client,
        api_url: &str,
        channel_id: &str,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            channel_id: channel_id.to_string(),
            api_key,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl Feed for VideoFeed {
    type Item = Video;

    fn source(&self) -> &'static str {
        SOURCE
    }

    async fn fetch(&self) -> Result<Vec<Video>, FeedError> {
        let key = self.api_key.as_deref().ok_or(FeedError::Disabled(SOURCE))?;

        let response = self
            .http
            .get(format!("{}/youtube/v3/search", self.api_url))
            .query(&[
                ("key", key),
                ("channelId", self.channel_id.as_str()),
                ("part", "snippet,id"),
                ("order", "date"),
                ("maxResults", MAX_RESULTS),
            ])
            .send()
            .await?;

        let search: SearchResponse = parse_response(SOURCE, response).await?;
        Ok(search.into_videos())
    }
}
