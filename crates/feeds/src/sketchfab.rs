//! 3D-model search for the art page.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::FeedError;
use crate::http::parse_response;
use crate::Feed;

const SOURCE: &str = "sketchfab";

/// A published model, reduced to what the gallery renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchfabModel {
    pub uid: String,
    pub name: String,
    /// The widest thumbnail, if any were published.
    pub thumbnail: Option<String>,
    pub viewer_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<RawModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawModel {
    uid: String,
    name: String,
    #[serde(default)]
    thumbnails: Option<Thumbnails>,
    viewer_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    #[serde(default)]
    images: Vec<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
    #[serde(default)]
    width: u32,
}

impl From<RawModel> for SketchfabModel {
    fn from(raw: RawModel) -> Self {
        let thumbnail = raw
            .thumbnails
            .unwrap_or_default()
            .images
            .into_iter()
            .max_by_key(|t| t.width)
            .map(|t| t.url);
        Self {
            uid: raw.uid,
            name: raw.name,
            thumbnail,
            viewer_url: raw.viewer_url,
        }
    }
}

/// Searches one account's models, newest first.
#[derive(Debug, Clone)]
pub struct ModelFeed {
    http: reqwest::Client,
    api_url: String,
    user: String,
}

impl ModelFeed {
    pub fn new(http: reqwest::Client, api_url: &str, user: &str) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
        }
    }
}

#[async_trait]
impl Feed for ModelFeed {
    type Item = SketchfabModel;

    fn source(&self) -> &'static str {
        SOURCE
    }

    async fn fetch(&self) -> Result<Vec<SketchfabModel>, FeedError> {
        let response = self
            .http
            .get(format!("{}/v3/search", self.api_url))
            .query(&[
                ("type", "models"),
                ("user", self.user.as_str()),
                ("sort_by", "-publishedAt"),
            ])
            .send()
            .await?;

        let search: SearchResponse = parse_response(SOURCE, response).await?;
        Ok(search.results.into_iter().map(SketchfabModel::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::decode;

    #[test]
    fn widest_thumbnail_wins() {
        let search: SearchResponse = decode(
            SOURCE,
            json!({"results": [{
                "uid": "m1",
                "name": "Robot",
                "viewerUrl": "https://sketchfab.com/models/m1",
                "thumbnails": {"images": [
                    {"url": "small.jpg", "width": 200},
                    {"url": "large.jpg", "width": 1024},
                    {"url": "mid.jpg", "width": 640}
                ]}
            }]}),
        )
        .unwrap();
        let model = SketchfabModel::from(search.results.into_iter().next().unwrap());
        assert_eq!(model.thumbnail.as_deref(), Some("large.jpg"));
    }

    #[test]
    fn model_without_thumbnails() {
        let raw: RawModel = decode(
            SOURCE,
            json!({"uid": "m2", "name": "Bare", "viewerUrl": "v"}),
        )
        .unwrap();
        assert_eq!(SketchfabModel::from(raw).thumbnail, None);
    }
}
