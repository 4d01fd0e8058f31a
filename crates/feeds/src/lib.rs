//! Clients for the public feeds shown on the art and social pages, plus the
//! transactional-email relay used by the contact form.

pub mod config;
pub mod error;
mod http;
pub mod photo;
pub mod relay;
pub mod sketchfab;
pub mod video;

use async_trait::async_trait;

pub use config::{FeedsConfig, RelayConfig};
pub use error::FeedError;
pub use photo::{PhotoFeed, PhotoPost};
pub use relay::EmailRelay;
pub use sketchfab::{ModelFeed, SketchfabModel};
pub use video::{Video, VideoFeed};

/// A remote list of items fetched in one request.
#[async_trait]
pub trait Feed: Send + Sync {
    type Item: Send;

    /// Short source name used in logs and errors.
    fn source(&self) -> &'static str;

    async fn fetch(&self) -> Result<Vec<Self::Item>, FeedError>;
}

/// All feed clients, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct Feeds {
    pub models: ModelFeed,
    pub photos: PhotoFeed,
    pub videos: VideoFeed,
    pub relay: EmailRelay,
}

impl Feeds {
    pub fn new(config: &FeedsConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            models: ModelFeed::new(
                http.clone(),
                &config.sketchfab_api_url,
                &config.sketchfab_user,
            ),
            photos: PhotoFeed::new(http.clone(), &config.photo_feed_url),
            videos: VideoFeed::new(
                http.clone(),
                &config.youtube_api_url,
                &config.youtube_channel_id,
                config.youtube_api_key.clone(),
            ),
            relay: EmailRelay::new(http, config.relay.clone()),
        })
    }
}
