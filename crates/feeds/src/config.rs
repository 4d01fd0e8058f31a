use std::time::Duration;

const DEFAULT_SKETCHFAB_API_URL: &str = "https://api.sketchfab.com";
const DEFAULT_SKETCHFAB_USER: &str = "DSY Studio";
const DEFAULT_PHOTO_FEED_URL: &str = "https://feeds.behold.so/JSGvneKoniSGEiPUGEW5";
const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com";
const DEFAULT_YOUTUBE_CHANNEL_ID: &str = "UCjSZtRo8kqOEjw3e1BVue1Q";
const DEFAULT_EMAIL_RELAY_URL: &str = "https://api.emailjs.com";
const DEFAULT_EMAIL_SERVICE_ID: &str = "service_91z7bip";
const DEFAULT_EMAIL_TEMPLATE_ID: &str = "template_lyneuwr";
const DEFAULT_EMAIL_PUBLIC_KEY: &str = "KNrnGILkw5jrZ3WzR";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Endpoints and identities for the public feeds.
#[derive(Debug, Clone)]
pub struct FeedsConfig {
    pub sketchfab_api_url: String,
    pub sketchfab_user: String,
    pub photo_feed_url: String,
    pub youtube_api_url: String,
    pub youtube_channel_id: String,
    /// Without a key the video source is disabled.
    pub youtube_api_key: Option<String>,
    pub relay: RelayConfig,
    pub timeout_secs: u64,
}

/// Transactional-email relay settings. The public key is meant to be
/// public; it identifies the account, it does not authorize it.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl FeedsConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default                          |
    /// |----------------------|----------------------------------|
    /// | `SKETCHFAB_API_URL`  | `https://api.sketchfab.com`      |
    /// | `SKETCHFAB_USER`     | `DSY Studio`                     |
    /// | `PHOTO_FEED_URL`     | the site's aggregator feed       |
    /// | `YOUTUBE_API_URL`    | `https://www.googleapis.com`     |
    /// | `YOUTUBE_CHANNEL_ID` | the site's channel               |
    /// | `YOUTUBE_API_KEY`    | unset (video source disabled)    |
    /// | `EMAIL_RELAY_URL`    | `https://api.emailjs.com`        |
    /// | `EMAIL_SERVICE_ID`   | the site's service id            |
    /// | `EMAIL_TEMPLATE_ID`  | the site's template id           |
    /// | `EMAIL_PUBLIC_KEY`   | the site's public key            |
    /// | `FEED_TIMEOUT_SECS`  | `10`                             |
    pub fn from_env() -> Self {
        Self {
            sketchfab_api_url: env_or("SKETCHFAB_API_URL", DEFAULT_SKETCHFAB_API_URL),
            sketchfab_user: env_or("SKETCHFAB_USER", DEFAULT_SKETCHFAB_USER),
            photo_feed_url: env_or("PHOTO_FEED_URL", DEFAULT_PHOTO_FEED_URL),
            youtube_api_url: env_or("YOUTUBE_API_URL", DEFAULT_YOUTUBE_API_URL),
            youtube_channel_id: env_or("YOUTUBE_CHANNEL_ID", DEFAULT_YOUTUBE_CHANNEL_ID),
            youtube_api_key: std::env::var("YOUTUBE_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            relay: RelayConfig {
                url: env_or("EMAIL_RELAY_URL", DEFAULT_EMAIL_RELAY_URL),
                service_id: env_or("EMAIL_SERVICE_ID", DEFAULT_EMAIL_SERVICE_ID),
                template_id: env_or("EMAIL_TEMPLATE_ID", DEFAULT_EMAIL_TEMPLATE_ID),
                public_key: env_or("EMAIL_PUBLIC_KEY", DEFAULT_EMAIL_PUBLIC_KEY),
            },
            timeout_secs: std::env::var("FEED_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Point every source at one base URL. Used by tests with a fake upstream.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            sketchfab_api_url: base.to_string(),
            sketchfab_user: DEFAULT_SKETCHFAB_USER.to_string(),
            photo_feed_url: format!("{base}/feed"),
            youtube_api_url: base.to_string(),
            youtube_channel_id: DEFAULT_YOUTUBE_CHANNEL_ID.to_string(),
            youtube_api_key: None,
            relay: RelayConfig {
                url: base.to_string(),
                service_id: DEFAULT_EMAIL_SERVICE_ID.to_string(),
                template_id: DEFAULT_EMAIL_TEMPLATE_ID.to_string(),
                public_key: DEFAULT_EMAIL_PUBLIC_KEY.to_string(),
            },
            timeout_secs: 5,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
