use std::path::PathBuf;

/// Which backend the home page contact form posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannelKind {
    /// Insert into the provider's `contact_submissions` table.
    Table,
    /// Forward through the transactional-email relay.
    Relay,
}

impl ContactChannelKind {
    /// Form action for this channel.
    pub fn action(&self) -> &'static str {
        match self {
            ContactChannelKind::Table => "/contact",
            ContactChannelKind::Relay => "/contact/relay",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Some(ContactChannelKind::Table),
            "relay" => Some(ContactChannelKind::Relay),
            _ => None,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// Provider and feed settings live with their clients
/// ([`folio_remote::RemoteConfig`], [`folio_feeds::FeedsConfig`]).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
    /// Name shown in page titles and the footer.
    pub site_owner: String,
    pub contact_channel: ContactChannelKind,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ASSETS_DIR`           | `crates/web/assets`        |
    /// | `SITE_OWNER`           | `Souhardyo Dey`            |
    /// | `CONTACT_CHANNEL`      | `relay` (`relay`/`table`)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("crates/web/assets"));

        let site_owner = std::env::var("SITE_OWNER").unwrap_or_else(|_| "Souhardyo Dey".into());

        let contact_channel = std::env::var("CONTACT_CHANNEL")
            .map(|v| {
                ContactChannelKind::parse(&v)
                    .unwrap_or_else(|| panic!("CONTACT_CHANNEL must be 'relay' or 'table', got '{v}'"))
            })
            .unwrap_or(ContactChannelKind::Relay);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            assets_dir,
            site_owner,
            contact_channel,
        }
    }
}
