use std::sync::Arc;

use folio_core::contact::ContactChannel;
use folio_feeds::Feeds;
use folio_remote::channel::TableChannel;
use folio_remote::ContentClient;

use crate::config::{ContactChannelKind, ServerConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Content provider client (tables).
    pub content: ContentClient,
    /// Public feed clients and the email relay.
    pub feeds: Feeds,
    pub config: Arc<ServerConfig>,
    /// Contact channel backed by the `contact_submissions` table.
    pub table_channel: Arc<dyn ContactChannel>,
    /// Contact channel backed by the email relay.
    pub relay_channel: Arc<dyn ContactChannel>,
}

impl AppState {
    pub fn new(config: ServerConfig, content: ContentClient, feeds: Feeds) -> Self {
        let table_channel: Arc<dyn ContactChannel> =
            Arc::new(TableChannel::new(content.clone()));
        let relay_channel: Arc<dyn ContactChannel> = Arc::new(feeds.relay.clone());
        Self {
            content,
            feeds,
            config: Arc::new(config),
            table_channel,
            relay_channel,
        }
    }

    pub fn channel(&self, kind: ContactChannelKind) -> &dyn ContactChannel {
        match kind {
            ContactChannelKind::Table => self.table_channel.as_ref(),
            ContactChannelKind::Relay => self.relay_channel.as_ref(),
        }
    }
}
