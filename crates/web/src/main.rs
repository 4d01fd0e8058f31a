use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_feeds::{Feeds, FeedsConfig};
use folio_remote::{ContentClient, RemoteConfig};
use folio_web::config::ServerConfig;
use folio_web::router::build_app_router;
use folio_web::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    // LOG_FORMAT=json switches to one JSON object per line.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "folio_web=debug,folio_remote=debug,folio_feeds=debug,tower_http=debug".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        contact_channel = config.contact_channel.action(),
        "Loaded server configuration"
    );

    let remote_config = RemoteConfig::from_env().expect("Invalid content provider configuration");
    let feeds_config = FeedsConfig::from_env();

    // --- Clients ---
    let content = ContentClient::new(&remote_config).expect("Failed to build content client");
    let feeds = Feeds::new(&feeds_config).expect("Failed to build feed clients");
    if !feeds.videos.is_enabled() {
        tracing::info!("YOUTUBE_API_KEY not set, video feed disabled");
    }

    // Not fatal: pages degrade to empty states while the provider is down.
    match folio_remote::health_check(&content).await {
        Ok(()) => tracing::info!("Content provider health check passed"),
        Err(e) => tracing::warn!(error = %e, "Content provider health check failed"),
    }

    // --- App state + router ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let state = AppState::new(config.clone(), content, feeds);
    let app = build_app_router(state, &config);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
