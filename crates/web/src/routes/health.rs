use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    provider_healthy: bool,
}

/// Reports `degraded` rather than failing when the content provider is
/// unreachable; pages still render their empty states in that case.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider_healthy = match folio_remote::health_check(&state.content).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Provider health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if provider_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        provider_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
