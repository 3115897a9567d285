use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the site root is a readable directory.
    pub site_root_ok: bool,
}

/// GET /health -- returns service and site root health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let site_root_ok = tokio::fs::metadata(state.config.site_root())
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);

    let status = if site_root_ok { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        site_root_ok,
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
