//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// Health check handler. Reports degraded when the database is unreachable.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("Health check database ping failed: {}", e);
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Root handler.
async fn root() -> &'static str {
    "Wicket Scoring Server"
}
