//! Live scoring routes.

use axum::{routing::post, Json, Router};

use crate::error::Result;
use crate::handlers::{handle_live_state, LiveStateRequest, LiveStateResponse};
use crate::AppState;

/// Create live scoring routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/live/state", post(live_state_handler))
}

/// POST /live/state - Evaluate the active innings and triggers.
async fn live_state_handler(
    Json(request): Json<LiveStateRequest>,
) -> Result<Json<LiveStateResponse>> {
    let response = handle_live_state(request)?;
    Ok(Json(response))
}
