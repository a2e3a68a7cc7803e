//! Statistics routes.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use wicket_engine::{BatchAck, PlayerRecord};

use crate::error::Result;
use crate::handlers::{
    handle_get_player, handle_leaders, handle_match_completion, LeaderRow, LeadersQuery,
    MatchCompletionRequest,
};
use crate::AppState;

/// Create statistics routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/matches/complete", post(complete_handler))
        .route("/players/{player_id}", get(player_handler))
        .route("/tournaments/{tournament_id}/leaders", get(leaders_handler))
}

/// POST /matches/complete - Record a completed match.
async fn complete_handler(
    State(mut state): State<AppState>,
    Json(request): Json<MatchCompletionRequest>,
) -> Result<Json<BatchAck>> {
    let ack = handle_match_completion(&mut state.store, request).await?;
    Ok(Json(ack))
}

/// GET /players/{player_id} - Fetch a player record.
async fn player_handler(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerRecord>> {
    let record = handle_get_player(&state.store, &player_id).await?;
    Ok(Json(record))
}

/// GET /tournaments/{tournament_id}/leaders - Top run scorers.
async fn leaders_handler(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
    Query(query): Query<LeadersQuery>,
) -> Result<Json<Vec<LeaderRow>>> {
    let rows = handle_leaders(&state.store, &tournament_id, query).await?;
    Ok(Json(rows))
}
