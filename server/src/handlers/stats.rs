//! Statistics handlers - match completion and player lookups.

use crate::db::PgPlayerStore;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use wicket_engine::{record_match, BatchAck, MatchPerformance, PlayerRecord, PlayerStore, StatLine};

/// Request body for a completed match.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCompletionRequest {
    /// Tournament the match belongs to, if any
    #[serde(default)]
    pub tournament_id: Option<String>,
    /// One entry per player who took part
    #[serde(default)]
    pub performances: Vec<MatchPerformance>,
}

/// Query parameters for tournament leaders.
#[derive(Debug, Deserialize)]
pub struct LeadersQuery {
    /// Maximum number of players to return
    pub limit: Option<i64>,
}

/// One row of a tournament leaderboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderRow {
    pub player_id: String,
    pub name: String,
    pub stats: StatLine,
}

/// Default limit for leaderboards.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum limit for leaderboards.
const MAX_LIMIT: i64 = 100;

/// Fold a completed match into player records.
///
/// Nothing is written when no performance carries a player ID; the response
/// then reports zero applied upserts.
pub async fn handle_match_completion<S>(
    store: &mut S,
    request: MatchCompletionRequest,
) -> Result<BatchAck>
where
    S: PlayerStore<Ack = BatchAck>,
    AppError: From<S::Error>,
{
    if matches!(request.tournament_id.as_deref(), Some("")) {
        return Err(AppError::BadRequest("tournamentId must not be empty".into()));
    }

    let tournament_id = request.tournament_id.as_deref();
    match record_match(store, &request.performances, tournament_id).await? {
        Some(ack) => Ok(ack),
        None => {
            tracing::debug!(
                received = request.performances.len(),
                "Match completion with nothing to record"
            );
            Ok(BatchAck::default())
        }
    }
}

/// Look up a single player's record.
pub async fn handle_get_player(store: &PgPlayerStore, player_id: &str) -> Result<PlayerRecord> {
    store
        .get(player_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("player {}", player_id)))
}

/// Top run scorers of a tournament.
pub async fn handle_leaders(
    store: &PgPlayerStore,
    tournament_id: &str,
    query: LeadersQuery,
) -> Result<Vec<LeaderRow>> {
    let limit = query
        .limit
        .map(|l| l.clamp(1, MAX_LIMIT))
        .unwrap_or(DEFAULT_LIMIT);

    let records = store.top_run_scorers(tournament_id, limit).await?;
    Ok(leader_rows(records, tournament_id))
}

/// Project records onto one tournament's counters.
pub fn leader_rows(records: Vec<PlayerRecord>, tournament_id: &str) -> Vec<LeaderRow> {
    records
        .into_iter()
        .filter_map(|r| {
            let stats = *r.tournament(tournament_id)?;
            Some(LeaderRow {
                player_id: r.player_id,
                name: r.name,
                stats,
            })
        })
        .collect()
}
