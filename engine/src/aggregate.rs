//! End-of-match statistics aggregation.
//!
//! Turns the performances collected while scoring into one [`StatsBatch`].
//! Each entry becomes a [`PlayerUpsert`] carrying:
//!
//! - the player's identity (ID and, when given, name),
//! - the match delta added to career counters, with one appearance if the
//!   entry says the player played,
//! - the same delta added to the ambient tournament, if there is one.
//!
//! `matches` follows the caller's `match_played` flag only. A player with
//! runs but `match_played: false` gets no appearance.

use crate::{MatchPerformance, PlayerStore, PlayerUpsert, StatLine, StatsBatch};

/// Build the store batch for a completed match.
///
/// Returns `None` when there is nothing to write: an empty input, or one in
/// which every entry lacks a player ID. Such entries are dropped silently.
pub fn aggregate(
    performances: &[MatchPerformance],
    tournament_id: Option<&str>,
) -> Option<StatsBatch> {
    if performances.is_empty() {
        return None;
    }

    let mut upserts = Vec::with_capacity(performances.len());
    for perf in performances {
        let Some(player_id) = perf.player_id() else {
            continue;
        };

        let delta = StatLine::from_performance(perf);
        let counted = if perf.played_match() {
            delta.with_appearance()
        } else {
            delta
        };

        let mut upsert = PlayerUpsert::new(player_id, perf.name.clone(), counted);
        if let Some(tournament_id) = tournament_id {
            upsert = upsert.with_tournament(tournament_id, counted);
        }
        upserts.push(upsert);
    }

    let dropped = performances.len() - upserts.len();
    if dropped > 0 {
        tracing::debug!(dropped, "skipped performances without a player id");
    }

    if upserts.is_empty() {
        return None;
    }

    tracing::debug!(
        players = upserts.len(),
        tournament = tournament_id.unwrap_or("-"),
        "aggregated match statistics"
    );

    Some(StatsBatch {
        tournament_id: tournament_id.map(str::to_owned),
        upserts,
    })
}

/// Aggregate a completed match and hand the batch to `store` in one call.
///
/// Returns `Ok(None)` without touching the store when there is nothing to
/// write. The store's acknowledgement and errors are passed through as-is.
pub async fn record_match<S: PlayerStore>(
    store: &mut S,
    performances: &[MatchPerformance],
    tournament_id: Option<&str>,
) -> Result<Option<S::Ack>, S::Error> {
    match aggregate(performances, tournament_id) {
        Some(batch) => store.apply_batch(&batch).await.map(Some),
        None => Ok(None),
    }
}
