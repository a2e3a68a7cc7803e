//! Write operations against the player store.
//!
//! Statistics are never written as whole records. A completed match is turned
//! into a batch of per-player upserts, each of which sets identity fields and
//! adds counters. Players are independent of each other, so a store may apply
//! the upserts of a batch in any order.

use crate::{PlayerId, StatLine, TournamentId};
use serde::{Deserialize, Serialize};

/// Increment of one tournament's counters.
///
/// The store creates a zeroed bag for the tournament if the player has none,
/// then adds `delta`. An existing bag is never replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentIncrement {
    pub tournament_id: TournamentId,
    pub delta: StatLine,
}

/// Conditional upsert of a single player record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpsert {
    /// Target record, created if absent
    pub player_id: PlayerId,
    /// Overwrites the stored name when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Added to career counters
    pub career: StatLine,
    /// Added to the tournament's counters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<TournamentIncrement>,
}

impl PlayerUpsert {
    /// Create an upsert that only touches career counters.
    pub fn new(player_id: impl Into<PlayerId>, name: Option<String>, career: StatLine) -> Self {
        Self {
            player_id: player_id.into(),
            name,
            career,
            tournament: None,
        }
    }

    /// Also add `delta` to the given tournament.
    pub fn with_tournament(
        mut self,
        tournament_id: impl Into<TournamentId>,
        delta: StatLine,
    ) -> Self {
        self.tournament = Some(TournamentIncrement {
            tournament_id: tournament_id.into(),
            delta,
        });
        self
    }
}

/// All upserts produced by one completed match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBatch {
    /// Tournament shared by every upsert in the batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<TournamentId>,
    pub upserts: Vec<PlayerUpsert>,
}

impl StatsBatch {
    pub fn len(&self) -> usize {
        self.upserts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upserts.is_empty()
    }

    /// Iterate over the upserts.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerUpsert> {
        self.upserts.iter()
    }
}
