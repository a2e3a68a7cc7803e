//! Durable per-player statistics record.

use crate::{PlayerId, PlayerUpsert, StatLine, TournamentId, Version};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifetime and per-tournament counters of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    #[serde(default)]
    pub name: String,
    /// Incremented on every applied upsert
    #[serde(default)]
    pub version: Version,
    #[serde(default)]
    pub career_stats: StatLine,
    #[serde(default)]
    pub tournament_stats: BTreeMap<TournamentId, StatLine>,
}

/// What an upsert did to a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// A zeroed tournament bag was created before the increment
    pub opened_tournament: bool,
}

impl PlayerRecord {
    /// Create an empty record with zeroed counters.
    pub fn new(player_id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            name: name.into(),
            version: 0,
            career_stats: StatLine::zero(),
            tournament_stats: BTreeMap::new(),
        }
    }

    /// Counters for a tournament, if the player has appeared in it.
    pub fn tournament(&self, tournament_id: &str) -> Option<&StatLine> {
        self.tournament_stats.get(tournament_id)
    }

    /// Apply an upsert: set identity, then add counters.
    ///
    /// A missing tournament bag starts from zero. Nothing is ever subtracted
    /// or replaced, so applying the same upsert twice counts twice.
    pub fn apply(&mut self, op: &PlayerUpsert) -> UpsertOutcome {
        self.player_id.clone_from(&op.player_id);
        if let Some(name) = &op.name {
            self.name.clone_from(name);
        }

        self.career_stats += op.career;

        let mut outcome = UpsertOutcome::default();
        if let Some(tournament) = &op.tournament {
            let bag = self
                .tournament_stats
                .entry(tournament.tournament_id.clone())
                .or_insert_with(|| {
                    outcome.opened_tournament = true;
                    StatLine::zero()
                });
            *bag += tournament.delta;
        }

        self.version += 1;
        outcome
    }
}
