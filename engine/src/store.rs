//! Player store seam and the in-memory store.
//!
//! The aggregator never talks to a concrete database. It hands a
//! [`StatsBatch`] to anything implementing [`PlayerStore`]. Stores must apply
//! each [`PlayerUpsert`](crate::PlayerUpsert) atomically per player; no
//! atomicity across players is needed since upserts commute.

use crate::{error::Result, Error, PlayerId, PlayerRecord, StatLine, StatsBatch};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;

/// A durable store of player records that can apply a stats batch.
///
/// Applying a batch may suspend on IO. The engine never drives the future
/// itself, so any executor works.
pub trait PlayerStore {
    /// Acknowledgement returned for an applied batch.
    type Ack;
    /// Error raised by the store.
    type Error;

    /// Apply every upsert of `batch`.
    fn apply_batch(
        &mut self,
        batch: &StatsBatch,
    ) -> impl Future<Output = std::result::Result<Self::Ack, Self::Error>> + Send;
}

/// Result of applying a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAck {
    /// Number of upserts applied
    pub applied: usize,
    /// Players whose record did not exist before this batch
    pub created_players: Vec<PlayerId>,
    /// Number of tournament bags created by this batch
    pub opened_tournaments: usize,
}

/// Store holding all player records in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryPlayerStore {
    players: HashMap<PlayerId, PlayerRecord>,
}

impl MemoryPlayerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
        }
    }

    /// Get a player record by ID.
    pub fn get(&self, player_id: &str) -> Option<&PlayerRecord> {
        self.players.get(player_id)
    }

    /// Iterate over all records.
    pub fn players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.values()
    }

    /// Number of player records.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the store has no records.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Tournament counters of the players with the most runs in it,
    /// highest first. Ties are broken by player ID.
    pub fn top_run_scorers(
        &self,
        tournament_id: &str,
        limit: usize,
    ) -> Vec<(&PlayerRecord, &StatLine)> {
        let mut rows: Vec<_> = self
            .players
            .values()
            .filter_map(|p| p.tournament(tournament_id).map(|s| (p, s)))
            .collect();

        rows.sort_by(|(a, sa), (b, sb)| {
            sb.runs
                .cmp(&sa.runs)
                .then_with(|| a.player_id.cmp(&b.player_id))
        });
        rows.truncate(limit);
        rows
    }

    /// Apply every upsert of `batch` right away.
    ///
    /// Same as the [`PlayerStore`] implementation, without the future.
    pub fn apply_batch(&mut self, batch: &StatsBatch) -> Result<BatchAck> {
        let mut ack = BatchAck::default();

        for op in batch.iter() {
            if !self.players.contains_key(&op.player_id) {
                ack.created_players.push(op.player_id.clone());
            }
            let record = self
                .players
                .entry(op.player_id.clone())
                .or_insert_with(|| PlayerRecord::new(op.player_id.clone(), ""));

            let outcome = record.apply(op);
            if outcome.opened_tournament {
                ack.opened_tournaments += 1;
            }
            ack.applied += 1;
        }

        tracing::debug!(
            applied = ack.applied,
            created = ack.created_players.len(),
            "applied stats batch"
        );

        Ok(ack)
    }

    /// Export the current store state as a snapshot.
    pub fn export_state(&self) -> crate::snapshot::StoreSnapshot {
        let mut snapshot = crate::snapshot::StoreSnapshot::new();
        for record in self.players.values() {
            snapshot.add_player(record.clone());
        }
        snapshot
    }

    /// Replace the current state with a snapshot's state.
    pub fn import_state(&mut self, snapshot: crate::snapshot::StoreSnapshot) -> Result<()> {
        snapshot.validate()?;

        self.players = snapshot
            .players
            .into_values()
            .map(|p| (p.player_id.clone(), p))
            .collect();

        Ok(())
    }
}

impl PlayerStore for MemoryPlayerStore {
    type Ack = BatchAck;
    type Error = Error;

    async fn apply_batch(&mut self, batch: &StatsBatch) -> Result<BatchAck> {
        MemoryPlayerStore::apply_batch(self, batch)
    }
}
