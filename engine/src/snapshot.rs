//! Snapshots for persisting and restoring the in-memory player store.
//!
//! Uses BTreeMap so the same store state always serializes to the same JSON.

use crate::{error::Result, Error, PlayerId, PlayerRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version of the snapshot format for future compatibility.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// A point-in-time copy of every player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// Snapshot format version
    pub format_version: u32,
    /// Player records by ID
    pub players: BTreeMap<PlayerId, PlayerRecord>,
}

impl StoreSnapshot {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            players: BTreeMap::new(),
        }
    }

    /// Add a player record to the snapshot.
    pub fn add_player(&mut self, record: PlayerRecord) {
        self.players.insert(record.player_id.clone(), record);
    }

    /// Get a player record from the snapshot.
    pub fn get_player(&self, player_id: &str) -> Option<&PlayerRecord> {
        self.players.get(player_id)
    }

    /// Count player records.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check that every record is filed under its own player ID.
    pub fn validate(&self) -> Result<()> {
        if self.format_version > SNAPSHOT_FORMAT_VERSION {
            return Err(Error::InvalidSnapshot(format!(
                "unsupported snapshot format version: {} (max supported: {})",
                self.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }

        for (key, record) in &self.players {
            if *key != record.player_id {
                return Err(Error::InvalidSnapshot(format!(
                    "record for '{}' stored under key '{}'",
                    record.player_id, key
                )));
            }
        }

        Ok(())
    }

    /// Serialize to JSON with deterministic ordering.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidSnapshot(e.to_string()))?;

        snapshot.validate()?;
        Ok(snapshot)
    }
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
