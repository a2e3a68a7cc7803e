//! # Wicket Engine
//!
//! Live cricket match state and end-of-match player statistics.
//!
//! This crate holds the logic a scoring app needs that is not UI: which
//! innings is live, when to show a summary or a highlight, and how a finished
//! match becomes increments against a player statistics store.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never talks to a database or network; stores plug
//!   in through the [`PlayerStore`] trait, whose batch call returns a future
//!   the caller drives
//! - **Pure predicates**: selection and trigger functions have no side effects
//!   and can be called from any thread
//! - **Typed counters**: statistics are a fixed [`StatLine`] struct, never
//!   string-keyed maps
//!
//! ## Core Concepts
//!
//! ### Match state
//!
//! A [`Match`] has two regular innings and, after a tie, a [`SuperOver`] with
//! two more. [`active_innings`] resolves the one being played.
//! [`new_innings`] builds an [`Innings`] from two rosters and the zeroed
//! [`BattingLine`]/[`BowlingLine`] templates.
//!
//! ### Presentation triggers
//!
//! - [`should_show_summary`] fires every [`summary_interval`] overs
//! - [`is_highlight`] flags fours, sixes and wickets
//!
//! ### Statistics
//!
//! [`aggregate()`] turns a list of [`MatchPerformance`] into a [`StatsBatch`] of
//! [`PlayerUpsert`]s. Each upsert sets the player's identity, adds to career
//! counters and, with a tournament, to that tournament's counters. A missing
//! tournament bag starts at zero. Upserts of different players commute.
//! Applying the same batch twice counts the match twice.
//!
//! ## Quick Start
//!
//! ```rust
//! use wicket_engine::{record_match, MatchPerformance, MemoryPlayerStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut store = MemoryPlayerStore::new();
//! let performances = vec![
//!     MatchPerformance::new("p1", "Asha").batting(54, 38, 6, 2),
//!     MatchPerformance::new("p2", "Ravi").bowling(3, 24, 27),
//! ];
//!
//! let ack = record_match(&mut store, &performances, Some("summer-cup"))
//!     .await
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(ack.applied, 2);
//!
//! let asha = store.get("p1").unwrap();
//! assert_eq!(asha.career_stats.runs, 54);
//! assert_eq!(asha.tournament("summer-cup").unwrap().matches, 1);
//! # }
//! ```

pub mod aggregate;
pub mod ball;
pub mod error;
pub mod innings;
pub mod match_state;
pub mod operation;
pub mod record;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod summary;

// Re-export main types at crate root
pub use aggregate::{aggregate, record_match};
pub use ball::{is_highlight, BallOutcome, Extra};
pub use error::Error;
pub use innings::{
    new_innings, BattingLine, BowlingLine, Innings, PlayerInInnings, RosterPlayer, Team,
    TeamInnings, BALLS_PER_OVER,
};
pub use match_state::{active_innings, InningNumber, InningsSlot, Match, MatchStatus, SuperOver};
pub use operation::{PlayerUpsert, StatsBatch, TournamentIncrement};
pub use record::{PlayerRecord, UpsertOutcome};
pub use snapshot::{StoreSnapshot, SNAPSHOT_FORMAT_VERSION};
pub use stats::{MatchPerformance, StatLine};
pub use store::{BatchAck, MemoryPlayerStore, PlayerStore};
pub use summary::{should_show_summary, summary_interval};

/// Type aliases for clarity
pub type PlayerId = String;
pub type TeamId = String;
pub type TournamentId = String;
pub type Version = u64;
