//! Error types for the Wicket engine.

use thiserror::Error;

/// All possible errors from the Wicket engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Match state errors
    #[error("invalid inning number: {0} (expected 1 or 2)")]
    InvalidInningNumber(u8),

    #[error("match is in a super over but has no super over state")]
    MissingSuperOver,

    // Summary errors
    #[error("summary interval is zero for an innings of {total_overs} overs")]
    ZeroSummaryInterval { total_overs: u32 },

    // Persistence errors
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
