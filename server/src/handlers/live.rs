//! Live scoring handler - evaluates match state for the scoring screen.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use wicket_engine::{should_show_summary, BallOutcome, Innings, InningsSlot, Match};

/// Request body for live state evaluation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStateRequest {
    /// Current match state, after the last ball was applied
    #[serde(rename = "match")]
    pub match_state: Match,
    /// The ball just bowled, if any
    #[serde(default)]
    pub ball: Option<BallOutcome>,
}

/// What the scoring screen should show.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStateResponse {
    pub active_slot: InningsSlot,
    pub active_innings: Option<Innings>,
    pub show_summary: bool,
    pub highlight: bool,
}

/// Resolve the active innings and presentation triggers.
pub fn handle_live_state(request: LiveStateRequest) -> Result<LiveStateResponse> {
    let m = &request.match_state;
    let active_slot = m.active_slot()?;
    let active = m.active_innings()?;
    let show_summary = should_show_summary(Some(m), active)?;
    let highlight = request
        .ball
        .as_ref()
        .map(BallOutcome::is_highlight)
        .unwrap_or(false);

    Ok(LiveStateResponse {
        active_slot,
        active_innings: active.cloned(),
        show_summary,
        highlight,
    })
}
