//! Counter bags and per-match performance input.

use crate::PlayerId;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Fixed set of aggregate counters kept for a player.
///
/// Used for career totals, per-tournament totals and for the delta a single
/// match contributes. Counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatLine {
    pub matches: u64,
    pub runs: u64,
    pub balls_faced: u64,
    pub fours: u64,
    pub sixes: u64,
    pub wickets: u64,
    pub balls_bowled: u64,
    pub runs_conceded: u64,
    pub dismissals: u64,
}

impl StatLine {
    /// A zeroed bag.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Counters a single match performance contributes, without the
    /// `matches` appearance.
    ///
    /// Missing numbers count as zero.
    pub fn from_performance(perf: &MatchPerformance) -> Self {
        let n = |v: Option<u32>| u64::from(v.unwrap_or(0));
        Self {
            matches: 0,
            runs: n(perf.runs),
            balls_faced: n(perf.balls),
            fours: n(perf.fours),
            sixes: n(perf.sixes),
            wickets: n(perf.wickets),
            balls_bowled: n(perf.balls_bowled),
            runs_conceded: n(perf.runs_conceded),
            dismissals: u64::from(perf.dismissed.unwrap_or(false)),
        }
    }

    /// Same counters with `matches` set to one appearance.
    pub fn with_appearance(mut self) -> Self {
        self.matches = 1;
        self
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add for StatLine {
    type Output = StatLine;

    fn add(self, rhs: StatLine) -> StatLine {
        StatLine {
            matches: self.matches.saturating_add(rhs.matches),
            runs: self.runs.saturating_add(rhs.runs),
            balls_faced: self.balls_faced.saturating_add(rhs.balls_faced),
            fours: self.fours.saturating_add(rhs.fours),
            sixes: self.sixes.saturating_add(rhs.sixes),
            wickets: self.wickets.saturating_add(rhs.wickets),
            balls_bowled: self.balls_bowled.saturating_add(rhs.balls_bowled),
            runs_conceded: self.runs_conceded.saturating_add(rhs.runs_conceded),
            dismissals: self.dismissals.saturating_add(rhs.dismissals),
        }
    }
}

impl AddAssign for StatLine {
    fn add_assign(&mut self, rhs: StatLine) {
        *self = *self + rhs;
    }
}

/// One player's contribution to a completed match.
///
/// Produced by the scoring session and consumed once by
/// [`aggregate`](crate::aggregate()). Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchPerformance {
    pub player_id: Option<PlayerId>,
    pub name: Option<String>,
    pub runs: Option<u32>,
    /// Balls faced
    pub balls: Option<u32>,
    pub fours: Option<u32>,
    pub sixes: Option<u32>,
    pub wickets: Option<u32>,
    pub balls_bowled: Option<u32>,
    pub runs_conceded: Option<u32>,
    pub dismissed: Option<bool>,
    pub match_played: Option<bool>,
}

impl MatchPerformance {
    /// A performance for a player who took part in the match.
    pub fn new(player_id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            player_id: Some(player_id.into()),
            name: Some(name.into()),
            match_played: Some(true),
            ..Self::default()
        }
    }

    /// Set batting figures.
    pub fn batting(mut self, runs: u32, balls: u32, fours: u32, sixes: u32) -> Self {
        self.runs = Some(runs);
        self.balls = Some(balls);
        self.fours = Some(fours);
        self.sixes = Some(sixes);
        self
    }

    /// Set bowling figures.
    pub fn bowling(mut self, wickets: u32, balls_bowled: u32, runs_conceded: u32) -> Self {
        self.wickets = Some(wickets);
        self.balls_bowled = Some(balls_bowled);
        self.runs_conceded = Some(runs_conceded);
        self
    }

    /// Mark the batter as dismissed.
    pub fn out(mut self) -> Self {
        self.dismissed = Some(true);
        self
    }

    /// Override the appearance flag.
    pub fn played(mut self, played: bool) -> Self {
        self.match_played = Some(played);
        self
    }

    /// Player ID, if present and non-empty.
    pub fn player_id(&self) -> Option<&str> {
        self.player_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn played_match(&self) -> bool {
        self.match_played.unwrap_or(false)
    }
}
