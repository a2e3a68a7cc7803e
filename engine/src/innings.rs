//! Innings construction and ball-by-ball progress.
//!
//! An [`Innings`] is built once per half-innings from two team rosters and a
//! pair of stat templates. After that only the counters move: the roster of
//! each side is fixed for the lifetime of the innings.

use crate::ball::{BallOutcome, Extra};
use crate::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// Legal deliveries in one over.
pub const BALLS_PER_OVER: u32 = 6;

/// A player as listed on a team sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub player_id: PlayerId,
    pub name: String,
}

impl RosterPlayer {
    pub fn new(player_id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            name: name.into(),
        }
    }
}

/// A team and its playing XI, as supplied by the match setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    pub name: String,
    pub playing11: Vec<RosterPlayer>,
}

impl Team {
    pub fn new(name: impl Into<String>, playing11: Vec<RosterPlayer>) -> Self {
        Self {
            team_id: None,
            name: name.into(),
            playing11,
        }
    }

    /// Set the team ID.
    pub fn with_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// Batting counters for one player in one innings.
///
/// The default value is the zeroed template every batter starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingLine {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub is_out: bool,
}

/// Bowling counters for one player in one innings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingLine {
    pub overs: u32,
    pub balls: u32,
    pub maidens: u32,
    pub wickets: u32,
    pub runs_conceded: u32,
    pub wides: u32,
    pub no_balls: u32,
}

/// A roster player merged with a role-specific stat line.
///
/// On the wire the stat fields sit next to `playerId` and `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInInnings<S> {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(flatten)]
    pub stats: S,
}

/// One side of an innings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInnings<S> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    pub name: String,
    pub playing11: Vec<PlayerInInnings<S>>,
}

impl<S: Clone> TeamInnings<S> {
    /// Copy a team, giving every roster player a fresh copy of `template`.
    pub fn from_team(team: &Team, template: &S) -> Self {
        let playing11 = team
            .playing11
            .iter()
            .map(|p| PlayerInInnings {
                player_id: p.player_id.clone(),
                name: p.name.clone(),
                stats: template.clone(),
            })
            .collect();

        Self {
            team_id: team.team_id.clone(),
            name: team.name.clone(),
            playing11,
        }
    }
}

impl<S> TeamInnings<S> {
    /// Get a player's line by ID.
    pub fn player(&self, player_id: &str) -> Option<&PlayerInInnings<S>> {
        self.playing11.iter().find(|p| p.player_id == player_id)
    }

    /// Get a mutable player's line by ID.
    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut PlayerInInnings<S>> {
        self.playing11.iter_mut().find(|p| p.player_id == player_id)
    }
}

/// One team's batting turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Innings {
    pub batting_team: TeamInnings<BattingLine>,
    pub bowling_team: TeamInnings<BowlingLine>,
    /// Scheduled overs, fixed by the match format
    pub total_overs: u32,
    /// Completed overs
    #[serde(default)]
    pub current_overs: u32,
    /// Legal balls bowled in the current over
    #[serde(default)]
    pub current_over_balls: u32,
    #[serde(default)]
    pub total_runs: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub extras: u32,
}

/// Build a fresh innings from two rosters and the per-role templates.
///
/// Neither `total_overs` nor the roster sizes are validated here.
pub fn new_innings(
    batting_team: &Team,
    bowling_team: &Team,
    batsman_template: &BattingLine,
    bowler_template: &BowlingLine,
    total_overs: u32,
) -> Innings {
    Innings {
        batting_team: TeamInnings::from_team(batting_team, batsman_template),
        bowling_team: TeamInnings::from_team(bowling_team, bowler_template),
        total_overs,
        current_overs: 0,
        current_over_balls: 0,
        total_runs: 0,
        wickets: 0,
        extras: 0,
    }
}

impl Innings {
    /// Build an innings using zeroed templates for both sides.
    pub fn new(batting_team: &Team, bowling_team: &Team, total_overs: u32) -> Self {
        new_innings(
            batting_team,
            bowling_team,
            &BattingLine::default(),
            &BowlingLine::default(),
            total_overs,
        )
    }

    /// Whether all scheduled overs have been bowled.
    pub fn is_complete(&self) -> bool {
        self.current_overs == self.total_overs
    }

    /// Get a batter's line.
    pub fn batter_mut(&mut self, player_id: &str) -> Option<&mut BattingLine> {
        self.batting_team.player_mut(player_id).map(|p| &mut p.stats)
    }

    /// Get a bowler's line.
    pub fn bowler_mut(&mut self, player_id: &str) -> Option<&mut BowlingLine> {
        self.bowling_team.player_mut(player_id).map(|p| &mut p.stats)
    }

    /// Apply one delivery to the innings totals and progress counters.
    ///
    /// Wides and no-balls cost one penalty run and are not counted towards
    /// the over. Per-player lines are left to the scorer.
    pub fn record_delivery(&mut self, ball: &BallOutcome) {
        let penalty = match ball.extra {
            Some(Extra::Wide) | Some(Extra::NoBall) => 1,
            _ => 0,
        };
        let extra_runs = match ball.extra {
            Some(Extra::Wide) | Some(Extra::Bye) | Some(Extra::LegBye) => ball.runs,
            _ => 0,
        };

        self.total_runs = self
            .total_runs
            .saturating_add(ball.runs)
            .saturating_add(penalty);
        self.extras = self
            .extras
            .saturating_add(penalty)
            .saturating_add(extra_runs);
        if ball.is_wicket {
            self.wickets = self.wickets.saturating_add(1);
        }

        if ball.is_legal() {
            self.current_over_balls += 1;
            if self.current_over_balls == BALLS_PER_OVER {
                self.current_overs += 1;
                self.current_over_balls = 0;
            }
        }
    }
}
