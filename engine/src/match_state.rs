//! Match state and active innings selection.
//!
//! A match holds four innings slots: two regular innings and, once the match
//! goes to a super over, two more nested under [`SuperOver`]. Which slot is
//! live is a pure function of `(is_super_over, current_inning,
//! super_over.current_inning)`. The scoring session flips those switches; this
//! module only reads them.

use crate::{error::Result, Error, Innings};
use serde::{Deserialize, Serialize};

/// First or second innings of a match or of a super over.
///
/// Serialized as the number `1` or `2`. Any other number is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InningNumber {
    First,
    Second,
}

impl TryFrom<u8> for InningNumber {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(InningNumber::First),
            2 => Ok(InningNumber::Second),
            other => Err(Error::InvalidInningNumber(other)),
        }
    }
}

impl From<InningNumber> for u8 {
    fn from(value: InningNumber) -> Self {
        match value {
            InningNumber::First => 1,
            InningNumber::Second => 2,
        }
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    #[default]
    NotStarted,
    Live,
    InningsBreak,
    Completed,
    Abandoned,
}

impl MatchStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, MatchStatus::Completed)
    }
}

/// One of the four innings slots of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InningsSlot {
    Inning1,
    Inning2,
    SuperOverInning1,
    SuperOverInning2,
}

/// Tie-breaker state with its own pair of innings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperOver {
    pub current_inning: InningNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inning1: Option<Innings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inning2: Option<Innings>,
}

impl SuperOver {
    /// A super over about to start its first innings.
    pub fn new() -> Self {
        Self {
            current_inning: InningNumber::First,
            inning1: None,
            inning2: None,
        }
    }

    fn current(&self) -> Option<&Innings> {
        pick(self.current_inning, &self.inning1, &self.inning2)
    }

    fn current_mut(&mut self) -> Option<&mut Innings> {
        match self.current_inning {
            InningNumber::First => self.inning1.as_mut(),
            InningNumber::Second => self.inning2.as_mut(),
        }
    }
}

impl Default for SuperOver {
    fn default() -> Self {
        Self::new()
    }
}

/// Root aggregate for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub current_inning: InningNumber,
    #[serde(default)]
    pub is_super_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_over: Option<SuperOver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inning1: Option<Innings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inning2: Option<Innings>,
    #[serde(default)]
    pub match_status: MatchStatus,
}

fn pick<'a>(
    number: InningNumber,
    first: &'a Option<Innings>,
    second: &'a Option<Innings>,
) -> Option<&'a Innings> {
    match number {
        InningNumber::First => first.as_ref(),
        InningNumber::Second => second.as_ref(),
    }
}

impl Match {
    /// A match that has not started, with its first innings in place.
    pub fn new(inning1: Innings) -> Self {
        Self {
            current_inning: InningNumber::First,
            is_super_over: false,
            super_over: None,
            inning1: Some(inning1),
            inning2: None,
            match_status: MatchStatus::NotStarted,
        }
    }

    /// Which slot is currently active.
    pub fn active_slot(&self) -> Result<InningsSlot> {
        if !self.is_super_over {
            return Ok(match self.current_inning {
                InningNumber::First => InningsSlot::Inning1,
                InningNumber::Second => InningsSlot::Inning2,
            });
        }

        let super_over = self.super_over.as_ref().ok_or(Error::MissingSuperOver)?;
        Ok(match super_over.current_inning {
            InningNumber::First => InningsSlot::SuperOverInning1,
            InningNumber::Second => InningsSlot::SuperOverInning2,
        })
    }

    /// The innings currently being played, if its slot is filled.
    pub fn active_innings(&self) -> Result<Option<&Innings>> {
        if !self.is_super_over {
            return Ok(pick(self.current_inning, &self.inning1, &self.inning2));
        }

        let super_over = self.super_over.as_ref().ok_or(Error::MissingSuperOver)?;
        Ok(super_over.current())
    }

    /// Mutable access to the innings currently being played.
    pub fn active_innings_mut(&mut self) -> Result<Option<&mut Innings>> {
        if !self.is_super_over {
            return Ok(match self.current_inning {
                InningNumber::First => self.inning1.as_mut(),
                InningNumber::Second => self.inning2.as_mut(),
            });
        }

        let super_over = self.super_over.as_mut().ok_or(Error::MissingSuperOver)?;
        Ok(super_over.current_mut())
    }
}

/// Resolve the active innings of an optional match.
///
/// An absent match is not an error and yields `Ok(None)`.
pub fn active_innings(m: Option<&Match>) -> Result<Option<&Innings>> {
    match m {
        Some(m) => m.active_innings(),
        None => Ok(None),
    }
}
