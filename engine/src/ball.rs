//! Ball outcomes and highlight classification.

use serde::{Deserialize, Serialize};

/// Kind of extra conceded on a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Extra {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

/// What happened on a single delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallOutcome {
    /// Runs scored off the delivery, excluding the wide/no-ball penalty
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub is_four: bool,
    #[serde(default)]
    pub is_six: bool,
    #[serde(default)]
    pub is_wicket: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
}

impl BallOutcome {
    /// A dot ball.
    pub fn dot() -> Self {
        Self::default()
    }

    /// A legal delivery with `runs` off the bat.
    pub fn runs(runs: u32) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    /// A legal delivery that takes a wicket.
    pub fn wicket() -> Self {
        Self {
            is_wicket: true,
            ..Self::default()
        }
    }

    /// An extra with `runs` run or awarded on top of any penalty.
    pub fn extra(kind: Extra, runs: u32) -> Self {
        Self {
            runs,
            extra: Some(kind),
            ..Self::default()
        }
    }

    /// Mark as a boundary four.
    pub fn four(mut self) -> Self {
        self.is_four = true;
        self
    }

    /// Mark as a six.
    pub fn six(mut self) -> Self {
        self.is_six = true;
        self
    }

    /// Whether the delivery counts towards the over.
    pub fn is_legal(&self) -> bool {
        !matches!(self.extra, Some(Extra::Wide) | Some(Extra::NoBall))
    }

    /// Whether the delivery deserves a highlight.
    pub fn is_highlight(&self) -> bool {
        is_highlight(self.is_four, self.is_six, self.is_wicket)
    }
}

/// A four, a six or a wicket is a highlight.
pub fn is_highlight(is_four: bool, is_six: bool, is_wicket: bool) -> bool {
    is_four || is_six || is_wicket
}
