//! Periodic innings-summary trigger.
//!
//! A summary overlay fires at fixed over intervals. The interval scales with
//! the length of the innings so a T20 and an ODI both get a handful of
//! summaries.

use crate::{error::Result, Error, Innings, Match};

/// Upper bound of total overs (inclusive) and the interval used up to it.
/// Innings longer than the last bound use [`LONG_FORM_INTERVAL`].
const INTERVAL_STEPS: [(u32, u32); 3] = [(12, 3), (20, 5), (50, 10)];

/// Innings of at most this many overs use half their length as the interval.
const SHORT_FORM_MAX_OVERS: u32 = 6;

const LONG_FORM_INTERVAL: u32 = 15;

/// Number of completed overs between two summaries.
///
/// Returns 0 for innings of 0 or 1 overs.
pub fn summary_interval(total_overs: u32) -> u32 {
    if total_overs <= SHORT_FORM_MAX_OVERS {
        return total_overs / 2;
    }

    INTERVAL_STEPS
        .iter()
        .find(|(max_overs, _)| total_overs <= *max_overs)
        .map(|(_, interval)| *interval)
        .unwrap_or(LONG_FORM_INTERVAL)
}

/// Decide whether a summary overlay should be shown after the last ball.
///
/// Missing match or innings, a completed match and a finished innings all
/// yield `false`. Otherwise a summary shows at the end of every
/// [`summary_interval`]-th over.
///
/// Fails with [`Error::ZeroSummaryInterval`] if the over count reaches the
/// interval check with an interval of zero. That needs an innings of 0 or 1
/// overs whose progress counter has run past its length.
pub fn should_show_summary(m: Option<&Match>, innings: Option<&Innings>) -> Result<bool> {
    let (Some(m), Some(innings)) = (m, innings) else {
        return Ok(false);
    };

    if m.match_status.is_completed() {
        return Ok(false);
    }

    if innings.current_overs == innings.total_overs {
        return Ok(false);
    }

    if innings.current_overs == 0 || innings.current_over_balls != 0 {
        return Ok(false);
    }

    let interval = summary_interval(innings.total_overs);
    if interval == 0 {
        return Err(Error::ZeroSummaryInterval {
            total_overs: innings.total_overs,
        });
    }

    Ok(innings.current_overs % interval == 0)
}
