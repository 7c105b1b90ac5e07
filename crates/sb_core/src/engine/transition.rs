//! Inning / baserunner transition engine.
//!
//! Pure functions from the current half-inning situation and one recorded
//! plate appearance to the next situation. Outs never remove a runner, and a
//! non-out advances every runner by the same number of bases as the batter
//! (errors and fielder's choices included).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::models::{AtBat, HitResult, RunnerState};

pub const OUTS_PER_HALF: u8 = 3;

/// Inning, half, outs and base occupancy at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InningState {
    pub inning: u32,
    pub is_top: bool,
    pub outs: u8,
    #[serde(default)]
    pub runners: RunnerState,
}

impl Default for InningState {
    fn default() -> Self {
        Self::start()
    }
}

/// Outcome of applying one plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: InningState,
    /// Runners (plus the batter on a home run) who crossed the plate.
    pub runners_scored: u8,
    /// The third out was recorded and the half flipped.
    pub half_inning_ended: bool,
}

impl InningState {
    /// Top of the first, nobody out, bases empty.
    pub const fn start() -> Self {
        Self { inning: 1, is_top: true, outs: 0, runners: RunnerState::EMPTY }
    }

    pub const fn new(inning: u32, is_top: bool, outs: u8, runners: RunnerState) -> Self {
        Self { inning, is_top, outs, runners }
    }

    pub fn validate(&self) -> Result<()> {
        if self.inning < 1 {
            return Err(ScoreError::InvalidSituation(format!(
                "inning must be >= 1, got {}",
                self.inning
            )));
        }
        if self.outs >= OUTS_PER_HALF {
            return Err(ScoreError::InvalidSituation(format!(
                "outs must be 0..={}, got {}",
                OUTS_PER_HALF - 1,
                self.outs
            )));
        }
        Ok(())
    }

    /// First moment of the following half-inning.
    pub fn next_half(&self) -> Self {
        if self.is_top {
            Self::new(self.inning, false, 0, RunnerState::EMPTY)
        } else {
            Self::new(self.inning + 1, true, 0, RunnerState::EMPTY)
        }
    }

    /// One more out; the third flips the half.
    pub fn after_out(&self) -> Transition {
        let outs = self.outs + 1;
        if outs >= OUTS_PER_HALF {
            Transition { state: self.next_half(), runners_scored: 0, half_inning_ended: true }
        } else {
            Transition {
                state: Self { outs, ..*self },
                runners_scored: 0,
                half_inning_ended: false,
            }
        }
    }

    /// Batter not out: advance by the result's base count.
    pub fn after_safe(&self, result: HitResult) -> Transition {
        let (runners, runners_scored) = advance_runners(self.runners, result.bases());
        Transition {
            state: Self { runners, ..*self },
            runners_scored,
            half_inning_ended: false,
        }
    }

    pub fn after_at_bat(&self, at_bat: &AtBat) -> Transition {
        next_state(self, at_bat.is_out, at_bat.result)
    }
}

/// Next situation after a plate appearance with the given out flag and result.
pub fn next_state(state: &InningState, is_out: bool, result: HitResult) -> Transition {
    if is_out {
        state.after_out()
    } else {
        state.after_safe(result)
    }
}

/// Move every runner and then the batter `bases` bases.
///
/// Third is resolved before second, second before first, and the batter is
/// placed last so no base is ever double-occupied. Returns the new occupancy
/// and how many crossed the plate.
pub fn advance_runners(runners: RunnerState, bases: u8) -> (RunnerState, u8) {
    if bases == 0 {
        return (runners, 0);
    }
    if bases >= 4 {
        return (RunnerState::EMPTY, runners.occupied() + 1);
    }

    let mut next = RunnerState::EMPTY;
    let mut scored = 0;

    if runners.third {
        scored += 1;
    }
    if runners.second {
        if bases == 1 {
            next.third = true;
        } else {
            scored += 1;
        }
    }
    if runners.first {
        match bases {
            1 => next.second = true,
            2 => next.third = true,
            _ => scored += 1,
        }
    }

    match bases {
        1 => next.first = true,
        2 => next.second = true,
        _ => next.third = true,
    }

    (next, scored)
}
