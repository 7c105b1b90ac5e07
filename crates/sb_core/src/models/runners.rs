use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Occupancy of each base within one half-inning.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
pub struct RunnerState {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

impl RunnerState {
    pub const EMPTY: RunnerState = RunnerState { first: false, second: false, third: false };

    pub const fn new(first: bool, second: bool, third: bool) -> Self {
        Self { first, second, third }
    }

    pub fn is_empty(&self) -> bool {
        !(self.first || self.second || self.third)
    }

    pub fn occupied(&self) -> u8 {
        self.first as u8 + self.second as u8 + self.third as u8
    }

    pub fn bases_loaded(&self) -> bool {
        self.first && self.second && self.third
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_counts() {
        assert!(RunnerState::EMPTY.is_empty());
        assert_eq!(RunnerState::default(), RunnerState::EMPTY);
        assert_eq!(RunnerState::new(true, false, true).occupied(), 2);
        assert!(RunnerState::new(true, true, true).bases_loaded());
    }
}
