use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Youth-league regulation game length.
pub const REGULATION_INNINGS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GameRules {
    pub regulation_innings: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self { regulation_innings: REGULATION_INNINGS }
    }
}

impl GameRules {
    /// Past regulation, or the bottom of the final regulation inning reached.
    pub fn is_game_end(&self, inning: u32, is_top: bool) -> bool {
        inning > self.regulation_innings || (inning == self.regulation_innings && !is_top)
    }
}

/// Game-end predicate under the default seven-inning rules.
pub fn is_game_end(inning: u32, is_top: bool) -> bool {
    GameRules::default().is_game_end(inning, is_top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seven_innings() {
        assert!(is_game_end(7, false));
        assert!(is_game_end(8, true));
        assert!(!is_game_end(6, false));
        assert!(!is_game_end(7, true));
        assert!(!is_game_end(1, true));
    }

    #[test]
    fn test_custom_length() {
        let rules = GameRules { regulation_innings: 6 };
        assert!(rules.is_game_end(6, false));
        assert!(!rules.is_game_end(6, true));
        assert!(rules.is_game_end(7, true));
    }
}
