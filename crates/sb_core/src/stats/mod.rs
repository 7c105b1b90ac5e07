//! Derived scoring and batting statistics. Everything here is a pure function
//! of the recorded at-bats and run events.

pub mod batting;
pub mod format;
pub mod score;

pub use batting::{
    batting_average, batting_lines, on_base_percentage, ops, slugging_percentage, team_batting,
    BattingCounts, BattingLine,
};
pub use format::format_rate;
pub use score::{errors, hits, inning_score, total_score, LineScore, Scoreboard};
