//! # sb_core - Youth Baseball Scorekeeping Core
//!
//! Records plate appearances pitch-side and derives everything else from
//! them: the inning situation, line score, and batting statistics.
//!
//! ## Features
//! - Deterministic half-inning transitions and runner advancement
//! - Batting rates (AVG, OBP, SLG, OPS) with zero-guarded denominators
//! - Linear undo/redo over whole-game snapshots
//! - Compressed, checksummed game documents with versioned migration
//! - JSON API for UI integration

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod models;
pub mod save;
pub mod state;
pub mod stats;

#[cfg(test)]
mod test_fixtures;

pub use api::{apply_commands_json, summarize_game_json, ScoresheetResponse};
pub use config::ScorebookConfig;
pub use engine::{is_game_end, next_state, GameRules, InningState, Transition};
pub use error::{ConfigError, Result, ScoreError};
pub use history::{UndoRedo, UndoRedoState};
pub use models::{
    AtBat, GameInfo, GameState, HitResult, OutEvent, OutType, Player, Position, RunEvent,
    RunType, RunnerState, Team, TeamSide,
};
pub use save::{
    FileStore, GameDocument, GameRepository, InMemoryStore, SaveError, TeamRepository,
};
pub use state::{AtBatInput, CommandOutcome, GameSession, ScoreCommand};
pub use stats::{
    batting_average, format_rate, on_base_percentage, ops, slugging_percentage, total_score,
    BattingCounts, BattingLine, Scoreboard,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
