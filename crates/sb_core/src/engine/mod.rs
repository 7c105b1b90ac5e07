//! Deterministic game engine: half-inning transitions and the game-end predicate.

pub mod game_end;
pub mod transition;

pub use game_end::{is_game_end, GameRules, REGULATION_INNINGS};
pub use transition::{advance_runners, next_state, InningState, Transition, OUTS_PER_HALF};
