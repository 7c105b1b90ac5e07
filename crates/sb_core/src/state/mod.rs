//! Owned game store with undo/redo and the command surface over it.

pub mod command;
pub mod session;

pub use command::{CommandOutcome, ScoreCommand};
pub use session::{AtBatInput, GameSession, RecordedAtBat};
