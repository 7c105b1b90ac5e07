pub mod at_bat;
pub mod events;
pub mod game;
pub mod hit_result;
pub mod runners;
pub mod team;

pub use at_bat::AtBat;
pub use events::{OutEvent, OutType, RunEvent, RunType};
pub use game::{GameInfo, GameState, TeamSide};
pub use hit_result::{HitResult, PlateOutcome, ResultCategory, ResultProfile};
pub use runners::RunnerState;
pub use team::{Player, Position, Team};
