//! Shared game fixtures for unit tests.

use chrono::NaiveDate;

use crate::models::{GameInfo, GameState, Player, Position, Team};

/// Two small rosters: home `h1`/`h2`, away `a1`/`a2`.
pub(crate) fn sample_game() -> GameState {
    let home = Team::new(
        "Home Hawks",
        vec![
            Player::new("Hana").with_id("h1").with_number(1).with_position(Position::Pitcher),
            Player::new("Hiro").with_id("h2").with_number(7).with_position(Position::Catcher),
        ],
    )
    .with_id("home");
    let away = Team::new(
        "Away Owls",
        vec![
            Player::new("Aoi").with_id("a1").with_number(4).with_position(Position::Shortstop),
            Player::new("Akira").with_id("a2").with_number(10).with_position(Position::CenterField),
        ],
    )
    .with_id("away");
    let info = GameInfo::new(NaiveDate::from_ymd_opt(2026, 5, 2).unwrap())
        .with_venue("Riverside Field")
        .with_tournament("Spring Cup");
    GameState::new(home, away, info).with_id("g1")
}
