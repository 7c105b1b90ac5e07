use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{AtBat, OutEvent, RunEvent, RunnerState, Team};
use crate::engine::InningState;
use crate::error::{Result, ScoreError};

/// Which club a record belongs to. The away club always bats in the top half.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    /// Side batting in the given half.
    pub fn batting(is_top: bool) -> Self {
        if is_top {
            TeamSide::Away
        } else {
            TeamSide::Home
        }
    }

    pub fn is_away(self) -> bool {
        self == TeamSide::Away
    }

    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Metadata captured when a game is opened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct GameInfo {
    pub date: NaiveDate,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub tournament: String,
}

impl GameInfo {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, venue: String::new(), tournament: String::new() }
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    pub fn with_tournament(mut self, tournament: impl Into<String>) -> Self {
        self.tournament = tournament.into();
        self
    }
}

/// Authoritative in-memory representation of one game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub tournament: String,
    pub home_team: Team,
    pub away_team: Team,
    pub current_inning: u32,
    pub is_top: bool,
    pub outs: u8,
    #[serde(default)]
    pub runners: RunnerState,
    #[serde(default)]
    pub run_events: Vec<RunEvent>,
    #[serde(default)]
    pub out_events: Vec<OutEvent>,
}

impl GameState {
    /// Fresh game at the top of the first inning with rosters seeded and no at-bats.
    pub fn new(home_team: Team, away_team: Team, info: GameInfo) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: info.date,
            venue: info.venue,
            tournament: info.tournament,
            home_team: home_team.roster_only(),
            away_team: away_team.roster_only(),
            current_inning: 1,
            is_top: true,
            outs: 0,
            runners: RunnerState::EMPTY,
            run_events: Vec::new(),
            out_events: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::Home => &mut self.home_team,
            TeamSide::Away => &mut self.away_team,
        }
    }

    pub fn batting_side(&self) -> TeamSide {
        TeamSide::batting(self.is_top)
    }

    pub fn batting_team(&self) -> &Team {
        self.team(self.batting_side())
    }

    pub fn fielding_team(&self) -> &Team {
        self.team(self.batting_side().opponent())
    }

    pub fn situation(&self) -> InningState {
        InningState {
            inning: self.current_inning,
            is_top: self.is_top,
            outs: self.outs,
            runners: self.runners,
        }
    }

    pub fn set_situation(&mut self, situation: InningState) {
        self.current_inning = situation.inning;
        self.is_top = situation.is_top;
        self.outs = situation.outs;
        self.runners = situation.runners;
    }

    /// Locate an at-bat on either team.
    pub fn find_at_bat(&self, at_bat_id: &str) -> Option<(TeamSide, &AtBat)> {
        [TeamSide::Away, TeamSide::Home]
            .into_iter()
            .find_map(|side| self.team(side).get_at_bat(at_bat_id).map(|ab| (side, ab)))
    }

    /// Structural check applied to documents coming back from storage or the UI.
    pub fn validate(&self) -> Result<()> {
        self.situation().validate()?;
        for side in [TeamSide::Away, TeamSide::Home] {
            for at_bat in &self.team(side).at_bats {
                at_bat.validate()?;
            }
        }
        for event in &self.run_events {
            event.validate()?;
        }
        for event in &self.out_events {
            event.validate()?;
        }
        if self.home_team.id == self.away_team.id {
            return Err(ScoreError::Validation(format!(
                "home and away teams share id {}",
                self.home_team.id
            )));
        }
        Ok(())
    }
}
