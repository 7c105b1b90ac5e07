use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AtBat;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
pub enum Position {
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
    #[serde(rename = "DH")]
    DesignatedHitter,
    /// Extra hitter, common in youth leagues that bat the whole roster.
    #[serde(rename = "EH")]
    ExtraHitter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4().to_string(), name: name.into(), number: None, position: None }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_number(mut self, number: u16) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// A roster plus the at-bats it has recorded in the current game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub at_bats: Vec<AtBat>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { id: Uuid::new_v4().to_string(), name: name.into(), players, at_bats: Vec::new() }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.get_player(player_id).is_some()
    }

    pub fn get_at_bat(&self, at_bat_id: &str) -> Option<&AtBat> {
        self.at_bats.iter().find(|ab| ab.id == at_bat_id)
    }

    /// Replace the at-bat with the same id. Returns false if none matched.
    pub fn replace_at_bat(&mut self, at_bat: AtBat) -> bool {
        match self.at_bats.iter_mut().find(|ab| ab.id == at_bat.id) {
            Some(existing) => {
                *existing = at_bat;
                true
            }
            None => false,
        }
    }

    pub fn remove_at_bat(&mut self, at_bat_id: &str) -> Option<AtBat> {
        let idx = self.at_bats.iter().position(|ab| ab.id == at_bat_id)?;
        Some(self.at_bats.remove(idx))
    }

    pub fn at_bats_for(&self, player_id: &str) -> Vec<&AtBat> {
        self.at_bats.iter().filter(|ab| ab.player_id == player_id).collect()
    }

    /// Roster seed for a new game: same players, no at-bats.
    pub fn roster_only(&self) -> Team {
        Team { at_bats: Vec::new(), ..self.clone() }
    }
}
