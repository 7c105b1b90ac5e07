//! Persistence traits and the in-memory store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

use super::error::SaveError;
use super::format::{current_timestamp, GameDocument};
use crate::models::Team;

/// Listing row for a stored game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListing {
    pub id: String,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub saved_at: u64,
    pub is_public: bool,
    pub owner_id: Option<String>,
}

impl From<&GameDocument> for GameListing {
    fn from(doc: &GameDocument) -> Self {
        Self {
            id: doc.game.id.clone(),
            date: doc.game.date,
            home_team: doc.game.home_team.name.clone(),
            away_team: doc.game.away_team.name.clone(),
            saved_at: doc.saved_at,
            is_public: doc.is_public,
            owner_id: doc.owner_id.clone(),
        }
    }
}

pub trait GameRepository {
    /// Insert or overwrite by game id.
    fn save_game(&self, document: &GameDocument) -> Result<(), SaveError>;

    fn load_game(&self, game_id: &str) -> Result<GameDocument, SaveError>;

    /// Load through a share link: only public documents are returned.
    fn load_shared_game(&self, game_id: &str) -> Result<GameDocument, SaveError> {
        let document = self.load_game(game_id)?;
        if document.is_public {
            Ok(document)
        } else {
            log::warn!("Refused shared load of private game {}", game_id);
            Err(SaveError::NotAuthorized { id: game_id.to_string() })
        }
    }

    /// Most recent first. `owner_id` restricts the listing to one owner.
    fn list_games(&self, owner_id: Option<&str>) -> Result<Vec<GameListing>, SaveError>;

    /// Returns whether a document was removed.
    fn delete_game(&self, game_id: &str) -> Result<bool, SaveError>;
}

/// Roster storage. At-bats are game data and are never persisted with a team.
pub trait TeamRepository {
    fn save_team(&self, team: &Team) -> Result<(), SaveError>;

    fn load_team(&self, team_id: &str) -> Result<Team, SaveError>;

    /// Sorted by name.
    fn list_teams(&self) -> Result<Vec<Team>, SaveError>;

    fn delete_team(&self, team_id: &str) -> Result<bool, SaveError>;
}

pub(crate) fn sort_listings(listings: &mut [GameListing]) {
    listings.sort_by(|a, b| b.saved_at.cmp(&a.saved_at).then_with(|| a.id.cmp(&b.id)));
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    games: RwLock<HashMap<String, GameDocument>>,
    teams: RwLock<HashMap<String, Team>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameRepository for InMemoryStore {
    fn save_game(&self, document: &GameDocument) -> Result<(), SaveError> {
        document.validate()?;
        let mut stored = document.clone();
        stored.saved_at = current_timestamp();

        let mut games = self.games.write().map_err(|_| SaveError::LockPoisoned)?;
        games.insert(stored.game.id.clone(), stored);
        log::debug!("Stored game {} in memory", document.id());
        Ok(())
    }

    fn load_game(&self, game_id: &str) -> Result<GameDocument, SaveError> {
        let games = self.games.read().map_err(|_| SaveError::LockPoisoned)?;
        games.get(game_id).cloned().ok_or_else(|| SaveError::NotFound { id: game_id.to_string() })
    }

    fn list_games(&self, owner_id: Option<&str>) -> Result<Vec<GameListing>, SaveError> {
        let games = self.games.read().map_err(|_| SaveError::LockPoisoned)?;
        let mut listings: Vec<GameListing> = games
            .values()
            .filter(|doc| owner_id.map_or(true, |owner| doc.owner_id.as_deref() == Some(owner)))
            .map(GameListing::from)
            .collect();
        sort_listings(&mut listings);
        Ok(listings)
    }

    fn delete_game(&self, game_id: &str) -> Result<bool, SaveError> {
        let mut games = self.games.write().map_err(|_| SaveError::LockPoisoned)?;
        Ok(games.remove(game_id).is_some())
    }
}

impl TeamRepository for InMemoryStore {
    fn save_team(&self, team: &Team) -> Result<(), SaveError> {
        let mut teams = self.teams.write().map_err(|_| SaveError::LockPoisoned)?;
        teams.insert(team.id.clone(), team.roster_only());
        Ok(())
    }

    fn load_team(&self, team_id: &str) -> Result<Team, SaveError> {
        let teams = self.teams.read().map_err(|_| SaveError::LockPoisoned)?;
        teams.get(team_id).cloned().ok_or_else(|| SaveError::NotFound { id: team_id.to_string() })
    }

    fn list_teams(&self) -> Result<Vec<Team>, SaveError> {
        let teams = self.teams.read().map_err(|_| SaveError::LockPoisoned)?;
        let mut all: Vec<Team> = teams.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    fn delete_team(&self, team_id: &str) -> Result<bool, SaveError> {
        let mut teams = self.teams.write().map_err(|_| SaveError::LockPoisoned)?;
        Ok(teams.remove(team_id).is_some())
    }
}
