//! One file per document under a save directory.
//!
//! ```text
//! <root>/games/<game id>.sbg
//! <root>/teams/<team id>.sbt
//! ```

use std::fs::{self, remove_file, rename, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::error::SaveError;
use super::format::{decompress_and_deserialize, seal, serialize_and_compress, unseal, GameDocument};
use super::migration::migrate_document;
use super::store::{sort_listings, GameListing, GameRepository, TeamRepository};
use crate::error::ScoreError;
use crate::models::Team;

const GAME_EXT: &str = "sbg";
const TEAM_EXT: &str = "sbt";

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn games_dir(&self) -> PathBuf {
        self.root.join("games")
    }

    fn teams_dir(&self) -> PathBuf {
        self.root.join("teams")
    }

    fn game_path(&self, game_id: &str) -> Result<PathBuf, SaveError> {
        check_id(game_id)?;
        Ok(self.games_dir().join(format!("{game_id}.{GAME_EXT}")))
    }

    fn team_path(&self, team_id: &str) -> Result<PathBuf, SaveError> {
        check_id(team_id)?;
        Ok(self.teams_dir().join(format!("{team_id}.{TEAM_EXT}")))
    }

    /// Read, verify and migrate a game document from an arbitrary path.
    pub fn read_document(path: &Path) -> Result<GameDocument, SaveError> {
        let data = read_bytes(path)?;
        let document = migrate_document(decompress_and_deserialize(&data)?)?;
        document.validate()?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(document)
    }

    pub fn write_document(path: &Path, document: &GameDocument) -> Result<(), SaveError> {
        let data = serialize_and_compress(document)?;
        write_atomic(path, &data)
    }
}

/// Ids become file names, so only a conservative character set is allowed.
fn check_id(id: &str) -> Result<(), SaveError> {
    let valid = !id.is_empty()
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SaveError::Invalid(ScoreError::Validation(format!("unusable document id {id:?}"))))
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, SaveError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let id = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default().to_string();
            return Err(SaveError::NotFound { id });
        }
        Err(err) => return Err(err.into()),
    };
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

/// Write to a temp file, then rename over the target.
fn write_atomic(path: &Path, data: &[u8]) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.flush()?;
        file.sync_all()?;
    }
    rename(&temp_path, path)?;

    log::debug!("Saved {} bytes to {:?}", data.len(), path);
    Ok(())
}

/// Files in `dir` with extension `ext`; a missing directory is empty.
fn entries(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, SaveError> {
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    let mut paths = Vec::new();
    for entry in listing {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some(ext) {
            paths.push(path);
        }
    }
    Ok(paths)
}

fn delete_file(path: &Path) -> Result<bool, SaveError> {
    match remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

impl GameRepository for FileStore {
    fn save_game(&self, document: &GameDocument) -> Result<(), SaveError> {
        let path = self.game_path(document.id())?;
        let mut stored = document.clone();
        stored.update_timestamp();
        Self::write_document(&path, &stored)?;

        log::info!("Game {} saved", document.id());
        Ok(())
    }

    fn load_game(&self, game_id: &str) -> Result<GameDocument, SaveError> {
        let document = Self::read_document(&self.game_path(game_id)?)?;
        log::info!("Game {} loaded", game_id);
        Ok(document)
    }

    fn list_games(&self, owner_id: Option<&str>) -> Result<Vec<GameListing>, SaveError> {
        let mut listings = Vec::new();
        for path in entries(&self.games_dir(), GAME_EXT)? {
            match Self::read_document(&path) {
                Ok(doc) => {
                    if owner_id.map_or(true, |owner| doc.owner_id.as_deref() == Some(owner)) {
                        listings.push(GameListing::from(&doc));
                    }
                }
                Err(err) => log::warn!("Skipping unreadable game file {:?}: {}", path, err),
            }
        }
        sort_listings(&mut listings);
        Ok(listings)
    }

    fn delete_game(&self, game_id: &str) -> Result<bool, SaveError> {
        let removed = delete_file(&self.game_path(game_id)?)?;
        if removed {
            log::info!("Deleted game {}", game_id);
        }
        Ok(removed)
    }
}

impl TeamRepository for FileStore {
    fn save_team(&self, team: &Team) -> Result<(), SaveError> {
        let path = self.team_path(&team.id)?;
        write_atomic(&path, &seal(&team.roster_only())?)?;
        log::info!("Team {} saved", team.id);
        Ok(())
    }

    fn load_team(&self, team_id: &str) -> Result<Team, SaveError> {
        let data = read_bytes(&self.team_path(team_id)?)?;
        unseal(&data)
    }

    fn list_teams(&self) -> Result<Vec<Team>, SaveError> {
        let mut teams = Vec::new();
        for path in entries(&self.teams_dir(), TEAM_EXT)? {
            match read_bytes(&path).and_then(|data| unseal::<Team>(&data)) {
                Ok(team) => teams.push(team),
                Err(err) => log::warn!("Skipping unreadable team file {:?}: {}", path, err),
            }
        }
        teams.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(teams)
    }

    fn delete_team(&self, team_id: &str) -> Result<bool, SaveError> {
        delete_file(&self.team_path(team_id)?)
    }
}
