//! Scorebook CLI library
//!
//! Game JSON ↔ binary save document, command replay, and text scoresheets.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use sb_core::api::{ScoresheetResponse, TeamBatting};
use sb_core::save::GameListing;
use sb_core::{
    FileStore, GameDocument, GameRepository, GameSession, GameState, ScoreCommand,
    ScorebookConfig, Scoreboard,
};

/// Load `--config` if given, else `SB_CONFIG_PATH`, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<ScorebookConfig> {
    match path {
        Some(path) => ScorebookConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => ScorebookConfig::from_env().context("Failed to load config from SB_CONFIG_PATH"),
    }
}

pub fn read_game(path: &Path) -> Result<GameState> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read game file: {}", path.display()))?;
    let game: GameState = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse game JSON: {}", path.display()))?;
    game.validate().with_context(|| format!("Invalid game: {}", path.display()))?;
    Ok(game)
}

pub fn read_commands(path: &Path) -> Result<Vec<ScoreCommand>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read commands file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse commands JSON: {}", path.display()))
}

pub fn write_game(path: &Path, game: &GameState) -> Result<()> {
    let json = serde_json::to_string_pretty(game)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Text scoresheet: line score, situation, then both batting tables.
pub fn summary(game: &GameState, config: &ScorebookConfig) -> String {
    let sheet = ScoresheetResponse::build(game, &config.rules);
    let mut out = String::new();

    out.push_str(&render_line_score(&sheet.line_score));
    let half = if sheet.situation.is_top { "Top" } else { "Bottom" };
    let _ = writeln!(
        out,
        "\n{} {}, {} out{}",
        half,
        sheet.situation.inning,
        sheet.situation.outs,
        if sheet.game_over { " (final)" } else { "" }
    );

    for batting in [&sheet.away_batting, &sheet.home_batting] {
        out.push('\n');
        out.push_str(&render_batting(batting));
    }
    out
}

pub fn render_line_score(board: &Scoreboard) -> String {
    let width = board.away.team.len().max(board.home.team.len()).max(4);
    let mut out = format!("{:width$}", "");
    for inning in 1..=board.away.innings.len() {
        let _ = write!(out, " {inning:>2}");
    }
    out.push_str(" |  R  H  E\n");

    for line in [&board.away, &board.home] {
        let _ = write!(out, "{:width$}", line.team);
        for runs in &line.innings {
            match runs {
                Some(r) => {
                    let _ = write!(out, " {r:>2}");
                }
                None => out.push_str("  -"),
            }
        }
        let _ = writeln!(out, " | {:>2} {:>2} {:>2}", line.runs, line.hits, line.errors);
    }
    out
}

pub fn render_batting(batting: &TeamBatting) -> String {
    let mut out = format!("{}\n", batting.team);
    out.push_str("  #  Name             PA AB  H RBI BB SO   AVG   OBP   SLG   OPS\n");
    for row in batting.lines.iter().chain(std::iter::once(&batting.totals)) {
        let number = row.number.map(|n| n.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>3}  {:<16} {:>2} {:>2} {:>2} {:>3} {:>2} {:>2} {:>5} {:>5} {:>5} {:>5}",
            number, row.name, row.pa, row.ab, row.h, row.rbi, row.bb, row.so, row.avg, row.obp,
            row.slg, row.ops
        );
    }
    out
}

/// Replay commands against a game and return the result.
pub fn apply(
    game: GameState,
    commands: Vec<ScoreCommand>,
    config: &ScorebookConfig,
) -> Result<GameState> {
    let mut session = GameSession::with_config(game, config);
    for (index, command) in commands.into_iter().enumerate() {
        let name = command.name();
        session
            .apply(command)
            .with_context(|| format!("Command {index} ({name}) rejected"))?;
    }
    Ok(session.into_game())
}

pub fn pack(
    game: GameState,
    out: &Path,
    owner: Option<String>,
    public: bool,
) -> Result<GameDocument> {
    let mut document = GameDocument::new(game).with_public(public);
    document.owner_id = owner;
    FileStore::write_document(out, &document)
        .with_context(|| format!("Failed to write save file: {}", out.display()))?;
    Ok(document)
}

pub fn unpack(input: &Path) -> Result<GameDocument> {
    FileStore::read_document(input)
        .with_context(|| format!("Failed to read save file: {}", input.display()))
}

pub fn store_game(
    config: &ScorebookConfig,
    game: GameState,
    owner: Option<String>,
    public: bool,
) -> Result<()> {
    let store = FileStore::new(&config.storage.save_dir);
    let mut document = GameDocument::new(game).with_public(public);
    document.owner_id = owner;
    store
        .save_game(&document)
        .with_context(|| format!("Failed to store game in {}", store.root().display()))
}

pub fn list_games(config: &ScorebookConfig, owner: Option<&str>) -> Result<Vec<GameListing>> {
    let store = FileStore::new(&config.storage.save_dir);
    store
        .list_games(owner)
        .with_context(|| format!("Failed to list games in {}", store.root().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::{AtBatInput, GameInfo, HitResult, Player, Team};
    use tempfile::TempDir;

    fn game() -> GameState {
        let home = Team::new("Hawks", vec![Player::new("Hana").with_id("h1").with_number(1)])
            .with_id("home");
        let away = Team::new("Owls", vec![Player::new("Aoi").with_id("a1").with_number(4)])
            .with_id("away");
        let date = "2026-05-02".parse().unwrap();
        GameState::new(home, away, GameInfo::new(date)).with_id("g1")
    }

    fn config_in(dir: &TempDir) -> ScorebookConfig {
        let mut config = ScorebookConfig::default();
        config.storage.save_dir = dir.path().join("saves");
        config
    }

    #[test]
    fn test_apply_and_summary() {
        let commands = vec![
            ScoreCommand::RecordAtBat(AtBatInput::new("a1", HitResult::HomeRun)),
            ScoreCommand::RecordAtBat(AtBatInput::new("a1", HitResult::Strikeout)),
        ];
        let game = apply(game(), commands, &ScorebookConfig::default()).unwrap();
        assert_eq!(game.outs, 1);

        let text = summary(&game, &ScorebookConfig::default());
        assert!(text.contains("Owls   1  -  -  -  -  -  - |  1  1  0"), "{text}");
        assert!(text.contains("Top 1, 1 out"));
        assert!(text.contains("Aoi"));
    }

    #[test]
    fn test_apply_reports_failing_command() {
        let commands = vec![ScoreCommand::DeleteAtBat { id: "missing".into() }];
        let err = apply(game(), commands, &ScorebookConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Command 0 (delete_at_bat) rejected"));
    }

    #[test]
    fn test_pack_unpack() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("g1.sbg");
        pack(game(), &path, Some("coach-1".into()), true).unwrap();

        let document = unpack(&path).unwrap();
        assert_eq!(document.game, game());
        assert!(document.is_public);
        assert_eq!(document.owner_id.as_deref(), Some("coach-1"));
    }

    #[test]
    fn test_store_and_list() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        store_game(&config, game(), None, false).unwrap();

        let listings = list_games(&config, None).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].away_team, "Owls");
    }

    #[test]
    fn test_game_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.json");
        write_game(&path, &game()).unwrap();
        assert_eq!(read_game(&path).unwrap(), game());
        assert!(read_game(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scorebook.yaml");
        fs::write(&path, "rules:\n  regulation_innings: 6\n").unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().rules.regulation_innings, 6);
    }
}
