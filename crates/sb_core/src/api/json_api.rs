use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::{GameRules, InningState};
use crate::error::ScoreError;
use crate::models::{GameState, Team, TeamSide};
use crate::state::{CommandOutcome, GameSession, ScoreCommand};
use crate::stats::{batting_lines, format_rate, team_batting, BattingCounts, Scoreboard};

pub const SCHEMA_VERSION: u8 = 1;

pub mod error_codes {
    pub const INVALID_JSON: &str = "E_INVALID_JSON";
    pub const UNSUPPORTED_SCHEMA: &str = "E_UNSUPPORTED_SCHEMA";
    pub const SERIALIZATION: &str = "E_SERIALIZATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn score_err(err: &ScoreError) -> String {
    err_code(err.code(), err)
}

/// One player's row with rates in scorebook notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingRow {
    pub player_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u16>,
    pub pa: u32,
    pub ab: u32,
    pub h: u32,
    #[serde(rename = "2b")]
    pub doubles: u32,
    #[serde(rename = "3b")]
    pub triples: u32,
    pub hr: u32,
    pub rbi: u32,
    pub bb: u32,
    pub hbp: u32,
    pub so: u32,
    pub sac: u32,
    pub avg: String,
    pub obp: String,
    pub slg: String,
    pub ops: String,
}

impl BattingRow {
    fn new(player_id: &str, name: &str, number: Option<u16>, c: &BattingCounts) -> Self {
        Self {
            player_id: player_id.to_string(),
            name: name.to_string(),
            number,
            pa: c.plate_appearances,
            ab: c.at_bats,
            h: c.hits,
            doubles: c.doubles,
            triples: c.triples,
            hr: c.home_runs,
            rbi: c.rbi,
            bb: c.walks,
            hbp: c.hit_by_pitch,
            so: c.strikeouts,
            sac: c.sacrifices,
            avg: format_rate(c.batting_average()),
            obp: format_rate(c.on_base_percentage()),
            slg: format_rate(c.slugging_percentage()),
            ops: format_rate(c.ops()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBatting {
    pub team_id: String,
    pub team: String,
    pub lines: Vec<BattingRow>,
    pub totals: BattingRow,
}

impl TeamBatting {
    fn for_team(team: &Team) -> Self {
        let lines = batting_lines(team)
            .iter()
            .map(|line| BattingRow::new(&line.player_id, &line.name, line.number, &line.counts))
            .collect();
        Self {
            team_id: team.id.clone(),
            team: team.name.clone(),
            lines,
            totals: BattingRow::new(&team.id, "Total", None, &team_batting(team)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresheetResponse {
    pub schema_version: u8,
    pub game_id: String,
    pub date: String,
    pub venue: String,
    pub tournament: String,
    pub line_score: Scoreboard,
    pub situation: InningState,
    pub game_over: bool,
    /// `None` while tied
    pub leader: Option<TeamSide>,
    pub away_batting: TeamBatting,
    pub home_batting: TeamBatting,
}

impl ScoresheetResponse {
    pub fn build(game: &GameState, rules: &GameRules) -> Self {
        let line_score = Scoreboard::for_game(game, rules);
        Self {
            schema_version: SCHEMA_VERSION,
            game_id: game.id.clone(),
            date: game.date.to_string(),
            venue: game.venue.clone(),
            tournament: game.tournament.clone(),
            leader: line_score.leader(),
            line_score,
            situation: game.situation(),
            game_over: rules.is_game_end(game.current_inning, game.is_top),
            away_batting: TeamBatting::for_team(&game.away_team),
            home_batting: TeamBatting::for_team(&game.home_team),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplyCommandsRequest {
    pub schema_version: u8,
    pub game: GameState,
    #[serde(default)]
    pub commands: Vec<ScoreCommand>,
    #[serde(default)]
    pub rules: Option<GameRules>,
}

#[derive(Debug, Serialize)]
pub struct ApplyCommandsResponse {
    pub schema_version: u8,
    pub game: GameState,
    pub outcomes: Vec<CommandOutcome>,
    pub summary: ScoresheetResponse,
}

/// Input of [`summarize_game_json`]: a bare `GameState`, or the game with
/// league rules in the same shape as [`ApplyCommandsRequest`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SummarizeRequest {
    WithRules {
        game: GameState,
        #[serde(default)]
        rules: Option<GameRules>,
    },
    Game(GameState),
}

impl SummarizeRequest {
    fn into_parts(self) -> (GameState, GameRules) {
        match self {
            SummarizeRequest::WithRules { game, rules } => (game, rules.unwrap_or_default()),
            SummarizeRequest::Game(game) => (game, GameRules::default()),
        }
    }
}

/// Summarize a game. Rules default to seven regulation innings.
pub fn summarize_game_json(request_json: &str) -> Result<String, String> {
    let request: SummarizeRequest =
        serde_json::from_str(request_json).map_err(|e| err_code(error_codes::INVALID_JSON, e))?;
    let (game, rules) = request.into_parts();
    game.validate().map_err(|e| score_err(&e))?;

    let response = ScoresheetResponse::build(&game, &rules);
    debug!(game_id = %game.id, game_over = response.game_over, "scoresheet built");
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

/// Apply a batch of commands to a game; the batch fails as a whole on the
/// first rejected command.
pub fn apply_commands_json(request_json: &str) -> Result<String, String> {
    let request: ApplyCommandsRequest =
        serde_json::from_str(request_json).map_err(|e| err_code(error_codes::INVALID_JSON, e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::UNSUPPORTED_SCHEMA,
            format!("unsupported schema version {}", request.schema_version),
        ));
    }

    let rules = request.rules.unwrap_or_default();
    let mut session =
        GameSession::open(request.game).map_err(|e| score_err(&e))?.with_rules(rules);

    let mut outcomes = Vec::with_capacity(request.commands.len());
    for (index, command) in request.commands.into_iter().enumerate() {
        let name = command.name();
        let outcome = session.apply(command).map_err(|e| {
            err_code(e.code(), format!("command {index} ({name}) rejected: {e}"))
        })?;
        outcomes.push(outcome);
    }

    let game = session.into_game();
    let summary = ScoresheetResponse::build(&game, &rules);
    info!(game_id = %game.id, applied = outcomes.len(), "commands applied");

    let response =
        ApplyCommandsResponse { schema_version: SCHEMA_VERSION, game, outcomes, summary };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}
