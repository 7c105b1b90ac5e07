//! Game state store.
//!
//! A `GameSession` owns one game in progress. Every mutation clones the
//! present `GameState`, applies the change, and commits the result into the
//! linear history, so each command is exactly one undo step.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::config::ScorebookConfig;
use crate::engine::{GameRules, InningState};
use crate::error::{Result, ScoreError};
use crate::history::UndoRedo;
use crate::models::{
    AtBat, GameState, HitResult, OutEvent, OutType, RunEvent, RunType, Team,
};
use crate::stats::Scoreboard;

/// What the scorer entered for one plate appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtBatInput {
    pub player_id: String,
    pub result: HitResult,
    /// Defaults to the number of runners the engine moved across the plate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rbi: Option<u32>,
    /// Defaults to the result's usual out flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AtBatInput {
    pub fn new(player_id: impl Into<String>, result: HitResult) -> Self {
        Self { player_id: player_id.into(), result, rbi: None, is_out: None, description: None }
    }

    pub fn with_rbi(mut self, rbi: u32) -> Self {
        self.rbi = Some(rbi);
        self
    }

    pub fn with_out(mut self, is_out: bool) -> Self {
        self.is_out = Some(is_out);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedAtBat {
    pub at_bat: AtBat,
    pub runners_scored: u8,
    pub half_inning_ended: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    history: UndoRedo<GameState>,
    rules: GameRules,
}

impl GameSession {
    pub fn new(game: GameState) -> Self {
        Self { history: UndoRedo::new(game), rules: GameRules::default() }
    }

    pub fn with_config(game: GameState, config: &ScorebookConfig) -> Self {
        let history = match config.history.max_depth {
            Some(limit) => UndoRedo::with_limit(game, limit),
            None => UndoRedo::new(game),
        };
        Self { history, rules: config.rules }
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Start from a loaded document, rejecting malformed state.
    pub fn open(game: GameState) -> Result<Self> {
        game.validate()?;
        Ok(Self::new(game))
    }

    pub fn game(&self) -> &GameState {
        self.history.state()
    }

    pub fn into_game(self) -> GameState {
        self.history.into_state()
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Replace the game wholesale and forget all history.
    pub fn load(&mut self, game: GameState) -> Result<()> {
        game.validate()?;
        info!(game_id = %game.id, "game loaded into session");
        self.history.reset(game);
        Ok(())
    }

    pub fn is_game_over(&self) -> bool {
        let game = self.game();
        self.rules.is_game_end(game.current_inning, game.is_top)
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::for_game(self.game(), &self.rules)
    }

    // ========================
    // At-bats
    // ========================

    /// Record a plate appearance for the batting team and advance the situation.
    pub fn record_at_bat(&mut self, input: AtBatInput) -> Result<RecordedAtBat> {
        let mut game = self.game().clone();
        let side = game.batting_side();
        ensure_on_roster(game.team(side), &input.player_id)?;

        let was_over = self.is_game_over();
        if was_over {
            warn!(
                inning = game.current_inning,
                is_top = game.is_top,
                "recording an at-bat after regulation end"
            );
        }

        let situation = game.situation();
        let is_out = input.is_out.unwrap_or_else(|| input.result.is_out_by_default());
        let transition = crate::engine::next_state(&situation, is_out, input.result);

        let mut at_bat = AtBat::new(input.player_id, situation.inning, input.result)
            .with_out(is_out)
            .with_rbi(input.rbi.unwrap_or(transition.runners_scored as u32));
        at_bat.description = input.description;
        at_bat.validate()?;

        game.team_mut(side).at_bats.push(at_bat.clone());
        game.set_situation(transition.state);

        debug!(
            player_id = %at_bat.player_id,
            result = %at_bat.result,
            inning = situation.inning,
            is_top = situation.is_top,
            outs = transition.state.outs,
            "at-bat recorded"
        );
        if transition.half_inning_ended {
            info!(
                inning = transition.state.inning,
                is_top = transition.state.is_top,
                "half-inning changed"
            );
        }

        self.history.set(game);
        let game_over = self.is_game_over();
        if game_over && !was_over {
            info!(inning = situation.inning, "game end reached");
        }

        Ok(RecordedAtBat {
            at_bat,
            runners_scored: transition.runners_scored,
            half_inning_ended: transition.half_inning_ended,
            game_over,
        })
    }

    /// Replace an existing at-bat by id. The inning situation is left as is.
    pub fn update_at_bat(&mut self, at_bat: AtBat) -> Result<()> {
        at_bat.validate()?;
        let mut game = self.game().clone();
        let (side, _) = game
            .find_at_bat(&at_bat.id)
            .ok_or_else(|| ScoreError::AtBatNotFound(at_bat.id.clone()))?;
        ensure_on_roster(game.team(side), &at_bat.player_id)?;

        debug!(at_bat_id = %at_bat.id, result = %at_bat.result, "at-bat updated");
        game.team_mut(side).replace_at_bat(at_bat);
        self.history.set(game);
        Ok(())
    }

    pub fn delete_at_bat(&mut self, at_bat_id: &str) -> Result<AtBat> {
        let mut game = self.game().clone();
        let (side, _) = game
            .find_at_bat(at_bat_id)
            .ok_or_else(|| ScoreError::AtBatNotFound(at_bat_id.to_string()))?;
        let removed = game
            .team_mut(side)
            .remove_at_bat(at_bat_id)
            .ok_or_else(|| ScoreError::AtBatNotFound(at_bat_id.to_string()))?;

        debug!(at_bat_id, "at-bat deleted");
        self.history.set(game);
        Ok(removed)
    }

    // ========================
    // Run / out events
    // ========================

    /// Credit runs not batted in to the team batting now.
    pub fn add_run_event(
        &mut self,
        run_type: RunType,
        run_count: u32,
        note: Option<String>,
    ) -> Result<RunEvent> {
        let mut game = self.game().clone();
        let mut event = RunEvent::new(game.current_inning, game.is_top, run_type, run_count);
        event.note = note;
        event.validate()?;

        game.run_events.push(event.clone());
        debug!(
            ?run_type,
            run_count,
            inning = event.inning,
            is_top = event.is_top,
            "run event added"
        );
        self.history.set(game);
        Ok(event)
    }

    pub fn delete_run_event(&mut self, event_id: &str) -> Result<RunEvent> {
        let mut game = self.game().clone();
        let idx = game
            .run_events
            .iter()
            .position(|e| e.id == event_id)
            .ok_or_else(|| ScoreError::RunEventNotFound(event_id.to_string()))?;
        let removed = game.run_events.remove(idx);
        self.history.set(game);
        Ok(removed)
    }

    /// Record an out outside an at-bat; it counts toward the half-inning.
    pub fn add_out_event(&mut self, out_type: OutType, note: Option<String>) -> Result<OutEvent> {
        let mut game = self.game().clone();
        let mut event = OutEvent::new(game.current_inning, game.is_top, out_type);
        event.note = note;
        event.validate()?;

        let transition = game.situation().after_out();
        game.out_events.push(event.clone());
        game.set_situation(transition.state);

        debug!(?out_type, inning = event.inning, is_top = event.is_top, "out event added");
        if transition.half_inning_ended {
            info!(
                inning = transition.state.inning,
                is_top = transition.state.is_top,
                "half-inning changed"
            );
        }
        self.history.set(game);
        Ok(event)
    }

    pub fn delete_out_event(&mut self, event_id: &str) -> Result<OutEvent> {
        let mut game = self.game().clone();
        let idx = game
            .out_events
            .iter()
            .position(|e| e.id == event_id)
            .ok_or_else(|| ScoreError::OutEventNotFound(event_id.to_string()))?;
        let removed = game.out_events.remove(idx);
        self.history.set(game);
        Ok(removed)
    }

    /// Manual correction of inning, half, outs and runners.
    pub fn set_situation(&mut self, situation: InningState) -> Result<()> {
        situation.validate()?;
        let mut game = self.game().clone();
        game.set_situation(situation);
        info!(
            inning = situation.inning,
            is_top = situation.is_top,
            outs = situation.outs,
            "situation corrected"
        );
        self.history.set(game);
        Ok(())
    }

    // ========================
    // History
    // ========================

    pub fn undo(&mut self) -> bool {
        let applied = self.history.undo();
        if applied {
            debug!(remaining = self.history.undo_depth(), "undo applied");
        }
        applied
    }

    pub fn redo(&mut self) -> bool {
        let applied = self.history.redo();
        if applied {
            debug!(remaining = self.history.redo_depth(), "redo applied");
        }
        applied
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

/// An empty roster accepts any player id.
fn ensure_on_roster(team: &Team, player_id: &str) -> Result<()> {
    if team.players.is_empty() || team.has_player(player_id) {
        Ok(())
    } else {
        Err(ScoreError::PlayerNotFound {
            team: team.name.clone(),
            player_id: player_id.to_string(),
        })
    }
}
