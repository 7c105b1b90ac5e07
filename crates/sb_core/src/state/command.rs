//! Serializable scorer commands, the unit of work for batch application.

use serde::{Deserialize, Serialize};

use super::session::{AtBatInput, GameSession, RecordedAtBat};
use crate::engine::InningState;
use crate::error::Result;
use crate::models::{AtBat, OutEvent, OutType, RunEvent, RunType};

fn default_run_count() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ScoreCommand {
    RecordAtBat(AtBatInput),
    UpdateAtBat {
        at_bat: AtBat,
    },
    DeleteAtBat {
        id: String,
    },
    AddRunEvent {
        run_type: RunType,
        #[serde(default = "default_run_count")]
        run_count: u32,
        #[serde(default)]
        note: Option<String>,
    },
    DeleteRunEvent {
        id: String,
    },
    AddOutEvent {
        out_type: OutType,
        #[serde(default)]
        note: Option<String>,
    },
    DeleteOutEvent {
        id: String,
    },
    SetSituation {
        situation: InningState,
    },
    Undo,
    Redo,
}

impl ScoreCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ScoreCommand::RecordAtBat(_) => "record_at_bat",
            ScoreCommand::UpdateAtBat { .. } => "update_at_bat",
            ScoreCommand::DeleteAtBat { .. } => "delete_at_bat",
            ScoreCommand::AddRunEvent { .. } => "add_run_event",
            ScoreCommand::DeleteRunEvent { .. } => "delete_run_event",
            ScoreCommand::AddOutEvent { .. } => "add_out_event",
            ScoreCommand::DeleteOutEvent { .. } => "delete_out_event",
            ScoreCommand::SetSituation { .. } => "set_situation",
            ScoreCommand::Undo => "undo",
            ScoreCommand::Redo => "redo",
        }
    }
}

/// What a command did. `Undone`/`Redone` carry whether anything changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum CommandOutcome {
    AtBatRecorded(RecordedAtBat),
    AtBatUpdated { id: String },
    AtBatDeleted { at_bat: AtBat },
    RunEventAdded { event: RunEvent },
    RunEventDeleted { event: RunEvent },
    OutEventAdded { event: OutEvent },
    OutEventDeleted { event: OutEvent },
    SituationSet { situation: InningState },
    Undone { applied: bool },
    Redone { applied: bool },
}

impl GameSession {
    pub fn apply(&mut self, command: ScoreCommand) -> Result<CommandOutcome> {
        let outcome = match command {
            ScoreCommand::RecordAtBat(input) => {
                CommandOutcome::AtBatRecorded(self.record_at_bat(input)?)
            }
            ScoreCommand::UpdateAtBat { at_bat } => {
                let id = at_bat.id.clone();
                self.update_at_bat(at_bat)?;
                CommandOutcome::AtBatUpdated { id }
            }
            ScoreCommand::DeleteAtBat { id } => {
                CommandOutcome::AtBatDeleted { at_bat: self.delete_at_bat(&id)? }
            }
            ScoreCommand::AddRunEvent { run_type, run_count, note } => {
                let event = self.add_run_event(run_type, run_count, note)?;
                CommandOutcome::RunEventAdded { event }
            }
            ScoreCommand::DeleteRunEvent { id } => {
                CommandOutcome::RunEventDeleted { event: self.delete_run_event(&id)? }
            }
            ScoreCommand::AddOutEvent { out_type, note } => {
                CommandOutcome::OutEventAdded { event: self.add_out_event(out_type, note)? }
            }
            ScoreCommand::DeleteOutEvent { id } => {
                CommandOutcome::OutEventDeleted { event: self.delete_out_event(&id)? }
            }
            ScoreCommand::SetSituation { situation } => {
                self.set_situation(situation)?;
                CommandOutcome::SituationSet { situation }
            }
            ScoreCommand::Undo => CommandOutcome::Undone { applied: self.undo() },
            ScoreCommand::Redo => CommandOutcome::Redone { applied: self.redo() },
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;
    use crate::models::{HitResult, RunnerState};
    use crate::test_fixtures::sample_game;

    #[test]
    fn test_parse_record_at_bat() {
        let json = r#"{"type":"record_at_bat","playerId":"a1","result":"2B","rbi":1}"#;
        let cmd: ScoreCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            ScoreCommand::RecordAtBat(AtBatInput::new("a1", HitResult::Double).with_rbi(1))
        );
        assert_eq!(cmd.name(), "record_at_bat");
    }

    #[test]
    fn test_parse_events_and_situation() {
        let cmd: ScoreCommand =
            serde_json::from_str(r#"{"type":"add_run_event","runType":"wild_pitch"}"#).unwrap();
        assert_eq!(
            cmd,
            ScoreCommand::AddRunEvent { run_type: RunType::WildPitch, run_count: 1, note: None }
        );

        let cmd: ScoreCommand = serde_json::from_str(
            r#"{"type":"set_situation","situation":{"inning":3,"isTop":false,"outs":1}}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            ScoreCommand::SetSituation {
                situation: InningState::new(3, false, 1, RunnerState::EMPTY)
            }
        );

        let cmd: ScoreCommand = serde_json::from_str(r#"{"type":"undo"}"#).unwrap();
        assert_eq!(cmd, ScoreCommand::Undo);
    }

    #[test]
    fn test_unknown_result_code_fails_to_parse() {
        let json = r#"{"type":"record_at_bat","playerId":"a1","result":"XYZ"}"#;
        assert!(serde_json::from_str::<ScoreCommand>(json).is_err());
    }

    #[test]
    fn test_apply_sequence() {
        let mut session = GameSession::new(sample_game());
        let commands = vec![
            ScoreCommand::RecordAtBat(AtBatInput::new("a1", HitResult::Walk)),
            ScoreCommand::AddOutEvent { out_type: OutType::PickOff, note: None },
            ScoreCommand::Undo,
            ScoreCommand::Redo,
        ];
        let outcomes: Vec<_> =
            commands.into_iter().map(|c| session.apply(c).unwrap()).collect();

        assert!(matches!(outcomes[0], CommandOutcome::AtBatRecorded(_)));
        assert_eq!(outcomes[3], CommandOutcome::Redone { applied: true });
        assert_eq!(session.game().outs, 1);
        assert_eq!(session.game().out_events.len(), 1);
    }

    #[test]
    fn test_apply_propagates_errors() {
        let mut session = GameSession::new(sample_game());
        let err = session.apply(ScoreCommand::DeleteAtBat { id: "missing".into() }).unwrap_err();
        assert_eq!(err, ScoreError::AtBatNotFound("missing".into()));
        let outcome = session.apply(ScoreCommand::Undo).unwrap();
        assert_eq!(outcome, CommandOutcome::Undone { applied: false });
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let value = serde_json::to_value(CommandOutcome::Undone { applied: false }).unwrap();
        assert_eq!(value, serde_json::json!({"type": "undone", "applied": false}));
    }
}
