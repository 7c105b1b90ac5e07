use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RunType {
    WildPitch,
    PassedBall,
    StolenBase,
    Balk,
    Error,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutType {
    PickOff,
    CaughtStealing,
    Interference,
    Appeal,
    Other,
}

fn default_run_count() -> u32 {
    1
}

/// A run not credited to an at-bat (wild pitch, steal of home, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunEvent {
    pub id: String,
    #[validate(range(min = 1))]
    pub inning: u32,
    pub is_top: bool,
    pub run_type: RunType,
    #[serde(default = "default_run_count")]
    #[validate(range(min = 1))]
    pub run_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl RunEvent {
    pub fn new(inning: u32, is_top: bool, run_type: RunType, run_count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            inning,
            is_top,
            run_type,
            run_count,
            note: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// An out not tied to an at-bat (pick-off, caught stealing, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutEvent {
    pub id: String,
    #[validate(range(min = 1))]
    pub inning: u32,
    pub is_top: bool,
    pub out_type: OutType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl OutEvent {
    pub fn new(inning: u32, is_top: bool, out_type: OutType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            inning,
            is_top,
            out_type,
            note: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
