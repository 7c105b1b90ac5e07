use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::HitResult;

/// One batter's completed plate appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtBat {
    pub id: String,
    #[validate(length(min = 1))]
    pub player_id: String,
    #[validate(range(min = 1))]
    pub inning: u32,
    pub result: HitResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub rbi: u32,
    pub is_out: bool,
}

impl AtBat {
    /// New at-bat with a fresh id, no RBI, and the result's default out flag.
    pub fn new(player_id: impl Into<String>, inning: u32, result: HitResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            player_id: player_id.into(),
            inning,
            result,
            description: None,
            rbi: 0,
            is_out: result.is_out_by_default(),
        }
    }

    pub fn with_rbi(mut self, rbi: u32) -> Self {
        self.rbi = rbi;
        self
    }

    pub fn with_out(mut self, is_out: bool) -> Self {
        self.is_out = is_out;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_hit(&self) -> bool {
        self.result.is_hit()
    }
}
