use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown result code: {0}")]
    UnknownResult(String),

    #[error("Player {player_id} is not on the {team} roster")]
    PlayerNotFound { team: String, player_id: String },

    #[error("At-bat not found: {0}")]
    AtBatNotFound(String),

    #[error("Run event not found: {0}")]
    RunEventNotFound(String),

    #[error("Out event not found: {0}")]
    OutEventNotFound(String),

    #[error("Invalid situation: {0}")]
    InvalidSituation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ScoreError {
    /// Stable short code used as the prefix of JSON API error strings.
    pub fn code(&self) -> &'static str {
        match self {
            ScoreError::Validation(_) => "E_VALIDATION",
            ScoreError::UnknownResult(_) => "E_UNKNOWN_RESULT",
            ScoreError::PlayerNotFound { .. } => "E_PLAYER_NOT_FOUND",
            ScoreError::AtBatNotFound(_) => "E_AT_BAT_NOT_FOUND",
            ScoreError::RunEventNotFound(_) => "E_RUN_EVENT_NOT_FOUND",
            ScoreError::OutEventNotFound(_) => "E_OUT_EVENT_NOT_FOUND",
            ScoreError::InvalidSituation(_) => "E_INVALID_SITUATION",
            ScoreError::Serialization(_) => "E_SERIALIZATION",
        }
    }
}

impl From<validator::ValidationErrors> for ScoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        ScoreError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        ScoreError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_not_found_display() {
        let err = ScoreError::PlayerNotFound {
            team: "Falcons".to_string(),
            player_id: "p-9".to_string(),
        };
        assert_eq!(err.to_string(), "Player p-9 is not on the Falcons roster");
        assert_eq!(err.code(), "E_PLAYER_NOT_FOUND");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("regulation_innings must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: regulation_innings must be > 0");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: ScoreError = serde_json::from_str::<u8>("not json").unwrap_err().into();
        assert!(matches!(err, ScoreError::Serialization(_)));
    }
}
