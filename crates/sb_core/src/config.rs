//! Scorebook configuration.
//!
//! Loaded from a JSON or YAML file, or from the file named by
//! `SB_CONFIG_PATH`. Every section has defaults, so an empty file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::engine::GameRules;
use crate::error::ConfigError;

pub const CONFIG_PATH_ENV: &str = "SB_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScorebookConfig {
    pub rules: GameRules,
    pub history: HistoryConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum undo depth; unbounded when absent.
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub save_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { save_dir: PathBuf::from("saves") }
    }
}

impl ScorebookConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load by extension: `.yaml`/`.yml` as YAML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::FileRead { path: path.to_path_buf(), source })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Defaults when `SB_CONFIG_PATH` is unset or blank, else the named file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(Path::new(path))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.regulation_innings == 0 {
            return Err(ConfigError::Validation("rules.regulation_innings must be > 0".to_string()));
        }
        if self.history.max_depth == Some(0) {
            return Err(ConfigError::Validation("history.max_depth must be > 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ScorebookConfig::default();
        assert_eq!(config.rules.regulation_innings, 7);
        assert_eq!(config.history.max_depth, None);
        assert_eq!(config.storage.save_dir, PathBuf::from("saves"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScorebookConfig::from_json(r#"{"rules":{"regulation_innings":6}}"#).unwrap();
        assert_eq!(config.rules.regulation_innings, 6);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_yaml() {
        let yaml = "history:\n  max_depth: 50\nstorage:\n  save_dir: /tmp/scorebook\n";
        let config = ScorebookConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.history.max_depth, Some(50));
        assert_eq!(config.storage.save_dir, PathBuf::from("/tmp/scorebook"));
        assert_eq!(config.rules, GameRules::default());
    }

    #[test]
    fn test_validation() {
        let err = ScorebookConfig::from_json(r#"{"rules":{"regulation_innings":0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        let err = ScorebookConfig::from_yaml("history:\n  max_depth: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "rules:\n  regulation_innings: 5").unwrap();
        let config = ScorebookConfig::load(file.path()).unwrap();
        assert_eq!(config.rules.regulation_innings, 5);

        let mut json = NamedTempFile::new().unwrap();
        write!(json, "{{}}").unwrap();
        assert_eq!(ScorebookConfig::load(json.path()).unwrap(), ScorebookConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = ScorebookConfig::load(Path::new("/nonexistent/scorebook.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
