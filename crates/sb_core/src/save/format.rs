use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::error::SaveError;
use super::SAVE_VERSION;
use crate::models::GameState;

const CHECKSUM_LEN: usize = 32;

/// A persisted game plus its sharing metadata
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDocument {
    /// Save format version for migration
    pub version: u32,

    /// Save timestamp (unix milliseconds)
    pub saved_at: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// Readable through the shared-load path
    #[serde(default)]
    pub is_public: bool,

    pub game: GameState,
}

impl GameDocument {
    pub fn new(game: GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at: current_timestamp(),
            owner_id: None,
            is_public: false,
            game,
        }
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn id(&self) -> &str {
        &self.game.id
    }

    pub fn update_timestamp(&mut self) {
        self.saved_at = current_timestamp();
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.game.id.is_empty() {
            return Err(SaveError::Corrupted);
        }
        self.game.validate()?;
        Ok(())
    }

    pub fn format_saved_at(&self) -> String {
        OffsetDateTime::from_unix_timestamp_nanos(self.saved_at as i128 * 1_000_000)
            .ok()
            .and_then(|ts| ts.format(&Rfc3339).ok())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// JSON schema of the document shape
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(GameDocument)
    }
}

/// MessagePack (named fields) -> LZ4 with size prefix -> trailing SHA-256
pub fn seal<T: Serialize>(value: &T) -> Result<Vec<u8>, SaveError> {
    let msgpack = to_vec_named(value).map_err(SaveError::Serialization)?;
    let mut sealed = compress_prepend_size(&msgpack);

    let checksum = Sha256::digest(&sealed);
    sealed.extend_from_slice(&checksum);
    Ok(sealed)
}

/// Inverse of [`seal`]; verifies the checksum before decompressing.
pub fn unseal<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SaveError> {
    // Size header + checksum
    if bytes.len() < 4 + CHECKSUM_LEN {
        return Err(SaveError::Corrupted);
    }

    let (payload, checksum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if Sha256::digest(payload).as_slice() != checksum {
        return Err(SaveError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;
    from_slice(&msgpack).map_err(SaveError::Deserialization)
}

pub fn serialize_and_compress(document: &GameDocument) -> Result<Vec<u8>, SaveError> {
    document.validate()?;
    seal(document)
}

pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<GameDocument, SaveError> {
    let document: GameDocument = unseal(bytes)?;

    if document.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: document.version, expected: SAVE_VERSION });
    }

    Ok(document)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AtBat, HitResult, RunEvent, RunType};
    use crate::test_fixtures::sample_game;

    fn document() -> GameDocument {
        let mut game = sample_game();
        game.away_team.at_bats.push(AtBat::new("a1", 1, HitResult::HomeRun).with_rbi(1));
        let steal = RunEvent::new(1, false, RunType::StolenBase, 1).with_note("steal of home");
        game.run_events.push(steal);
        GameDocument::new(game).with_owner("coach-1").with_public(true)
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let doc = document();
        let bytes = serialize_and_compress(&doc).unwrap();
        let loaded = decompress_and_deserialize(&bytes).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_checksum_validation() {
        let mut bytes = serialize_and_compress(&document()).unwrap();
        if let Some(last) = bytes.last_mut() {
            *last = last.wrapping_add(1);
        }
        assert!(matches!(decompress_and_deserialize(&bytes), Err(SaveError::ChecksumMismatch)));
    }

    #[test]
    fn test_truncated_is_corrupted() {
        assert!(matches!(decompress_and_deserialize(&[0u8; 10]), Err(SaveError::Corrupted)));
    }

    #[test]
    fn test_future_version_rejected() {
        let mut doc = document();
        doc.version = SAVE_VERSION + 1;
        let bytes = seal(&doc).unwrap();
        assert!(matches!(
            decompress_and_deserialize(&bytes),
            Err(SaveError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_game_not_saved() {
        let mut doc = document();
        doc.game.outs = 4;
        assert!(matches!(serialize_and_compress(&doc), Err(SaveError::Invalid(_))));
    }

    #[test]
    fn test_format_saved_at() {
        let mut doc = document();
        doc.saved_at = 0;
        assert_eq!(doc.format_saved_at(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_document_matches_schema() {
        let schema = serde_json::to_value(GameDocument::json_schema()).unwrap();
        let compiled = jsonschema::JSONSchema::compile(&schema).unwrap();

        let instance = serde_json::to_value(document()).unwrap();
        assert!(compiled.is_valid(&instance));

        let missing_game = serde_json::json!({"version": 1, "savedAt": 0});
        assert!(!compiled.is_valid(&missing_game));
    }
}
