use thiserror::Error;

use crate::error::ScoreError;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted data")]
    Corrupted,

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Document not found: {id}")]
    NotFound { id: String },

    #[error("Game {id} is not shared")]
    NotAuthorized { id: String },

    #[error("Invalid document: {0}")]
    Invalid(#[from] ScoreError),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::NotFound { .. } => true,
            SaveError::NotAuthorized { .. } => false,
            SaveError::Corrupted => false,
            SaveError::ChecksumMismatch => false,
            SaveError::VersionMismatch { .. } => true, // Can try migration
            SaveError::LockPoisoned => false,
            _ => false,
        }
    }
}
