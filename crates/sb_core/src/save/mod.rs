// Save/load for scorebook documents
// MessagePack + LZ4 compression with versioning and integrity checks

pub mod error;
pub mod file_store;
pub mod format;
pub mod migration;
pub mod store;

pub use error::SaveError;
pub use file_store::FileStore;
pub use format::{decompress_and_deserialize, serialize_and_compress, GameDocument};
pub use migration::migrate_document;
pub use store::{GameListing, GameRepository, InMemoryStore, TeamRepository};

pub const SAVE_VERSION: u32 = 1;
