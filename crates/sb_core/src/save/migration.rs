use super::error::SaveError;
use super::format::GameDocument;
use super::SAVE_VERSION;

/// Migrate a document from an older format version to the current one
pub fn migrate_document(mut document: GameDocument) -> Result<GameDocument, SaveError> {
    let original_version = document.version;

    document = match document.version {
        0 => migrate_v0_to_v1(document),
        1 => document,
        _ => {
            return Err(SaveError::VersionMismatch {
                found: document.version,
                expected: SAVE_VERSION,
            });
        }
    };

    document.version = SAVE_VERSION;

    if original_version != SAVE_VERSION {
        document.update_timestamp();
        log::info!(
            "Migrated game {} from version {} to {}",
            document.id(),
            original_version,
            SAVE_VERSION
        );
    }

    Ok(document)
}

/// v0 recorded a single run as `runCount: 0` and stored blank descriptions
fn migrate_v0_to_v1(mut document: GameDocument) -> GameDocument {
    log::info!("Migrating game {} from version 0 to 1", document.id());

    for event in &mut document.game.run_events {
        if event.run_count == 0 {
            event.run_count = 1;
        }
    }

    for team in [&mut document.game.home_team, &mut document.game.away_team] {
        for at_bat in &mut team.at_bats {
            if at_bat.description.as_deref().is_some_and(|d| d.trim().is_empty()) {
                at_bat.description = None;
            }
        }
    }

    document
}

pub fn needs_migration(document: &GameDocument) -> bool {
    document.version < SAVE_VERSION
}
