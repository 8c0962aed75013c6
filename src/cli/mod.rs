//! CLI command implementations

pub mod init;
pub mod places;
pub mod search;
pub mod session;
pub mod stats;

use anyhow::{Result, bail};
use std::path::Path;

use place_tracker::config::Config;
use place_tracker::journal::{Journal, JournalEvent};
use place_tracker::store::JournalDb;

/// Open the journal of the signed-in user
pub(crate) fn open_journal(config_path: &Path) -> Result<Journal> {
    let config = Config::load_or_default(config_path)?;
    let Some(user) = config.current_user() else {
        bail!("Not logged in. Run `place-tracker login <name> <email>` first.");
    };
    let db = JournalDb::open(&config.database_path())?;
    Ok(Journal::new(db, user))
}

/// Print what a mutation did
pub(crate) fn print_events(events: &[JournalEvent]) {
    for event in events {
        match event {
            JournalEvent::PlaceAdded(place) => {
                println!("Added {} ({})", place.name, place.id);
            }
            JournalEvent::PlaceUpdated(place) => {
                println!("Updated {} ({})", place.name, place.id);
            }
            JournalEvent::PlaceRemoved { id } => {
                println!("Removed {}", id);
            }
            JournalEvent::BadgeUnlocked(unlocked) => {
                println!(
                    "  {} Badge unlocked: {} - {}",
                    unlocked.badge.icon, unlocked.badge.name, unlocked.badge.description
                );
            }
        }
    }
}
