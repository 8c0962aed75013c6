//! Journal storage
//!
//! Places and unlocked badges live in a SQLite database
//! (`~/.place-tracker/journal.db` by default).
//!
//! # Usage
//!
//! ```ignore
//! let db = JournalDb::open(&config.database_path())?;
//! let places = PlaceStore::new(&*db.conn()?).list_for_user(&user.id)?;
//!
//! // Writes that must land together share one transaction
//! db.transaction(|tx| {
//!     PlaceStore::new(tx).insert(&place)?;
//!     BadgeStore::new(tx).record_unlock(&user.id, &badge)
//! })?;
//! ```

mod badges;
mod db;
mod places;

pub use badges::BadgeStore;
pub use db::JournalDb;
pub use places::PlaceStore;
