//! SQLite database connection and schema for the journal
//!
//! Manages the `~/.place-tracker/journal.db` database.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Shared handle to the journal database
#[derive(Clone)]
pub struct JournalDb {
    conn: Arc<Mutex<Connection>>,
}

impl JournalDb {
    /// Open or create the journal database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create journal dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open journal db: {}", path.display()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        tracing::debug!("Opened journal db at {}", path.display());
        Self::with_connection(conn)
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory journal db")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Lock the connection
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Journal DB lock poisoned"))
    }

    /// Run `f` in an immediate transaction, committing only if it succeeds.
    ///
    /// Holds the connection lock and the SQLite write lock until the
    /// transaction ends.
    pub fn transaction<T>(&self, f: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let mut conn = self.conn()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .context("Failed to begin journal transaction")?;
        let value = f(&tx)?;
        tx.commit().context("Failed to commit journal transaction")?;
        Ok(value)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(SCHEMA_SQL)
            .context("Failed to initialize journal schema")?;
        Ok(())
    }

    /// Delete all places and badges
    pub fn reset_all(&self) -> Result<()> {
        self.transaction(|tx| {
            tx.execute_batch(
                r#"
                DELETE FROM places;
                DELETE FROM badges;
                "#,
            )?;
            Ok(())
        })
    }
}

/// SQL schema for the journal database
const SCHEMA_SQL: &str = r#"
-- One row per logged visit
CREATE TABLE IF NOT EXISTS places (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    lat REAL NOT NULL,
    lng REAL NOT NULL,
    country TEXT,
    country_code TEXT,
    visit_date TEXT NOT NULL,
    notes TEXT,
    rating INTEGER,
    added_at INTEGER NOT NULL,
    images TEXT NOT NULL DEFAULT '[]',
    tags TEXT NOT NULL DEFAULT '[]',
    mood TEXT,
    user_id TEXT
);
CREATE INDEX IF NOT EXISTS idx_places_user ON places(user_id);
CREATE INDEX IF NOT EXISTS idx_places_added_at ON places(added_at);

-- Unlocked badges, at most one row per (user, badge)
CREATE TABLE IF NOT EXISTS badges (
    user_id TEXT NOT NULL,
    badge_id TEXT NOT NULL,
    unlocked_at INTEGER NOT NULL,
    PRIMARY KEY (user_id, badge_id)
);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (1);
"#;
