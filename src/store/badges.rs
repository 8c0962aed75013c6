//! Unlocked badge persistence
//!
//! Badge unlocks are append-only: the `(user_id, badge_id)` primary key plus
//! `INSERT OR IGNORE` keep the first unlock time and never revoke.

use anyhow::Result;
use rusqlite::{Connection, params};

use crate::stats::badges::{BadgeId, UnlockedBadge};

pub struct BadgeStore<'a> {
    conn: &'a Connection,
}

impl<'a> BadgeStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Badges unlocked by a user, oldest first
    pub fn unlocked_for(&self, user_id: &str) -> Result<Vec<UnlockedBadge>> {
        let mut stmt = self.conn.prepare(
            "SELECT badge_id, unlocked_at FROM badges WHERE user_id = ?1
             ORDER BY unlocked_at, rowid",
        )?;
        let rows = stmt
            .query_map([user_id], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let badges = rows
            .into_iter()
            .filter_map(|(id, unlocked_at)| match BadgeId::from_str(&id) {
                Some(id) => Some(UnlockedBadge::new(id, unlocked_at)),
                None => {
                    tracing::warn!("Skipping unknown badge id in journal: {}", id);
                    None
                }
            })
            .collect();
        Ok(badges)
    }

    /// Record an unlock. Returns false if the user already had the badge.
    pub fn record_unlock(&self, user_id: &str, badge: &UnlockedBadge) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO badges (user_id, badge_id, unlocked_at) VALUES (?1, ?2, ?3)",
            params![user_id, badge.id().as_str(), badge.unlocked_at],
        )?;
        Ok(inserted == 1)
    }

    /// Remove every badge a user has unlocked
    pub fn reset_for(&self, user_id: &str) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM badges WHERE user_id = ?1", [user_id])?;
        Ok(removed)
    }
}
