//! Journal - application state for one signed-in user
//!
//! Owns the database handle and the current user. Every mutation runs as one
//! transaction: write the place, recompute stats over the user's places,
//! check badges against the persisted unlocked set, record new unlocks once.
//! If any step fails nothing is written.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use rusqlite::Connection;
use tracing::{debug, info};

use crate::domain::{Place, PlaceDraft, PlacePatch, User, VisitDetails};
use crate::stats::badges::{BadgeProgress, UnlockedBadge, badge_progress, check_new_badges_at};
use crate::stats::{TravelStats, calculate_stats};
use crate::store::{BadgeStore, JournalDb, PlaceStore};

/// Events produced by a journal mutation
#[derive(Debug, Clone, PartialEq)]
pub enum JournalEvent {
    PlaceAdded(Place),
    PlaceUpdated(Place),
    PlaceRemoved { id: String },
    BadgeUnlocked(UnlockedBadge),
}

pub struct Journal {
    db: JournalDb,
    user: User,
}

impl Journal {
    pub fn new(db: JournalDb, user: User) -> Self {
        Self { db, user }
    }

    fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Places visible to the current user, most recently added first
    pub fn places(&self) -> Result<Vec<Place>> {
        let conn = self.db.conn()?;
        PlaceStore::new(&conn).list_for_user(&self.user.id)
    }

    pub fn place(&self, id: &str) -> Result<Option<Place>> {
        let conn = self.db.conn()?;
        self.visible_place(&conn, id)
    }

    pub fn stats(&self) -> Result<TravelStats> {
        Ok(calculate_stats(&self.places()?))
    }

    pub fn badges(&self) -> Result<Vec<UnlockedBadge>> {
        let conn = self.db.conn()?;
        BadgeStore::new(&conn).unlocked_for(&self.user.id)
    }

    pub fn badge_progress(&self) -> Result<Vec<BadgeProgress>> {
        let conn = self.db.conn()?;
        let places = PlaceStore::new(&conn).list_for_user(&self.user.id)?;
        let unlocked = BadgeStore::new(&conn).unlocked_for(&self.user.id)?;
        Ok(badge_progress(&calculate_stats(&places), &unlocked))
    }

    fn visible_place(&self, conn: &Connection, id: &str) -> Result<Option<Place>> {
        Ok(PlaceStore::new(conn)
            .get(id)?
            .filter(|p| p.is_visible_to(Some(&self.user.id))))
    }

    // ========================================
    // MUTATIONS
    // ========================================

    pub fn add_place(&mut self, draft: PlaceDraft, visit: VisitDetails) -> Result<Vec<JournalEvent>> {
        let place = draft
            .into_place(visit, Self::now_ms(), Some(self.user.id.clone()))
            .context("Invalid place")?;

        let events = self.db.transaction(|tx| {
            PlaceStore::new(tx).insert(&place)?;
            let mut events = vec![JournalEvent::PlaceAdded(place.clone())];
            self.unlock_new_badges(tx, &mut events)?;
            Ok(events)
        })?;

        info!("Added place {} ({})", place.name, place.id);
        log_unlocks(&events);
        Ok(events)
    }

    pub fn update_place(&mut self, id: &str, patch: PlacePatch) -> Result<Vec<JournalEvent>> {
        let events = self.db.transaction(|tx| {
            let Some(mut place) = self.visible_place(tx, id)? else {
                bail!("Place not found: {}", id);
            };
            patch.apply(&mut place).context("Invalid place update")?;
            PlaceStore::new(tx).update(&place)?;

            let mut events = vec![JournalEvent::PlaceUpdated(place)];
            self.unlock_new_badges(tx, &mut events)?;
            Ok(events)
        })?;

        info!("Updated place {}", id);
        log_unlocks(&events);
        Ok(events)
    }

    pub fn remove_place(&mut self, id: &str) -> Result<Vec<JournalEvent>> {
        let events = self.db.transaction(|tx| {
            if self.visible_place(tx, id)?.is_none() || !PlaceStore::new(tx).delete(id)? {
                bail!("Place not found: {}", id);
            }

            let mut events = vec![JournalEvent::PlaceRemoved { id: id.to_string() }];
            self.unlock_new_badges(tx, &mut events)?;
            Ok(events)
        })?;

        info!("Removed place {}", id);
        log_unlocks(&events);
        Ok(events)
    }

    /// Delete the user's own places and badges. Returns (places, badges) removed.
    ///
    /// Unowned places are shared with other users and stay.
    pub fn reset(&mut self) -> Result<(usize, usize)> {
        let removed = self.db.transaction(|tx| {
            let places = PlaceStore::new(tx).delete_for_user(&self.user.id)?;
            let badges = BadgeStore::new(tx).reset_for(&self.user.id)?;
            Ok((places, badges))
        })?;

        info!(
            "Reset journal for {}: {} places, {} badges",
            self.user.id, removed.0, removed.1
        );
        Ok(removed)
    }

    /// Recompute stats, check badges and record new unlocks exactly once
    fn unlock_new_badges(&self, conn: &Connection, events: &mut Vec<JournalEvent>) -> Result<()> {
        let places = PlaceStore::new(conn).list_for_user(&self.user.id)?;
        let badges = BadgeStore::new(conn);
        let unlocked = badges.unlocked_for(&self.user.id)?;

        let stats = calculate_stats(&places);
        debug!(
            "Stats: {} km, {} countries, {} cities, {} continents",
            stats.total_distance_km, stats.countries_count, stats.cities_count, stats.continents_count
        );

        for badge in check_new_badges_at(&stats, &unlocked, Self::now_ms()) {
            if badges.record_unlock(&self.user.id, &badge)? {
                events.push(JournalEvent::BadgeUnlocked(badge));
            }
        }
        Ok(())
    }
}

fn log_unlocks(events: &[JournalEvent]) {
    for event in events {
        if let JournalEvent::BadgeUnlocked(badge) = event {
            info!("Badge unlocked: {} {}", badge.badge.icon, badge.badge.name);
        }
    }
}
