//! Shared test utilities for journal integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use place_tracker::journal::Journal;
use place_tracker::store::JournalDb;
use place_tracker::{Coordinates, Mood, Place, PlaceDraft, User, VisitDetails};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("Invalid test date")
}

/// Builds a logged place without touching the database
pub fn place(name: &str, lat: f64, lng: f64, code: &str, visit: &str) -> Place {
    PlaceDraft::new(name, Coordinates::new(lat, lng).expect("Invalid test coordinates"))
        .with_country(name, code)
        .into_place(VisitDetails::on(date(visit)), 0, None)
        .expect("Invalid test place")
}

pub fn place_with_mood(name: &str, lat: f64, lng: f64, code: &str, visit: &str, mood: Mood) -> Place {
    let mut place = place(name, lat, lng, code, visit);
    place.mood = Some(mood);
    place
}

pub fn paris() -> Place {
    place("Paris", 48.8566, 2.3522, "FR", "2024-01-01")
}

pub fn tokyo() -> Place {
    place("Tokyo", 35.6762, 139.6503, "JP", "2024-06-01")
}

pub fn sydney() -> Place {
    place("Sydney", -33.8688, 151.2093, "AU", "2024-12-01")
}

/// A temp dir holding a journal database; keep the dir alive for the test
pub fn temp_db() -> (TempDir, JournalDb) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = JournalDb::open(&dir.path().join("journal.db")).expect("Failed to open journal db");
    (dir, db)
}

pub fn journal_for(db: &JournalDb, name: &str, email: &str) -> Journal {
    let user = User::login(name, email).expect("Invalid test user");
    Journal::new(db.clone(), user)
}
