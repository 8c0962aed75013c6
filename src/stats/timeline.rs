//! Chronological views over places

use crate::domain::Place;

/// Places ordered newest visit first. Same-day visits keep input order.
pub fn timeline(places: &[Place]) -> Vec<&Place> {
    let mut sorted: Vec<&Place> = places.iter().collect();
    sorted.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));
    sorted
}
