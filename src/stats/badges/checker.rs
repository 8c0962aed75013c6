//! Badge checking logic
//!
//! Stateless: the caller owns the unlocked set and must merge the returned
//! badges into it exactly once. Calling again with a stale set returns the
//! same badges again.

use chrono::Utc;
use serde::Serialize;

use super::definitions::{BADGES, Badge, BadgeId};
use crate::stats::models::TravelStats;

/// A badge together with the moment it was unlocked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnlockedBadge {
    pub badge: &'static Badge,
    /// Unlock timestamp (ms since epoch)
    pub unlocked_at: i64,
}

impl UnlockedBadge {
    pub fn new(id: BadgeId, unlocked_at: i64) -> Self {
        Self {
            badge: Badge::get(id),
            unlocked_at,
        }
    }

    pub fn id(&self) -> BadgeId {
        self.badge.id
    }
}

/// Progress of a single badge towards its threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeProgress {
    pub badge: &'static Badge,
    pub current: f64,
    pub target: f64,
    pub unlocked_at: Option<i64>,
}

impl BadgeProgress {
    /// Completion ratio clamped to [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.unlocked_at.is_some() || self.target <= 0.0 {
            return 1.0;
        }
        (self.current / self.target).clamp(0.0, 1.0)
    }
}

/// Check for newly qualifying badges, stamped with the current time.
pub fn check_new_badges(stats: &TravelStats, already_unlocked: &[UnlockedBadge]) -> Vec<UnlockedBadge> {
    check_new_badges_at(stats, already_unlocked, Utc::now().timestamp_millis())
}

/// Check for newly qualifying badges with an explicit unlock timestamp.
///
/// Output follows catalogue order.
pub fn check_new_badges_at(
    stats: &TravelStats,
    already_unlocked: &[UnlockedBadge],
    now_ms: i64,
) -> Vec<UnlockedBadge> {
    BADGES
        .iter()
        .filter(|badge| !already_unlocked.iter().any(|u| u.id() == badge.id))
        .filter(|badge| badge.rule.is_met(stats))
        .map(|badge| UnlockedBadge {
            badge,
            unlocked_at: now_ms,
        })
        .collect()
}

/// Progress for every badge in catalogue order
pub fn badge_progress(stats: &TravelStats, unlocked: &[UnlockedBadge]) -> Vec<BadgeProgress> {
    BADGES
        .iter()
        .map(|badge| BadgeProgress {
            badge,
            current: badge.rule.current(stats),
            target: badge.rule.target(),
            unlocked_at: unlocked
                .iter()
                .find(|u| u.id() == badge.id)
                .map(|u| u.unlocked_at),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip_stats() -> TravelStats {
        TravelStats {
            total_distance_km: 17_539.0,
            countries_count: 3,
            cities_count: 3,
            continents_count: 3,
            continents: vec!["Europe".into(), "Asia".into(), "Oceania".into()],
            ..Default::default()
        }
    }

    fn ids(badges: &[UnlockedBadge]) -> Vec<BadgeId> {
        badges.iter().map(UnlockedBadge::id).collect()
    }

    #[test]
    fn test_three_continent_trip_unlocks() {
        let unlocked = check_new_badges_at(&trip_stats(), &[], 42);
        assert_eq!(
            ids(&unlocked),
            vec![BadgeId::FirstStep, BadgeId::Globetrotter, BadgeId::MileHigh]
        );
        assert!(unlocked.iter().all(|b| b.unlocked_at == 42));
        assert_eq!(unlocked[2].badge.name, "High Flyer");
    }

    #[test]
    fn test_empty_stats_unlock_nothing() {
        assert!(check_new_badges(&TravelStats::default(), &[]).is_empty());
    }

    #[test]
    fn test_already_unlocked_are_skipped() {
        let existing = vec![UnlockedBadge::new(BadgeId::Globetrotter, 1)];
        let unlocked = check_new_badges_at(&trip_stats(), &existing, 2);
        assert_eq!(ids(&unlocked), vec![BadgeId::FirstStep, BadgeId::MileHigh]);
    }

    #[test]
    fn test_second_call_with_merged_set_is_empty() {
        let stats = trip_stats();
        let mut owned = Vec::new();
        let first = check_new_badges(&stats, &owned);
        assert!(!first.is_empty());
        owned.extend(first);

        assert!(check_new_badges(&stats, &owned).is_empty());
    }

    #[test]
    fn test_stale_set_returns_same_badges() {
        let stats = trip_stats();
        let first = check_new_badges_at(&stats, &[], 1);
        let again = check_new_badges_at(&stats, &[], 1);
        assert_eq!(first, again);
    }

    #[test]
    fn test_every_badge_at_once() {
        let stats = TravelStats {
            total_distance_km: 50_000.0,
            countries_count: 12,
            cities_count: 20,
            continents_count: 5,
            ..Default::default()
        };
        let unlocked = check_new_badges_at(&stats, &[], 0);
        assert_eq!(ids(&unlocked), BadgeId::all());
    }

    #[test]
    fn test_progress() {
        let existing = vec![UnlockedBadge::new(BadgeId::FirstStep, 7)];
        let progress = badge_progress(&trip_stats(), &existing);
        assert_eq!(progress.len(), BADGES.len());

        assert_eq!(progress[0].unlocked_at, Some(7));
        assert_eq!(progress[0].fraction(), 1.0);

        let explorer = &progress[1];
        assert_eq!(explorer.badge.id, BadgeId::Explorer);
        assert_eq!(explorer.current, 3.0);
        assert_eq!(explorer.target, 5.0);
        assert!((explorer.fraction() - 0.6).abs() < 1e-9);

        let mile_high = &progress[3];
        assert_eq!(mile_high.fraction(), 1.0);
        assert_eq!(mile_high.unlocked_at, None);
    }
}
