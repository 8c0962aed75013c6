//! Badge definitions and metadata
//!
//! The catalogue is static. Each badge carries a [`BadgeRule`], a tagged
//! threshold over [`TravelStats`], so definitions stay plain data that can be
//! serialized and matched exhaustively.

use serde::{Deserialize, Serialize};

use crate::stats::models::TravelStats;

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeId {
    FirstStep,
    Explorer,
    Globetrotter,
    MileHigh,
    LocalExpert,
}

impl BadgeId {
    /// Get the string ID for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstStep => "first_step",
            Self::Explorer => "explorer",
            Self::Globetrotter => "globetrotter",
            Self::MileHigh => "mile_high",
            Self::LocalExpert => "local_expert",
        }
    }

    /// Parse from database string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_step" => Some(Self::FirstStep),
            "explorer" => Some(Self::Explorer),
            "globetrotter" => Some(Self::Globetrotter),
            "mile_high" => Some(Self::MileHigh),
            "local_expert" => Some(Self::LocalExpert),
            _ => None,
        }
    }

    /// All badge IDs in catalogue order
    pub fn all() -> &'static [BadgeId] {
        &[
            Self::FirstStep,
            Self::Explorer,
            Self::Globetrotter,
            Self::MileHigh,
            Self::LocalExpert,
        ]
    }
}

/// Eligibility rule attached to a badge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "min", rename_all = "snake_case")]
pub enum BadgeRule {
    MinCities(usize),
    MinCountries(usize),
    MinContinents(usize),
    MinDistanceKm(f64),
}

impl BadgeRule {
    /// Evaluate the rule against a stats summary
    pub fn is_met(&self, stats: &TravelStats) -> bool {
        match *self {
            Self::MinCities(min) => visited_cities(stats, min),
            Self::MinCountries(min) => visited_countries(stats, min),
            Self::MinContinents(min) => visited_continents(stats, min),
            Self::MinDistanceKm(min) => travelled_km(stats, min),
        }
    }

    /// Current value of the measured statistic
    pub fn current(&self, stats: &TravelStats) -> f64 {
        match self {
            Self::MinCities(_) => stats.cities_count as f64,
            Self::MinCountries(_) => stats.countries_count as f64,
            Self::MinContinents(_) => stats.continents_count as f64,
            Self::MinDistanceKm(_) => finite_or_zero(stats.total_distance_km),
        }
    }

    pub fn target(&self) -> f64 {
        match *self {
            Self::MinCities(min) | Self::MinCountries(min) | Self::MinContinents(min) => min as f64,
            Self::MinDistanceKm(min) => min,
        }
    }
}

fn visited_cities(stats: &TravelStats, min: usize) -> bool {
    stats.cities_count >= min
}

fn visited_countries(stats: &TravelStats, min: usize) -> bool {
    stats.countries_count >= min
}

fn visited_continents(stats: &TravelStats, min: usize) -> bool {
    stats.continents_count >= min
}

/// False for NaN distances, so a corrupt summary never unlocks anything
fn travelled_km(stats: &TravelStats, min: f64) -> bool {
    stats.total_distance_km >= min
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Badge definition with all metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rule: BadgeRule,
}

impl Badge {
    /// Get the definition for a badge ID
    pub fn get(id: BadgeId) -> &'static Badge {
        // Indices follow BADGES order
        let index = match id {
            BadgeId::FirstStep => 0,
            BadgeId::Explorer => 1,
            BadgeId::Globetrotter => 2,
            BadgeId::MileHigh => 3,
            BadgeId::LocalExpert => 4,
        };
        &BADGES[index]
    }

    /// Get total number of badges
    pub fn total_count() -> usize {
        BADGES.len()
    }
}

/// All badge definitions, in evaluation order
pub static BADGES: &[Badge] = &[
    Badge {
        id: BadgeId::FirstStep,
        name: "First Step",
        description: "Added your first place.",
        icon: "🏁",
        rule: BadgeRule::MinCities(1),
    },
    Badge {
        id: BadgeId::Explorer,
        name: "Explorer",
        description: "Visited 5 different countries.",
        icon: "🌍",
        rule: BadgeRule::MinCountries(5),
    },
    Badge {
        id: BadgeId::Globetrotter,
        name: "Globetrotter",
        description: "Visited 3 continents.",
        icon: "🗺️",
        rule: BadgeRule::MinContinents(3),
    },
    Badge {
        id: BadgeId::MileHigh,
        name: "High Flyer",
        description: "Traveled over 10,000 km.",
        icon: "✈️",
        rule: BadgeRule::MinDistanceKm(10_000.0),
    },
    Badge {
        id: BadgeId::LocalExpert,
        name: "Local Expert",
        description: "Logged 10 places.",
        icon: "📍",
        rule: BadgeRule::MinCities(10),
    },
];
