//! Data models for travel statistics
//!
//! These structures are derived from place records on demand and never stored.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::Mood;

/// Most frequent mood across a set of places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TopMood {
    Mood(Mood),
    /// No place carried a mood
    #[default]
    NotApplicable,
}

impl TopMood {
    pub const NOT_APPLICABLE: &'static str = "N/A";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mood(mood) => mood.as_str(),
            Self::NotApplicable => Self::NOT_APPLICABLE,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        if s == Self::NOT_APPLICABLE {
            return Some(Self::NotApplicable);
        }
        Mood::from_str(s).map(Self::Mood)
    }

    pub fn mood(&self) -> Option<Mood> {
        match self {
            Self::Mood(mood) => Some(*mood),
            Self::NotApplicable => None,
        }
    }
}

impl From<Option<Mood>> for TopMood {
    fn from(mood: Option<Mood>) -> Self {
        mood.map_or(Self::NotApplicable, Self::Mood)
    }
}

impl fmt::Display for TopMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TopMood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TopMood {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown mood: {s}")))
    }
}

/// Summary of a user's travel history
///
/// Missing fields deserialize to zero / empty so that a partial summary fails
/// every threshold that depends on them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelStats {
    /// Itinerary distance in whole kilometres, visits ordered by date
    pub total_distance_km: f64,
    /// Distinct non-empty country codes
    pub countries_count: usize,
    /// Distinct (name, country code) pairs
    pub cities_count: usize,
    pub continents_count: usize,
    /// Continent names in first-encountered order
    pub continents: Vec<String>,
    pub top_mood: TopMood,
}
