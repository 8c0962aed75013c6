//! Passport view: one stamp per logged place

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Place;

/// Stamp label for places without a country code
pub const UNKNOWN_STAMP: &str = "UNK";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stamp {
    pub place_id: String,
    pub place_name: String,
    /// Upper-cased country code, or [`UNKNOWN_STAMP`]
    pub label: String,
    /// Flag emoji, empty when the code cannot be rendered as one
    pub flag: String,
    pub visit_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passport {
    pub stamps: Vec<Stamp>,
    /// Distinct country codes in first-seen order
    pub countries: Vec<String>,
}

impl Passport {
    pub fn stamp_count(&self) -> usize {
        self.stamps.len()
    }
}

/// Build a passport from places in the order given
pub fn passport(places: &[Place]) -> Passport {
    let mut countries: Vec<String> = Vec::new();
    let mut stamps = Vec::with_capacity(places.len());

    for place in places {
        let code = place.country_code();
        if let Some(code) = code {
            if !countries.iter().any(|c| c == code) {
                countries.push(code.to_string());
            }
        }

        stamps.push(Stamp {
            place_id: place.id.clone(),
            place_name: place.name.clone(),
            label: code.map_or_else(|| UNKNOWN_STAMP.to_string(), str::to_ascii_uppercase),
            flag: code.map(flag_emoji).unwrap_or_default(),
            visit_date: place.visit_date,
        });
    }

    Passport { stamps, countries }
}

/// Render a two-letter ISO country code as a flag emoji
///
/// Each letter maps to its regional indicator symbol. Anything other than two
/// ASCII letters yields an empty string.
pub fn flag_emoji(country_code: &str) -> String {
    let code = country_code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return String::new();
    }

    code.chars()
        .filter_map(|c| {
            let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(0x1F1E6 + offset)
        })
        .collect()
}
