//! Yearly travel recap

use std::collections::HashSet;

use chrono::Datelike;
use serde::Serialize;

use super::engine::{dominant_mood, tally_moods};
use crate::domain::{Mood, Place};

/// Mood shown when nothing in the year carried one
pub const DEFAULT_RECAP_MOOD: Mood = Mood::Adventurous;

/// Summary of one calendar year of visits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyRecap {
    pub year: i32,
    pub places_count: usize,
    pub countries_count: usize,
    pub top_mood: Mood,
}

/// Build the recap for `year` from all places
pub fn yearly_recap(places: &[Place], year: i32) -> YearlyRecap {
    let in_year: Vec<&Place> = places
        .iter()
        .filter(|p| p.visit_date.year() == year)
        .collect();

    let countries: HashSet<&str> = in_year.iter().filter_map(|p| p.country_code()).collect();
    let top_mood =
        dominant_mood(&tally_moods(in_year.iter().copied())).unwrap_or(DEFAULT_RECAP_MOOD);

    YearlyRecap {
        year,
        places_count: in_year.len(),
        countries_count: countries.len(),
        top_mood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, PlaceDraft, VisitDetails};
    use chrono::NaiveDate;

    fn place(code: &str, date: &str, mood: Option<Mood>) -> Place {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let mut draft = PlaceDraft::new(code, Coordinates::new(0.0, 0.0).unwrap());
        draft.country_code = Some(code.to_string());
        draft.mood = mood;
        draft.into_place(VisitDetails::on(date), 0, None).unwrap()
    }

    #[test]
    fn test_recap_filters_year() {
        let places = vec![
            place("FR", "2024-02-01", Some(Mood::Happy)),
            place("FR", "2024-03-01", Some(Mood::Relaxed)),
            place("IT", "2024-07-01", Some(Mood::Relaxed)),
            place("JP", "2023-12-31", Some(Mood::Happy)),
            place("JP", "2025-01-01", Some(Mood::Happy)),
        ];
        let recap = yearly_recap(&places, 2024);
        assert_eq!(recap.year, 2024);
        assert_eq!(recap.places_count, 3);
        assert_eq!(recap.countries_count, 2);
        assert_eq!(recap.top_mood, Mood::Relaxed);
    }

    #[test]
    fn test_recap_defaults_to_adventurous() {
        let places = vec![place("FR", "2022-02-01", None)];
        let recap = yearly_recap(&places, 2022);
        assert_eq!(recap.top_mood, Mood::Adventurous);

        let empty = yearly_recap(&places, 1999);
        assert_eq!(empty.places_count, 0);
        assert_eq!(empty.countries_count, 0);
        assert_eq!(empty.top_mood, DEFAULT_RECAP_MOOD);
    }
}
