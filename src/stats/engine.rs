//! Travel statistics calculation
//!
//! [`calculate_stats`] is a pure function of its input: no I/O, no shared
//! state, safe to call on any snapshot of places from any thread.

use std::collections::HashSet;

use super::continents::continent_for;
use super::geo::path_length_km;
use super::models::{TopMood, TravelStats};
use crate::domain::{Mood, Place};

/// Compute the travel summary for a set of places.
///
/// Distance follows the places in visit-date order (ties keep input order);
/// every count is taken over the input as given. Empty input yields
/// [`TravelStats::default`].
pub fn calculate_stats(places: &[Place]) -> TravelStats {
    if places.is_empty() {
        return TravelStats::default();
    }

    // Stable sort, so same-day visits stay in input order
    let mut by_date: Vec<&Place> = places.iter().collect();
    by_date.sort_by_key(|p| p.visit_date);
    let total_distance = path_length_km(by_date.iter().map(|p| p.location));

    let countries: HashSet<&str> = places.iter().filter_map(Place::country_code).collect();

    // Approximation: same name + same code is one city, wherever it is
    let cities: HashSet<(&str, Option<&str>)> = places
        .iter()
        .map(|p| (p.name.as_str(), p.country_code()))
        .collect();

    let continents = distinct_continents(places);
    let top_mood = TopMood::from(dominant_mood(&tally_moods(places)));

    TravelStats {
        total_distance_km: total_distance.round(),
        countries_count: countries.len(),
        cities_count: cities.len(),
        continents_count: continents.len(),
        continents: continents.into_iter().map(String::from).collect(),
        top_mood,
    }
}

/// Continents reached, in first-encountered order
fn distinct_continents(places: &[Place]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for continent in places
        .iter()
        .filter_map(Place::country_code)
        .filter_map(continent_for)
    {
        if !seen.contains(&continent) {
            seen.push(continent);
        }
    }
    seen
}

/// Count moods in first-encountered order.
pub(crate) fn tally_moods<'a, I>(places: I) -> Vec<(Mood, usize)>
where
    I: IntoIterator<Item = &'a Place>,
{
    let mut tally: Vec<(Mood, usize)> = Vec::new();
    for mood in places.into_iter().filter_map(|p| p.mood) {
        match tally.iter_mut().find(|(m, _)| *m == mood) {
            Some((_, count)) => *count += 1,
            None => tally.push((mood, 1)),
        }
    }
    tally
}

/// Mood with the strictly highest count; ties go to the earliest entry.
pub(crate) fn dominant_mood(tally: &[(Mood, usize)]) -> Option<Mood> {
    let mut best: Option<(Mood, usize)> = None;
    for &(mood, count) in tally {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, PlaceDraft, VisitDetails};
    use chrono::NaiveDate;

    fn place(name: &str, lat: f64, lng: f64, code: Option<&str>, date: &str) -> Place {
        let mut draft = PlaceDraft::new(name, Coordinates::new(lat, lng).unwrap());
        draft.country_code = code.map(String::from);
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        draft.into_place(VisitDetails::on(date), 0, None).unwrap()
    }

    fn with_mood(mut p: Place, mood: Mood) -> Place {
        p.mood = Some(mood);
        p
    }

    fn trip() -> Vec<Place> {
        vec![
            place("Paris", 48.8566, 2.3522, Some("FR"), "2024-01-01"),
            place("Tokyo", 35.6762, 139.6503, Some("JP"), "2024-06-01"),
            place("Sydney", -33.8688, 151.2093, Some("AU"), "2024-12-01"),
        ]
    }

    #[test]
    fn test_empty_input() {
        let stats = calculate_stats(&[]);
        assert_eq!(stats, TravelStats::default());
        assert_eq!(stats.total_distance_km, 0.0);
        assert!(stats.continents.is_empty());
        assert_eq!(stats.top_mood.as_str(), "N/A");
    }

    #[test]
    fn test_three_continent_trip() {
        let stats = calculate_stats(&trip());
        assert_eq!(stats.countries_count, 3);
        assert_eq!(stats.cities_count, 3);
        assert_eq!(stats.continents_count, 3);
        assert_eq!(stats.continents, vec!["Europe", "Asia", "Oceania"]);

        let expected = 17_500.0;
        assert!(
            (stats.total_distance_km - expected).abs() <= expected * 0.01,
            "distance {}",
            stats.total_distance_km
        );
        assert_eq!(stats.total_distance_km, stats.total_distance_km.round());
    }

    #[test]
    fn test_single_place_without_mood() {
        let stats = calculate_stats(&[place("Oslo", 59.91, 10.75, Some("NO"), "2023-05-05")]);
        assert_eq!(stats.total_distance_km, 0.0);
        assert_eq!(stats.top_mood, TopMood::NotApplicable);
        assert_eq!(stats.top_mood.to_string(), "N/A");
    }

    #[test]
    fn test_same_name_and_code_is_one_city() {
        let places = vec![
            place("Springfield", 39.78, -89.65, Some("US"), "2022-01-01"),
            place("Springfield", 42.10, -72.59, Some("US"), "2022-02-01"),
        ];
        let stats = calculate_stats(&places);
        assert_eq!(stats.cities_count, 1);
        assert!(stats.total_distance_km > 0.0);
    }

    #[test]
    fn test_distance_follows_visit_date_not_input_order() {
        let mut shuffled = trip();
        shuffled.reverse();
        shuffled.swap(0, 1);

        let ordered = calculate_stats(&trip());
        let mixed = calculate_stats(&shuffled);
        assert_eq!(ordered.total_distance_km, mixed.total_distance_km);
        assert_eq!(ordered.countries_count, mixed.countries_count);
        assert_eq!(ordered.cities_count, mixed.cities_count);
        assert_eq!(ordered.continents_count, mixed.continents_count);
        // Continent listing follows input order
        assert_eq!(mixed.continents, vec!["Asia", "Oceania", "Europe"]);
    }

    #[test]
    fn test_same_day_visits_keep_input_order() {
        let a = place("A", 0.0, 0.0, None, "2024-03-03");
        let b = place("B", 0.0, 10.0, None, "2024-03-03");
        let c = place("C", 0.0, 1.0, None, "2024-03-03");

        // A -> B -> C is 10 + 9 degrees of longitude along the equator
        let abc = calculate_stats(&[a.clone(), b.clone(), c.clone()]).total_distance_km;
        // A -> C -> B is 1 + 9
        let acb = calculate_stats(&[a, c, b]).total_distance_km;
        assert!(abc > acb);
    }

    #[test]
    fn test_missing_optional_fields_are_excluded() {
        let mut blank = place("Atlantis", 0.0, 0.0, None, "2020-01-01");
        blank.country_code = Some(String::new());
        let places = vec![
            blank,
            place("Reykjavik", 64.14, -21.94, Some("IS"), "2020-02-01"),
            place("Berlin", 52.52, 13.40, Some("de"), "2020-03-01"),
        ];
        let stats = calculate_stats(&places);
        assert_eq!(stats.countries_count, 2);
        assert_eq!(stats.cities_count, 3);
        // IS is not in the continent table
        assert_eq!(stats.continents, vec!["Europe"]);
        assert_eq!(stats.top_mood, TopMood::NotApplicable);
    }

    #[test]
    fn test_counts_bounded_by_input_len() {
        let places = trip();
        let stats = calculate_stats(&places);
        assert!(stats.countries_count <= places.len());
        assert!(stats.cities_count <= places.len());
        assert!(stats.continents_count <= places.len());
    }

    #[test]
    fn test_top_mood_strict_majority() {
        let [a, b, c] = <[Place; 3]>::try_from(trip()).unwrap();
        let places = vec![
            with_mood(a, Mood::Happy),
            with_mood(b, Mood::Relaxed),
            with_mood(c, Mood::Relaxed),
        ];
        assert_eq!(calculate_stats(&places).top_mood, TopMood::Mood(Mood::Relaxed));
    }

    #[test]
    fn test_top_mood_tie_goes_to_first_encountered() {
        let [a, b, c] = <[Place; 3]>::try_from(trip()).unwrap();
        let d = place("Lima", -12.05, -77.04, Some("PE"), "2025-01-01");
        // Input order, not visit order, decides the tie
        let places = vec![
            with_mood(c, Mood::Romantic),
            with_mood(a, Mood::Excited),
            with_mood(b, Mood::Excited),
            with_mood(d, Mood::Romantic),
        ];
        assert_eq!(calculate_stats(&places).top_mood, TopMood::Mood(Mood::Romantic));
    }

    #[test]
    fn test_tally_and_dominant() {
        assert_eq!(dominant_mood(&[]), None);
        let tally = vec![(Mood::Local, 2), (Mood::Happy, 3), (Mood::Excited, 3)];
        assert_eq!(dominant_mood(&tally), Some(Mood::Happy));
    }
}
