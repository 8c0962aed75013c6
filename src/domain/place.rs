//! Place records logged in the journal
//!
//! A [`Place`] is one visit: where (validated [`Coordinates`]), when (a calendar
//! date without timezone), plus optional notes, photos, rating, tags and mood.
//! Values are validated when built, so the stats engine can assume every
//! coordinate it sees is within range.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;

/// A WGS84 coordinate in degrees
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// Deserializing an out-of-range pair fails with
/// [`ValidationError::InvalidCoordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates", into = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

#[derive(Serialize, Deserialize)]
struct RawCoordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        // Range checks are false for NaN, so non-finite input is rejected too
        let lat_ok = (-90.0..=90.0).contains(&lat);
        let lng_ok = (-180.0..=180.0).contains(&lng);
        if lat_ok && lng_ok {
            Ok(Self { lat, lng })
        } else {
            Err(ValidationError::InvalidCoordinate { lat, lng })
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = ValidationError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

impl From<Coordinates> for RawCoordinates {
    fn from(c: Coordinates) -> Self {
        Self {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

/// Star rating from 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidRating(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

/// How a place relates to the traveller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceTag {
    Visited,
    Lived,
    Transit,
}

impl PlaceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visited => "visited",
            Self::Lived => "lived",
            Self::Transit => "transit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "visited" => Some(Self::Visited),
            "lived" => Some(Self::Lived),
            "transit" => Some(Self::Transit),
            _ => None,
        }
    }
}

/// Mood attached to a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Excited,
    Relaxed,
    Romantic,
    Adventurous,
    Local,
}

impl Mood {
    /// Get the string ID for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Relaxed => "relaxed",
            Self::Romantic => "romantic",
            Self::Adventurous => "adventurous",
            Self::Local => "local",
        }
    }

    /// Parse from storage string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "happy" => Some(Self::Happy),
            "excited" => Some(Self::Excited),
            "relaxed" => Some(Self::Relaxed),
            "romantic" => Some(Self::Romantic),
            "adventurous" => Some(Self::Adventurous),
            "local" => Some(Self::Local),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Excited => "🤩",
            Self::Relaxed => "😌",
            Self::Romantic => "🥰",
            Self::Adventurous => "🤠",
            Self::Local => "🏠",
        }
    }

    pub fn all() -> &'static [Mood] {
        &[
            Self::Happy,
            Self::Excited,
            Self::Relaxed,
            Self::Romantic,
            Self::Adventurous,
            Self::Local,
        ]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub location: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO country code, case as returned by the place search (e.g. "fr", "JP")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub visit_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// Creation timestamp (ms since epoch)
    pub added_at: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<PlaceTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

impl Place {
    /// Country code if present and non-empty
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether this place is visible to the given user.
    ///
    /// Places without an owner predate accounts and are shared by everyone.
    pub fn is_visible_to(&self, user_id: Option<&str>) -> bool {
        match &self.user_id {
            None => true,
            Some(owner) => Some(owner.as_str()) == user_id,
        }
    }
}

/// A place candidate before it is logged (typically a search result)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDraft {
    pub name: String,
    pub location: Coordinates,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub tags: Vec<PlaceTag>,
    #[serde(default)]
    pub mood: Option<Mood>,
}

/// Visit details entered alongside a draft
#[derive(Debug, Clone, PartialEq)]
pub struct VisitDetails {
    pub visit_date: NaiveDate,
    pub notes: Option<String>,
    pub rating: Option<Rating>,
    pub image: Option<String>,
}

impl VisitDetails {
    pub fn on(visit_date: NaiveDate) -> Self {
        Self {
            visit_date,
            notes: None,
            rating: None,
            image: None,
        }
    }
}

impl PlaceDraft {
    pub fn new(name: impl Into<String>, location: Coordinates) -> Self {
        Self {
            name: name.into(),
            location,
            country: None,
            country_code: None,
            tags: Vec::new(),
            mood: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>, code: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self.country_code = Some(code.into());
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_tag(mut self, tag: PlaceTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Turn the draft into a logged place with a fresh ID.
    pub fn into_place(
        self,
        visit: VisitDetails,
        added_at: i64,
        user_id: Option<String>,
    ) -> Result<Place, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        Ok(Place {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            location: self.location,
            country: self.country.filter(|c| !c.is_empty()),
            country_code: self.country_code.filter(|c| !c.is_empty()),
            visit_date: visit.visit_date,
            notes: visit.notes.filter(|n| !n.is_empty()),
            rating: visit.rating,
            added_at,
            images: visit.image.into_iter().collect(),
            user_id,
            tags: self.tags,
            mood: self.mood,
        })
    }
}

/// Partial update for a place
///
/// An outer `None` leaves the field untouched. For optional fields,
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub location: Option<Coordinates>,
    pub country: Option<Option<String>>,
    pub country_code: Option<Option<String>>,
    pub visit_date: Option<NaiveDate>,
    pub notes: Option<Option<String>>,
    pub rating: Option<Option<Rating>>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<PlaceTag>>,
    pub mood: Option<Option<Mood>>,
}

impl PlacePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, place: &mut Place) -> Result<(), ValidationError> {
        if let Some(name) = self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::MissingField("name"));
            }
            place.name = name.to_string();
        }
        if let Some(location) = self.location {
            place.location = location;
        }
        if let Some(country) = self.country {
            place.country = country.filter(|c| !c.is_empty());
        }
        if let Some(code) = self.country_code {
            place.country_code = code.filter(|c| !c.is_empty());
        }
        if let Some(date) = self.visit_date {
            place.visit_date = date;
        }
        if let Some(notes) = self.notes {
            place.notes = notes.filter(|n| !n.is_empty());
        }
        if let Some(rating) = self.rating {
            place.rating = rating;
        }
        if let Some(images) = self.images {
            place.images = images;
        }
        if let Some(tags) = self.tags {
            place.tags = tags;
        }
        if let Some(mood) = self.mood {
            place.mood = mood;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_coordinates_range() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert_eq!(
            Coordinates::new(90.5, 0.0),
            Err(ValidationError::InvalidCoordinate { lat: 90.5, lng: 0.0 })
        );
        assert!(Coordinates::new(0.0, -180.1).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_coordinates_deserialize_rejects_out_of_range() {
        let ok: Coordinates = serde_json::from_str(r#"{"lat":48.85,"lng":2.35}"#).unwrap();
        assert_eq!(ok.lat(), 48.85);

        let err = serde_json::from_str::<Coordinates>(r#"{"lat":123.0,"lng":2.35}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert_eq!(Rating::new(6), Err(ValidationError::InvalidRating(6)));
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_mood_roundtrip_strings() {
        for mood in Mood::all() {
            assert_eq!(Mood::from_str(mood.as_str()), Some(*mood));
        }
        assert_eq!(Mood::from_str("grumpy"), None);
    }

    #[test]
    fn test_draft_into_place() {
        let draft = PlaceDraft::new("  Paris ", Coordinates::new(48.8566, 2.3522).unwrap())
            .with_country("France", "FR")
            .with_tag(PlaceTag::Visited)
            .with_tag(PlaceTag::Visited);
        let mut visit = VisitDetails::on(date("2024-01-01"));
        visit.notes = Some(String::new());
        visit.image = Some("data:image/jpeg;base64,AAAA".to_string());

        let place = draft.into_place(visit, 1_700_000_000_000, Some("a@b.c".into())).unwrap();
        assert_eq!(place.name, "Paris");
        assert_eq!(place.country_code(), Some("FR"));
        assert_eq!(place.tags, vec![PlaceTag::Visited]);
        assert_eq!(place.notes, None);
        assert_eq!(place.images.len(), 1);
        assert!(Uuid::parse_str(&place.id).is_ok());
    }

    #[test]
    fn test_draft_requires_name() {
        let draft = PlaceDraft::new("   ", Coordinates::new(0.0, 0.0).unwrap());
        let err = draft.into_place(VisitDetails::on(date("2024-01-01")), 0, None);
        assert_eq!(err, Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn test_empty_country_code_is_absent() {
        let mut place = PlaceDraft::new("Nowhere", Coordinates::new(0.0, 0.0).unwrap())
            .into_place(VisitDetails::on(date("2024-01-01")), 0, None)
            .unwrap();
        place.country_code = Some(String::new());
        assert_eq!(place.country_code(), None);
    }

    #[test]
    fn test_visibility() {
        let mut place = PlaceDraft::new("Rome", Coordinates::new(41.9, 12.5).unwrap())
            .into_place(VisitDetails::on(date("2024-01-01")), 0, None)
            .unwrap();
        assert!(place.is_visible_to(None));
        assert!(place.is_visible_to(Some("x@y.z")));

        place.user_id = Some("a@b.c".to_string());
        assert!(place.is_visible_to(Some("a@b.c")));
        assert!(!place.is_visible_to(Some("x@y.z")));
        assert!(!place.is_visible_to(None));
    }

    #[test]
    fn test_patch_apply() {
        let mut place = PlaceDraft::new("Lyon", Coordinates::new(45.76, 4.83).unwrap())
            .into_place(VisitDetails::on(date("2024-01-01")), 0, None)
            .unwrap();

        let patch = PlacePatch {
            mood: Some(Some(Mood::Relaxed)),
            rating: Some(Some(Rating::new(4).unwrap())),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        patch.apply(&mut place).unwrap();
        assert_eq!(place.mood, Some(Mood::Relaxed));
        assert_eq!(place.name, "Lyon");

        let bad = PlacePatch {
            name: Some(" ".into()),
            ..Default::default()
        };
        assert!(bad.apply(&mut place).is_err());
    }

    #[test]
    fn test_patch_clears_optional_fields() {
        let mut place = PlaceDraft::new("Porto", Coordinates::new(41.15, -8.61).unwrap())
            .with_country("Portugal", "PT")
            .with_mood(Mood::Happy)
            .into_place(VisitDetails::on(date("2024-01-01")), 0, None)
            .unwrap();
        place.notes = Some("Port wine".into());
        place.rating = Some(Rating::new(5).unwrap());

        let patch = PlacePatch {
            mood: Some(None),
            rating: Some(None),
            notes: Some(None),
            country_code: Some(Some(String::new())),
            ..Default::default()
        };
        patch.apply(&mut place).unwrap();

        assert_eq!(place.mood, None);
        assert_eq!(place.rating, None);
        assert_eq!(place.notes, None);
        assert_eq!(place.country_code, None);
        assert_eq!(place.country.as_deref(), Some("Portugal"));
    }
}
