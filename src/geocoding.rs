//! Place search through a Nominatim-compatible geocoding service
//!
//! A thin wrapper: send the query, map each hit to a [`PlaceDraft`]. There is
//! no retry; callers decide what to do with a failed lookup.

use serde::Deserialize;

use crate::config::GeocodingSettings;
use crate::domain::{Coordinates, PlaceDraft};

/// Error type for place search
#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    #[error("Place search request failed: {0}")]
    Transport(String),

    #[error("Place search returned HTTP {0}")]
    Status(u16),

    #[error("Failed to read place search response: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse place search response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    address: Option<SearchAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchAddress {
    country: Option<String>,
    country_code: Option<String>,
}

/// Search for places matching `query`.
///
/// Queries shorter than `min_query_len` characters return no results without
/// contacting the service.
pub fn search_places(
    settings: &GeocodingSettings,
    query: &str,
) -> Result<Vec<PlaceDraft>, GeocodingError> {
    let query = query.trim();
    if query.chars().count() < settings.min_query_len {
        return Ok(Vec::new());
    }

    let limit = settings.limit.to_string();
    let response = ureq::get(&settings.base_url)
        .set("User-Agent", &settings.user_agent)
        .query("q", query)
        .query("format", "json")
        .query("addressdetails", "1")
        .query("limit", &limit)
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(code, _) => GeocodingError::Status(code),
            ureq::Error::Transport(t) => GeocodingError::Transport(t.to_string()),
        })?;

    let body = response.into_string()?;
    let drafts = parse_search_response(&body)?;
    tracing::debug!("Place search '{}' returned {} results", query, drafts.len());
    Ok(drafts)
}

/// Map a raw search response body to drafts.
///
/// Hits with unparseable or out-of-range coordinates are skipped.
pub fn parse_search_response(body: &str) -> Result<Vec<PlaceDraft>, GeocodingError> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;
    Ok(hits.into_iter().filter_map(hit_to_draft).collect())
}

fn hit_to_draft(hit: SearchHit) -> Option<PlaceDraft> {
    let lat: f64 = hit.lat.trim().parse().ok()?;
    let lng: f64 = hit.lon.trim().parse().ok()?;
    let location = Coordinates::new(lat, lng).ok()?;

    // "Paris, Ile-de-France, France" -> "Paris"
    let name = hit.display_name.split(',').next().unwrap_or_default().trim();
    if name.is_empty() {
        return None;
    }

    let address = hit.address.unwrap_or_default();
    let mut draft = PlaceDraft::new(name, location);
    draft.country = address.country.filter(|c| !c.is_empty());
    draft.country_code = address
        .country_code
        .filter(|c| !c.is_empty())
        .map(|c| c.to_ascii_uppercase());
    Some(draft)
}
