//! Country code to continent lookup
//!
//! The table is intentionally incomplete: codes it does not know are left out
//! of continent counts rather than bucketed as "Unknown".

pub const AFRICA: &str = "Africa";
pub const ASIA: &str = "Asia";
pub const EUROPE: &str = "Europe";
pub const EUROPE_ASIA: &str = "Europe/Asia";
pub const NORTH_AMERICA: &str = "North America";
pub const OCEANIA: &str = "Oceania";
pub const SOUTH_AMERICA: &str = "South America";

/// Look up the continent for an ISO country code (case-insensitive)
pub fn continent_for(country_code: &str) -> Option<&'static str> {
    let continent = match country_code.trim().to_ascii_uppercase().as_str() {
        "US" | "CA" | "MX" => NORTH_AMERICA,
        "GB" | "FR" | "DE" | "IT" | "ES" | "PT" | "NL" | "BE" | "CH" | "AT" | "SE" | "NO"
        | "DK" | "FI" | "PL" | "GR" | "IE" | "CZ" | "HU" | "RO" => EUROPE,
        // Transcontinental, counted as its own bucket
        "RU" => EUROPE_ASIA,
        "CN" | "JP" | "KR" | "IN" | "TH" | "VN" | "ID" | "MY" | "SG" | "PH" | "AE" | "IL"
        | "TR" => ASIA,
        "AU" | "NZ" => OCEANIA,
        "BR" | "AR" | "CL" | "CO" | "PE" => SOUTH_AMERICA,
        "ZA" | "EG" | "NG" | "KE" | "MA" => AFRICA,
        _ => return None,
    };
    Some(continent)
}
