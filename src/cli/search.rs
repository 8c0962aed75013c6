//! Search command implementation

use anyhow::Result;
use std::path::Path;

use place_tracker::config::Config;
use place_tracker::geocoding::search_places;

pub fn search_command(config_path: &Path, query: &str) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let settings = &config.geocoding;

    if query.trim().chars().count() < settings.min_query_len {
        println!(
            "Query too short (at least {} characters).",
            settings.min_query_len
        );
        return Ok(());
    }

    let results = search_places(settings, query)?;
    if results.is_empty() {
        println!("No places found for '{}'.", query.trim());
        return Ok(());
    }

    println!("Results ({}):\n", results.len());
    for draft in results {
        println!("  {}", draft.name);
        if let Some(country) = &draft.country {
            let code = draft.country_code.as_deref().unwrap_or("");
            println!("    Country: {} {}", country, code);
        }
        println!(
            "    place-tracker add \"{}\" --lat {} --lng {} --date YYYY-MM-DD{}",
            draft.name,
            draft.location.lat(),
            draft.location.lng(),
            draft
                .country_code
                .as_deref()
                .map(|c| format!(" --code {}", c))
                .unwrap_or_default()
        );
        println!();
    }
    Ok(())
}
