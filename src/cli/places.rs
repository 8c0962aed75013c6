//! Place commands: add, list, remove, reset

use anyhow::{Result, bail};
use chrono::NaiveDate;
use std::path::Path;

use place_tracker::config::Config;
use place_tracker::stats::{flag_emoji, timeline};
use place_tracker::store::JournalDb;
use place_tracker::{Coordinates, Mood, PlaceDraft, PlaceTag, Rating, VisitDetails};

use super::{open_journal, print_events};

/// Arguments of `place-tracker add`
pub struct AddArgs {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub date: NaiveDate,
    pub country: Option<String>,
    pub code: Option<String>,
    pub notes: Option<String>,
    pub rating: Option<u8>,
    pub mood: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

impl AddArgs {
    fn into_draft(self) -> Result<(PlaceDraft, VisitDetails)> {
        let mut draft = PlaceDraft::new(self.name, Coordinates::new(self.lat, self.lng)?);
        draft.country = self.country;
        draft.country_code = self.code;

        if let Some(mood) = self.mood {
            let Some(mood) = Mood::from_str(&mood.to_lowercase()) else {
                bail!("Unknown mood: {}", mood);
            };
            draft.mood = Some(mood);
        }
        for tag in self.tags {
            let Some(parsed) = PlaceTag::from_str(&tag.to_lowercase()) else {
                bail!("Unknown tag: {}", tag);
            };
            draft = draft.with_tag(parsed);
        }

        let visit = VisitDetails {
            visit_date: self.date,
            notes: self.notes,
            rating: self.rating.map(Rating::new).transpose()?,
            image: self.image,
        };
        Ok((draft, visit))
    }
}

pub fn add_command(config_path: &Path, args: AddArgs) -> Result<()> {
    let mut journal = open_journal(config_path)?;
    let (draft, visit) = args.into_draft()?;
    let events = journal.add_place(draft, visit)?;
    print_events(&events);
    Ok(())
}

pub fn list_command(config_path: &Path) -> Result<()> {
    let journal = open_journal(config_path)?;
    let places = journal.places()?;

    if places.is_empty() {
        println!("No places added yet. Start by adding a location!");
        return Ok(());
    }

    println!("Places ({}):\n", places.len());

    for place in timeline(&places) {
        let flag = place.country_code().map(flag_emoji).unwrap_or_default();
        println!("  {} {} {}", place.visit_date, flag, place.name);
        println!("    id: {}", place.id);

        if let Some(country) = &place.country {
            println!("    Country: {}", country);
        }
        if let Some(rating) = place.rating {
            println!("    Rating: {}", "★".repeat(rating.value() as usize));
        }
        if let Some(mood) = place.mood {
            println!("    Mood: {} {}", mood.emoji(), mood);
        }
        if !place.tags.is_empty() {
            let tags: Vec<&str> = place.tags.iter().map(|t| t.as_str()).collect();
            println!("    Tags: {}", tags.join(", "));
        }
        if let Some(notes) = &place.notes {
            println!("    {}", notes);
        }
        if !place.images.is_empty() {
            println!("    Photos: {}", place.images.len());
        }

        println!();
    }

    Ok(())
}

pub fn remove_command(config_path: &Path, id: &str) -> Result<()> {
    let mut journal = open_journal(config_path)?;
    let events = journal.remove_place(id)?;
    print_events(&events);
    Ok(())
}

/// Delete the signed-in user's places and badges, or the whole journal with `all`
pub fn reset_command(config_path: &Path, all: bool, yes: bool) -> Result<()> {
    if !yes {
        bail!("Reset deletes places and badges permanently. Re-run with --yes to confirm.");
    }

    if all {
        let config = Config::load_or_default(config_path)?;
        JournalDb::open(&config.database_path())?.reset_all()?;
        println!("Journal cleared.");
        return Ok(());
    }

    let mut journal = open_journal(config_path)?;
    let (places, badges) = journal.reset()?;
    println!(
        "Removed {} places and {} badges for {}.",
        places,
        badges,
        journal.user().email
    );
    Ok(())
}
