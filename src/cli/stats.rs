//! Stats, badges, recap and passport commands

use anyhow::Result;
use chrono::{Datelike, Local};
use std::path::Path;

use place_tracker::stats::badges::{Badge, BadgeProgress};
use place_tracker::stats::{TravelStats, passport, yearly_recap};

use super::open_journal;

const PROGRESS_WIDTH: usize = 20;

pub fn stats_command(config_path: &Path, json: bool) -> Result<()> {
    let journal = open_journal(config_path)?;
    let stats = journal.stats()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Travel stats for {}:\n", journal.user().name);
        print_stats(&stats);
    }
    Ok(())
}

fn print_stats(stats: &TravelStats) {
    println!("  Distance:    {} km", stats.total_distance_km);
    println!("  Countries:   {}", stats.countries_count);
    println!("  Cities:      {}", stats.cities_count);
    if stats.continents.is_empty() {
        println!("  Continents:  {}", stats.continents_count);
    } else {
        println!(
            "  Continents:  {} ({})",
            stats.continents_count,
            stats.continents.join(", ")
        );
    }
    match stats.top_mood.mood() {
        Some(mood) => println!("  Top mood:    {} {}", mood.emoji(), mood),
        None => println!("  Top mood:    {}", stats.top_mood),
    }
}

pub fn badges_command(config_path: &Path) -> Result<()> {
    let journal = open_journal(config_path)?;
    let progress = journal.badge_progress()?;
    let earned = progress.iter().filter(|p| p.unlocked_at.is_some()).count();

    println!("Badges ({}/{}):\n", earned, Badge::total_count());
    for entry in &progress {
        print_badge(entry);
    }
    Ok(())
}

fn print_badge(entry: &BadgeProgress) {
    let badge = entry.badge;
    let mark = if entry.unlocked_at.is_some() { "✓" } else { " " };
    println!("  [{}] {} {} - {}", mark, badge.icon, badge.name, badge.description);

    let filled = (entry.fraction() * PROGRESS_WIDTH as f64).round() as usize;
    println!(
        "      {}{} {}/{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled),
        entry.current.min(entry.target),
        entry.target
    );
}

pub fn recap_command(config_path: &Path, year: Option<i32>) -> Result<()> {
    let journal = open_journal(config_path)?;
    let places = journal.places()?;
    let year = year.unwrap_or_else(|| Local::now().year());
    let recap = yearly_recap(&places, year);

    println!("{} recap:\n", recap.year);
    println!("  Places:    {}", recap.places_count);
    println!("  Countries: {}", recap.countries_count);
    println!("  Mood:      {} {}", recap.top_mood.emoji(), recap.top_mood);
    Ok(())
}

pub fn passport_command(config_path: &Path) -> Result<()> {
    let journal = open_journal(config_path)?;
    let places = journal.places()?;
    let passport = passport(&places);

    if passport.stamps.is_empty() {
        println!("Your passport is empty.");
        return Ok(());
    }

    println!(
        "Passport: {} stamps from {} countries\n",
        passport.stamp_count(),
        passport.countries.len()
    );
    for stamp in &passport.stamps {
        println!(
            "  {} {:<3} {} ({})",
            stamp.flag, stamp.label, stamp.place_name, stamp.visit_date
        );
    }
    Ok(())
}
