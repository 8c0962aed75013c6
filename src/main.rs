use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use place_tracker::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "place-tracker")]
#[command(about = "Personal travel journal - log places, see your stats, unlock badges")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.place-tracker/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Sign in with a name and email (no verification)
    Login { name: String, email: String },

    /// Forget the signed-in user
    Logout,

    /// Log a visited place
    Add {
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Visit date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        country: Option<String>,
        /// ISO country code, e.g. FR
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// 1-5
        #[arg(long)]
        rating: Option<u8>,
        /// happy, excited, relaxed, romantic, adventurous or local
        #[arg(long)]
        mood: Option<String>,
        /// visited, lived or transit (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Image URL or data URI
        #[arg(long)]
        image: Option<String>,
    },

    /// List places, newest visit first
    List,

    /// Remove a place by ID
    Remove { id: String },

    /// Delete your places and badges (or everything with --all)
    Reset {
        /// Clear the whole journal, every user included
        #[arg(long)]
        all: bool,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show travel statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show badges and progress
    Badges,

    /// Show the recap for a year (defaults to the current year)
    Recap {
        #[arg(long)]
        year: Option<i32>,
    },

    /// Show passport stamps
    Passport,

    /// Search for a place by name
    Search { query: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);

    match cli.command {
        Commands::Init { force } => cli::init::init_command(&config_path, force)?,
        Commands::Login { name, email } => cli::session::login_command(&config_path, &name, &email)?,
        Commands::Logout => cli::session::logout_command(&config_path)?,
        Commands::Add {
            name,
            lat,
            lng,
            date,
            country,
            code,
            notes,
            rating,
            mood,
            tags,
            image,
        } => {
            let args = cli::places::AddArgs {
                name,
                lat,
                lng,
                date,
                country,
                code,
                notes,
                rating,
                mood,
                tags,
                image,
            };
            cli::places::add_command(&config_path, args)?;
        }
        Commands::List => cli::places::list_command(&config_path)?,
        Commands::Remove { id } => cli::places::remove_command(&config_path, &id)?,
        Commands::Reset { all, yes } => cli::places::reset_command(&config_path, all, yes)?,
        Commands::Stats { json } => cli::stats::stats_command(&config_path, json)?,
        Commands::Badges => cli::stats::badges_command(&config_path)?,
        Commands::Recap { year } => cli::stats::recap_command(&config_path, year)?,
        Commands::Passport => cli::stats::passport_command(&config_path)?,
        Commands::Search { query } => cli::search::search_command(&config_path, &query)?,
    }

    Ok(())
}
