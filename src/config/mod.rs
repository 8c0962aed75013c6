//! Configuration loading and management

mod io;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Place search settings
    #[serde(default)]
    pub geocoding: GeocodingSettings,
}

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display name of the signed-in user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Email of the signed-in user (also the user ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,

    /// Journal database location (defaults to ~/.place-tracker/journal.db)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

/// Settings for the external place search service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingSettings {
    /// Nominatim-compatible search endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum number of results per search
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Queries shorter than this are not sent
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Sent as User-Agent, required by the public Nominatim usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_limit() -> u32 {
    5
}

fn default_min_query_len() -> usize {
    3
}

fn default_user_agent() -> String {
    format!("place-tracker/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
            min_query_len: default_min_query_len(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Journal database path, falling back to the global config dir
    pub fn database_path(&self) -> PathBuf {
        self.settings
            .database_path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("journal.db"))
    }

    /// The signed-in user, if a valid login is stored
    pub fn current_user(&self) -> Option<User> {
        let name = self.settings.user_name.as_deref()?;
        let email = self.settings.user_email.as_deref()?;
        User::login(name, email).ok()
    }

    pub fn set_user(&mut self, user: &User) {
        self.settings.user_name = Some(user.name.clone());
        self.settings.user_email = Some(user.email.clone());
    }

    pub fn clear_user(&mut self) {
        self.settings.user_name = None;
        self.settings.user_email = None;
    }
}
