//! Configuration file I/O operations

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.place-tracker/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".place-tracker")
    }

    /// Get the global config file path (~/.place-tracker/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Write the config to `path` under the config lock.
    ///
    /// The file is replaced atomically; readers see the old or the new
    /// content, never a partial write.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        let _lock = ConfigLock::acquire(path)?;
        replace_file(path, &content)
    }

    /// Re-read, modify and save the config while holding the lock, so
    /// concurrent edits of different keys are not lost.
    pub fn update(path: &Path, edit: impl FnOnce(&mut Config)) -> Result<Config> {
        let _lock = ConfigLock::acquire(path)?;
        let mut config = Self::load_or_default(path)?;
        edit(&mut config);

        let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
        replace_file(path, &content)?;
        Ok(config)
    }
}

/// Exclusive advisory lock on `<config>.toml.lock`, released on drop.
///
/// The lock lives on a sidecar file because the config itself is replaced
/// by rename.
struct ConfigLock {
    _file: File,
}

impl ConfigLock {
    fn acquire(config_path: &Path) -> Result<Self> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let lock_path = config_path.with_extension("toml.lock");
        let file = File::create(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;
        file.lock_exclusive().context("Failed to acquire config lock")?;
        Ok(Self { _file: file })
    }
}

/// Write `content` next to `path`, flush it to disk, then rename over `path`
fn replace_file(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("toml.tmp");
    let mut temp = File::create(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.sync_all())
        .with_context(|| format!("Failed to write config: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace config file: {}", path.display()))
}
