//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

/// Default configuration content for `place-tracker init`
pub const DEFAULT_CONFIG: &str = r#"# Place Tracker Configuration
# ===========================

# ============================================================================
# SETTINGS
# ============================================================================
#
# Available options:
#   user_name      - Display name of the signed-in user (set by `login`)
#   user_email     - Email of the signed-in user, also the user ID (set by `login`)
#   database_path  - Journal database file (default: ~/.place-tracker/journal.db)

[settings]
# database_path = "/path/to/journal.db"

# ============================================================================
# GEOCODING - place search used by `place-tracker search`
# ============================================================================
#
# Available options:
#   base_url       - Nominatim-compatible search endpoint
#   limit          - Maximum results per search (default: 5)
#   min_query_len  - Shorter queries are not sent (default: 3)
#   user_agent     - User-Agent header sent with each request

[geocoding]
base_url = "https://nominatim.openstreetmap.org/search"
limit = 5
min_query_len = 3
"#;

/// Write the default config file
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;

    info!("Created config file: {}", config_path.display());
    println!("Created {}", config_path.display());
    Ok(())
}
