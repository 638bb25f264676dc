//! Default locations under `~/.marinetrack/`.
//!
//! - `~/.marinetrack/config.toml` - main configuration
//! - `~/.marinetrack/marinetrack.db` - tracking database

use std::path::PathBuf;

/// Returns the marinetrack home directory (`~/.marinetrack/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".marinetrack")
}

/// Returns the default config file path.
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
