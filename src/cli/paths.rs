//! Path utilities for folio.
//!
//! All data lives under `~/.folio/`:
//! - `~/.folio/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the folio home directory (`~/.folio/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".folio")
}

/// Returns the default config file path (`~/.folio/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Ensures the folio home directory exists.
pub fn ensure_home_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(home_dir())
}
