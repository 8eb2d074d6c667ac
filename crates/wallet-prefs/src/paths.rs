//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/wallet-store/`
//! - macOS: `~/Library/Application Support/wallet-store/`
//! - Windows: `%APPDATA%\wallet-store\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "wallet-store";
const PREFERENCES_FILE: &str = "preferences.toml";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
    Ok(dir)
}

/// Get path to the default preference file
pub fn default_preferences_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(PREFERENCES_FILE))
}
