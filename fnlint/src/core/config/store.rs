// src/core/config/store.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::core::config::Config;

/// Default config filename, looked up in the vault root.
pub const CONFIG_FILE_NAME: &str = ".fnlint.toml";

/// Loads the configuration from `path`, falling back to the all-`Off`
/// defaults when the file does not exist.
///
/// # Errors
///
/// This function may return an error if:
/// * The file exists but cannot be read
/// * The file is not valid TOML
/// * A policy value is not one of the recognized policy names
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    // An unrecognized policy value is a hard error here, never a silent
    // fallback to some other replacement.
    toml::from_str(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Writes the configuration to `path`, replacing any previous contents.
///
/// # Errors
///
/// This function may return an error if the file cannot be written.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}
