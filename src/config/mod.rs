// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use line_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.notify_duration_secs = Some(8);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::{
    COUNTDOWN_TICK_MS, DEFAULT_DATE_FORMAT, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
    DEFAULT_NOTIFY_DURATION_SECS, MAX_DIAGNOSTICS_BUFFER_CAPACITY, MAX_NOTIFY_DURATION_SECS,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY, MIN_NOTIFY_DURATION_SECS,
};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LineLens";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Display duration for notification banners, in seconds.
    #[serde(default)]
    pub notify_duration_secs: Option<u32>,
    /// `chrono` format string for timestamps in table cells.
    #[serde(default)]
    pub date_format: Option<String>,
    /// Capacity of the diagnostics event buffer.
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notify_duration_secs: Some(DEFAULT_NOTIFY_DURATION_SECS),
            date_format: None,
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            notify_duration_secs: Some(8),
            date_format: Some("%Y-%m-%d".to_string()),
            diagnostics_capacity: Some(250),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.notify_duration_secs, config.notify_duration_secs);
        assert_eq!(loaded.date_format, config.date_format);
        assert_eq!(loaded.diagnostics_capacity, config.diagnostics_capacity);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not [valid toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(
            loaded.notify_duration_secs,
            Some(DEFAULT_NOTIFY_DURATION_SECS)
        );
    }

    #[test]
    fn load_from_path_fails_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("missing.toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let config: Config = toml::from_str("").expect("empty config should parse");
        assert_eq!(config.notify_duration_secs, None);
        assert_eq!(config.date_format, None);
        assert_eq!(config.diagnostics_capacity, None);
    }
}
