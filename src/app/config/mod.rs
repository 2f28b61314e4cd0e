// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[form]` - Prompt validation settings
//! - `[rotation]` - Example placeholder rotation settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `APP_FORGE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Degraded Load
//!
//! An unreadable or malformed settings file never aborts startup: `load`
//! returns defaults plus a warning message the caller can surface.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Prompt form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormConfig {
    /// Minimum number of characters a trimmed prompt must contain.
    #[serde(
        default = "default_min_prompt_chars",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_prompt_chars: Option<usize>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_prompt_chars: default_min_prompt_chars(),
        }
    }
}

/// Example placeholder rotation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RotationConfig {
    /// Interval between rotation ticks, in milliseconds.
    #[serde(
        default = "default_rotation_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_rotation_interval_ms(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Prompt form settings.
    #[serde(default)]
    pub form: FormConfig,

    /// Placeholder rotation settings.
    #[serde(default)]
    pub rotation: RotationConfig,
}

/// Keeps rotation intervals above the supported minimum so a persisted
/// config cannot request a busy-loop timer.
#[must_use]
pub fn clamp_rotation_interval(interval_ms: u64) -> u64 {
    interval_ms.max(MIN_ROTATION_INTERVAL_MS)
}

/// Loads the configuration from the resolved config directory.
///
/// Returns the configuration plus an optional warning message when the
/// settings file existed but could not be used.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration, preferring `base_dir` over the resolved
/// config directory when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(dir) = paths::config_dir_with_override(base_dir) else {
        return (Config::default(), None);
    };
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => (
            Config::default(),
            Some(format!(
                "Settings file could not be read ({error}); using defaults"
            )),
        ),
    }
}

/// Loads the configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration, preferring `base_dir` over the resolved
/// config directory when given.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let Some(dir) = paths::config_dir_with_override(base_dir) else {
        return Err(crate::error::Error::Config(
            "no config directory available".to_string(),
        ));
    };
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Saves the configuration to an explicit file path, creating parent
/// directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string(config)?;
    fs::write(path, content)?;
    Ok(())
}
