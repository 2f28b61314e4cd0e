// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `config_dir_with_override` (CLI
//!    `--config-dir`, tests)
//! 2. **Environment variable** (`APP_FORGE_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "AppForge";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "APP_FORGE_CONFIG_DIR";

/// Resolves the config directory without an explicit override.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Resolves the config directory, preferring `override_dir` when given.
///
/// Returns `None` only when no override is given, the environment variable
/// is unset, and the platform has no config directory.
#[must_use]
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let override_dir = PathBuf::from("/tmp/app-forge-test-config");
        let resolved = config_dir_with_override(Some(override_dir.clone()));
        assert_eq!(resolved, Some(override_dir));
    }

    #[test]
    fn platform_fallback_appends_app_name() {
        // Without override or env var the platform default applies; on CI
        // the env var may be set, so only check the suffix when it is not.
        if std::env::var(ENV_CONFIG_DIR).is_err() {
            if let Some(dir) = config_dir() {
                assert!(dir.ends_with(APP_NAME));
            }
        }
    }
}
