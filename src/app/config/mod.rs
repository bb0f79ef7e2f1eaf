// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from and
//! saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[api]` - Backend origin, API base path and session cookies
//! - `[notifications]` - How long notifications stay visible
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PORTAL_CLIENT_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use portal_client::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.api.origin = "https://portal.example.com".to_string();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Versioned API prefix.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Session cookies in `name=value; name=value` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            base_path: default_base_path(),
            cookie: None,
        }
    }
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Seconds before a notification is evicted.
    #[serde(
        default = "default_lifetime_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub lifetime_secs: Option<u32>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lifetime_secs: default_lifetime_secs(),
        }
    }
}

impl NotificationConfig {
    /// Configured lifetime, clamped to the supported range.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        let secs = self
            .lifetime_secs
            .unwrap_or(DEFAULT_NOTIFICATION_LIFETIME_SECS)
            .clamp(MIN_NOTIFICATION_LIFETIME_SECS, MAX_NOTIFICATION_LIFETIME_SECS);
        Duration::from_secs(u64::from(secs))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_lifetime_secs() -> Option<u32> {
    Some(DEFAULT_NOTIFICATION_LIFETIME_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => (
                    Config::default(),
                    Some(format!("could not load {}: {err}", path.display())),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            api: ApiConfig {
                origin: "https://portal.example.com".to_string(),
                base_path: "/api/v2".to_string(),
                cookie: Some("csrftoken=abc".to_string()),
            },
            notifications: NotificationConfig {
                lifetime_secs: Some(8),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not valid = [toml").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[api]\ncookie = \"csrftoken=x\"\n").unwrap();

        assert_eq!(config.api.origin, DEFAULT_ORIGIN);
        assert_eq!(config.api.base_path, DEFAULT_BASE_PATH);
        assert_eq!(config.notifications.lifetime(), Duration::from_secs(5));
    }

    #[test]
    fn lifetime_is_clamped() {
        let too_long = NotificationConfig {
            lifetime_secs: Some(3_600),
        };
        let zero = NotificationConfig {
            lifetime_secs: Some(0),
        };
        assert_eq!(too_long.lifetime(), Duration::from_secs(60));
        assert_eq!(zero.lifetime(), Duration::from_secs(1));
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[api\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
