// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitget.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `GITGET_`)
//! 2. Config file: `~/.config/gitget/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Sort by last update instead of last push
//! GITGET_GITHUB__SORT=updated gitget octocat
//!
//! # Talk to a GitHub Enterprise instance
//! GITGET_GITHUB__BASE_URL=https://ghe.example.com/api/v3 gitget octocat
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::GitGetError;
use crate::github::repos::SortKey;

/// Default REST API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL.
    pub base_url: String,
    /// Recency metric used to order the listing.
    pub sort: SortKey,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sort: SortKey::default(),
        }
    }
}

/// Returns the gitget configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/gitget`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("gitget");
    }
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("gitget")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `GITGET_` and double underscore
/// for nested keys (e.g., `GITGET_GITHUB__BASE_URL`).
///
/// # Errors
///
/// Returns `GitGetError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, GitGetError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("GITGET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // SAFETY: serialized with every other test touching the environment
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        let config = load_config().expect("should load with defaults");

        assert_eq!(config.github.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.github.sort, SortKey::Pushed);

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("gitget");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[github]\nbase_url = \"http://localhost:9999\"\nsort = \"updated\"\n",
        )
        .unwrap();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        let config = load_config().expect("should load config file");

        assert_eq!(config.github.base_url, "http://localhost:9999");
        assert_eq!(config.github.sort, SortKey::Updated);

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_env_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
            std::env::set_var("GITGET_GITHUB__BASE_URL", "http://127.0.0.1:1");
        }

        let config = load_config().expect("should load with env override");
        assert_eq!(config.github.base_url, "http://127.0.0.1:1");

        unsafe {
            std::env::remove_var("GITGET_GITHUB__BASE_URL");
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_respects_xdg() {
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/tmp/xdg-test");
        }
        assert_eq!(config_dir(), PathBuf::from("/tmp/xdg-test/gitget"));
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    fn test_config_file_path_name() {
        assert!(config_file_path().ends_with("gitget/config.toml"));
    }
}
