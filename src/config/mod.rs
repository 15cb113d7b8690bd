// SPDX-License-Identifier: MPL-2.0
//! This module handles the provider configuration, including loading and
//! saving it to a `toast.toml` file.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.duration_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::toast::{OverflowPolicy, ProviderConfig, ProviderDefaults, ToastStyle, Viewport};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

/// Persisted provider settings. Every field is optional; unset fields fall
/// back to [`defaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Display duration for toasts that do not set their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Maximum number of waiting toasts; unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pending: Option<usize>,
    #[serde(default)]
    pub overflow: OverflowPolicy,
    /// How long before expiry the exit animation starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_lead_ms: Option<u64>,
    /// Progress tick period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_ms: Option<u64>,
    /// Provider-wide partial style.
    #[serde(default)]
    pub style: ToastStyle,
}

impl Config {
    /// Tick period, clamped to the supported range.
    #[must_use]
    pub fn tick_period(&self) -> Duration {
        let ms = self
            .tick_ms
            .unwrap_or(DEFAULT_TICK_MS)
            .clamp(MIN_TICK_MS, MAX_TICK_MS);
        Duration::from_millis(ms)
    }

    /// Exit lead-in, capped at the length of the exit animation.
    #[must_use]
    pub fn exit_lead(&self) -> Duration {
        let ms = self
            .exit_lead_ms
            .unwrap_or(DEFAULT_EXIT_LEAD_MS)
            .min(MAX_EXIT_LEAD_MS);
        Duration::from_millis(ms)
    }

    /// Builds the runtime configuration of a provider drawn on `viewport`.
    #[must_use]
    pub fn provider_config(&self, viewport: Viewport) -> ProviderConfig {
        ProviderConfig {
            defaults: ProviderDefaults {
                duration_ms: self.duration_ms,
                style: self.style.clone(),
            },
            max_pending: self.max_pending,
            overflow: self.overflow,
            tick_period: self.tick_period(),
            exit_lead: self.exit_lead(),
            viewport,
        }
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// A missing file yields the defaults. A file that cannot be read or parsed
/// also yields the defaults, together with a warning message.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
            (Config::default(), Some(err.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

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
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::toast::{Dimension, Edge};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_style() {
        let config = Config {
            duration_ms: Some(4500),
            style: ToastStyle::default()
                .background("#222")
                .width(Dimension::Px(320.0))
                .at(Edge::Top),
            max_pending: Some(4),
            overflow: OverflowPolicy::DropNewest,
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "duration_ms = \"soon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let config: Config = toml::from_str("duration_ms = 1200\n[style]\nposition = \"top\"\n")
            .expect("valid toml");

        assert_eq!(config.duration_ms, Some(1200));
        assert_eq!(config.style.position, Some(Edge::Top));
        assert_eq!(config.overflow, OverflowPolicy::DropOldest);
        assert!(config.max_pending.is_none());
    }

    #[test]
    fn tick_period_is_clamped() {
        let fast = Config {
            tick_ms: Some(1),
            ..Config::default()
        };
        let slow = Config {
            tick_ms: Some(60_000),
            ..Config::default()
        };

        assert_eq!(fast.tick_period(), Duration::from_millis(MIN_TICK_MS));
        assert_eq!(slow.tick_period(), Duration::from_millis(MAX_TICK_MS));
        assert_eq!(
            Config::default().tick_period(),
            Duration::from_millis(DEFAULT_TICK_MS)
        );
    }

    #[test]
    fn exit_lead_is_capped() {
        let long = Config {
            exit_lead_ms: Some(10_000),
            ..Config::default()
        };

        assert_eq!(long.exit_lead(), Duration::from_millis(MAX_EXIT_LEAD_MS));
        assert_eq!(
            Config::default().exit_lead(),
            Duration::from_millis(DEFAULT_EXIT_LEAD_MS)
        );
    }

    #[test]
    fn provider_config_carries_every_setting() {
        let config = Config {
            duration_ms: Some(800),
            max_pending: Some(2),
            exit_lead_ms: Some(100),
            ..Config::default()
        };
        let viewport = Viewport::new(1024.0, 768.0);

        let provider = config.provider_config(viewport);

        assert_eq!(provider.defaults.duration_ms, Some(800));
        assert_eq!(provider.max_pending, Some(2));
        assert_eq!(provider.exit_lead, Duration::from_millis(100));
        assert_eq!(provider.viewport, viewport);
    }
}
