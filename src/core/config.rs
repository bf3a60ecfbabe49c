//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, WoofError};

/// Full woof configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub ui: UiConfig,
    pub log: LogConfig,
    pub paths: PathsConfig,
}

/// Screen behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds. Bounds the idle redraw latency.
    pub poll_interval_ms: u64,
    /// Use the high-contrast palette.
    pub high_contrast: bool,
    /// Show the one-line key-hint footer under the list.
    pub show_hints: bool,
}

/// Event-log behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Master switch for the JSONL event log.
    pub enabled: bool,
    /// Mirror log write failures to stderr instead of discarding silently.
    pub fallback_to_stderr: bool,
}

/// Filesystem paths used by woof.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
    pub jsonl_log: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 250,
            high_contrast: false,
            show_hints: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fallback_to_stderr: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let home_dir = env::var_os("HOME").map_or_else(
            || {
                eprintln!(
                    "[WOOF-CONFIG] WARNING: HOME not set, falling back to /tmp for data paths"
                );
                PathBuf::from("/tmp")
            },
            PathBuf::from,
        );
        let cfg = home_dir.join(".config").join("woof").join("config.toml");
        let data = home_dir.join(".local").join("share").join("woof");
        Self {
            config_file: cfg,
            jsonl_log: data.join("activity.jsonl"),
        }
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathsConfig::default().config_file
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from the default path;
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| WoofError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(WoofError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Deterministic hash of the effective config for logging.
    ///
    /// Uses FNV-1a for cross-process-stable hashing (no `DefaultHasher`
    /// whose seed may vary across Rust releases).
    pub fn stable_hash(&self) -> Result<String> {
        let canonical = serde_json::to_string(self)?;
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in canonical.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        Ok(format!("{hash:016x}"))
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        set_env_u64("WOOF_UI_POLL_INTERVAL_MS", &mut self.ui.poll_interval_ms)?;
        set_env_bool("WOOF_UI_HIGH_CONTRAST", &mut self.ui.high_contrast)?;
        set_env_bool("WOOF_UI_SHOW_HINTS", &mut self.ui.show_hints)?;
        set_env_bool("WOOF_LOG_ENABLED", &mut self.log.enabled)?;
        set_env_path("WOOF_LOG_FILE", &mut self.paths.jsonl_log);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(10..=10_000).contains(&self.ui.poll_interval_ms) {
            return Err(WoofError::InvalidConfig {
                details: format!(
                    "ui.poll_interval_ms must be within 10..=10000, got {}",
                    self.ui.poll_interval_ms
                ),
            });
        }
        Ok(())
    }

    /// Render the effective configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| WoofError::Serialization {
            context: "toml",
            details: e.to_string(),
        })
    }
}

// ──────────────────── env helpers ────────────────────

fn set_env_u64(key: &str, target: &mut u64) -> Result<()> {
    if let Ok(raw) = env::var(key) {
        *target = raw.parse().map_err(|_| WoofError::InvalidConfig {
            details: format!("{key} must be an unsigned integer, got {raw:?}"),
        })?;
    }
    Ok(())
}

fn set_env_bool(key: &str, target: &mut bool) -> Result<()> {
    if let Ok(raw) = env::var(key) {
        *target = match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                return Err(WoofError::InvalidConfig {
                    details: format!("{key} must be a boolean, got {raw:?}"),
                });
            }
        };
    }
    Ok(())
}

fn set_env_path(key: &str, target: &mut PathBuf) {
    if let Some(raw) = env::var_os(key) {
        *target = PathBuf::from(raw);
    }
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.ui.poll_interval_ms, 250);
        assert!(cfg.log.enabled);
        assert!(cfg.ui.show_hints);
        assert!(!cfg.ui.high_contrast);
    }

    #[test]
    fn toml_round_trip_preserves_values() {
        let mut cfg = Config::default();
        cfg.ui.poll_interval_ms = 500;
        cfg.ui.high_contrast = true;
        cfg.log.enabled = false;

        let rendered = cfg.to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let parsed: Config = toml::from_str("[ui]\npoll_interval_ms = 100\n").unwrap();
        assert_eq!(parsed.ui.poll_interval_ms, 100);
        assert!(parsed.ui.show_hints);
        assert!(parsed.log.enabled);
    }

    #[test]
    fn poll_interval_out_of_range_is_rejected() {
        let mut cfg = Config::default();
        cfg.ui.poll_interval_ms = 5;
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.code(), "WOOF-1001");

        cfg.ui.poll_interval_ms = 60_000;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn stable_hash_is_deterministic_and_sensitive() {
        let cfg = Config::default();
        let h1 = cfg.stable_hash().unwrap();
        let h2 = cfg.stable_hash().unwrap();
        assert_eq!(h1, h2);

        let mut changed = Config::default();
        changed.ui.poll_interval_ms = 251;
        assert_ne!(h1, changed.stable_hash().unwrap());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/woof.toml"))).unwrap_err();
        assert_eq!(err.code(), "WOOF-1002");
    }
}
