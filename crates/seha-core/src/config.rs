//! Configuration management for Seha.
//!
//! Loads configuration from ${SEHA_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for Seha configuration and data directories.
    //!
    //! SEHA_HOME resolution order:
    //! 1. SEHA_HOME environment variable (if set)
    //! 2. ~/.config/seha (default)

    use std::path::PathBuf;

    /// Returns the Seha home directory.
    ///
    /// Checks SEHA_HOME env var first, falls back to ~/.config/seha
    pub fn seha_home() -> PathBuf {
        if let Ok(home) = std::env::var("SEHA_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("seha"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        seha_home().join("config.toml")
    }

    /// Returns the path to the persisted session record.
    pub fn session_path() -> PathBuf {
        seha_home().join(crate::session::SESSION_FILE)
    }

    /// Returns the directory for TUI log files.
    pub fn logs_dir() -> PathBuf {
        seha_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated latency applied to screen navigation, in milliseconds.
    pub navigation_delay_ms: u64,

    /// Simulated latency for dashboard data on first entry, in milliseconds.
    pub data_delay_ms: u64,

    /// How long transient notices stay visible, in seconds.
    pub notice_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            navigation_delay_ms: Self::DEFAULT_NAVIGATION_DELAY_MS,
            data_delay_ms: Self::DEFAULT_DATA_DELAY_MS,
            notice_secs: Self::DEFAULT_NOTICE_SECS,
        }
    }
}

impl Config {
    const DEFAULT_NAVIGATION_DELAY_MS: u64 = 300;
    const DEFAULT_DATA_DELAY_MS: u64 = 1500;
    const DEFAULT_NOTICE_SECS: u64 = 5;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to a path.
    ///
    /// Fails if the file already exists.
    pub fn init_at(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    pub fn data_delay(&self) -> Duration {
        Duration::from_millis(self.data_delay_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_secs)
    }
}

/// The commented template written by `config init`.
pub fn default_config_template() -> &'static str {
    r#"# Seha configuration

# Simulated latency applied to screen navigation (milliseconds).
navigation_delay_ms = 300

# Simulated latency for dashboard data on first entry (milliseconds).
data_delay_ms = 1500

# How long transient notices stay visible (seconds).
notice_secs = 5
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.navigation_delay_ms, 300);
        assert_eq!(config.data_delay_ms, 1500);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "navigation_delay_ms = 50\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.navigation_delay_ms, 50);
        assert_eq!(config.data_delay_ms, 1500);
    }

    #[test]
    fn test_template_parses_back_to_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed.navigation_delay_ms, Config::default().navigation_delay_ms);
        assert_eq!(parsed.notice_secs, Config::default().notice_secs);
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::init_at(&path).unwrap();
        assert!(Config::init_at(&path).is_err());
    }
}
