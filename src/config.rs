use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file holding the persisted preferences
    pub database_path: PathBuf,
    /// How often the OS brightness is polled, in milliseconds
    pub brightness_poll_interval_ms: u64,
    /// Extra wait before restoring the saved theme mode, in milliseconds
    pub restore_delay_ms: u64,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("data/themekeeper.db"),
            brightness_poll_interval_ms: 1000,
            restore_delay_ms: 0,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a JSON file, falling back to defaults when it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn brightness_poll_interval(&self) -> Duration {
        Duration::from_millis(self.brightness_poll_interval_ms)
    }

    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            restore_delay: Duration::from_millis(self.restore_delay_ms),
        }
    }
}

/// Tuning knobs for [`ThemeService`](crate::services::ThemeService)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeOptions {
    /// Wait applied before the saved mode is read back at startup
    pub restore_delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let config = AppConfig::load(Path::new("definitely/not/here.json"))?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_json_fills_defaults() -> Result<()> {
        let config: AppConfig = serde_json::from_str(r#"{ "restore_delay_ms": 250 }"#)?;
        assert_eq!(config.restore_delay_ms, 250);
        assert_eq!(config.brightness_poll_interval_ms, 1000);
        assert_eq!(config.theme_options().restore_delay, Duration::from_millis(250));
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let path = std::env::temp_dir().join(format!("themekeeper-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "database_path": "prefs.db", "log_filter": "debug" }"#)?;

        let config = AppConfig::load(&path)?;
        fs::remove_file(&path)?;

        assert_eq!(config.database_path, PathBuf::from("prefs.db"));
        assert_eq!(config.log_filter, "debug");
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_an_error() -> Result<()> {
        let path = std::env::temp_dir().join(format!("themekeeper-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json")?;

        let result = AppConfig::load(&path);
        fs::remove_file(&path)?;

        assert!(result.is_err());
        Ok(())
    }
}
