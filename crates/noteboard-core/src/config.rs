use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub autoscroll: AutoScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Virtual pixel height of one terminal row.
    /// Drag geometry is computed in pixels, rendering in rows.
    #[serde(default = "default_row_height")]
    pub row_height_px: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            row_height_px: default_row_height(),
        }
    }
}

/// Auto-scroll behavior while dragging a list item near a container edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScrollConfig {
    /// Enable auto-scrolling during drags
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Interval between scroll ticks in milliseconds
    #[serde(default = "default_interval")]
    pub interval_ms: u64,
    /// Maximum pixels scrolled per tick, reached when the dragged item
    /// is a full envelope past the edge threshold
    #[serde(default = "default_acceleration")]
    pub acceleration: f64,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            interval_ms: default_interval(),
            acceleration: default_acceleration(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("noteboard")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    50
}

fn default_row_height() -> f64 {
    16.0
}

fn default_interval() -> u64 {
    5
}

fn default_acceleration() -> f64 {
    10.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults if it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/noteboard/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("noteboard")
            .join("config.toml")
    }

    /// Get the log file path used by the TUI
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("noteboard.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoscroll_defaults() {
        let config = AutoScrollConfig::default();
        assert!(config.enabled);
        assert_eq!(config.interval_ms, 5);
        assert_eq!(config.acceleration, 10.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [autoscroll]
            interval_ms = 16
            "#,
        )
        .unwrap();
        assert_eq!(config.autoscroll.interval_ms, 16);
        assert_eq!(config.autoscroll.acceleration, 10.0);
        assert_eq!(config.ui.row_height_px, 16.0);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("autoscroll = 3").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_written_toml_loads_back() {
        let mut config = AppConfig::default();
        config.autoscroll.acceleration = 4.5;
        config.ui.row_height_px = 20.0;

        let loaded = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(loaded.autoscroll.acceleration, 4.5);
        assert_eq!(loaded.ui.row_height_px, 20.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load_from(std::path::Path::new("/nonexistent/noteboard.toml")).unwrap();
        assert_eq!(config.autoscroll, AutoScrollConfig::default());
    }
}
