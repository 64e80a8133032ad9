//! User configuration.
//!
//! Stored as TOML at `~/.config/pf-demo/config.toml` (or the path in
//! `PF_DEMO_CONFIG`). Every field has a default, so a partial or missing file
//! is always valid.

mod migrate;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::PackageManager;
use crate::player::{PlayerOptions, TypingCadence};
use crate::theme::Theme;

pub use migrate::{migrate_config, MigrationResult};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PF_DEMO_CONFIG";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to edit config: {0}")]
    Edit(#[from] toml_edit::TomlError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub install: InstallConfig,
    pub ui: UiConfig,
}

/// Typing animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Lower bound of the per-character delay
    pub min_char_ms: u64,
    /// Upper bound (exclusive) of the per-character delay
    pub max_char_ms: u64,
    /// Pause before a looping transcript restarts
    pub loop_pause_ms: u64,
    /// Speed multiplier (0.1 - 16)
    pub speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            min_char_ms: 30,
            max_char_ms: 80,
            loop_pause_ms: 2000,
            speed: 1.0,
        }
    }
}

impl PlayerConfig {
    /// Player options for a playback with the given loop setting.
    pub fn to_options(&self, looping: bool) -> PlayerOptions {
        PlayerOptions {
            auto_start: true,
            looping,
            cadence: TypingCadence::from_millis(self.min_char_ms, self.max_char_ms),
            loop_pause: Duration::from_millis(self.loop_pause_ms),
            speed: self.speed,
        }
    }
}

/// Installation view settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Package manager preselected in the install view
    pub default_manager: PackageManager,
}

/// Interface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: default, mono or ocean
    pub theme: String,
    /// TUI redraw interval while idle
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("pf-demo").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config, falling back to defaults when the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save to the default location, creating parent directories.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configured theme; unknown names fall back to the default.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.ui.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.ui.theme, "unknown theme, using default");
            Theme::default()
        })
    }
}
