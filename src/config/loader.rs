#![warn(clippy::all, clippy::pedantic)]

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::GameConfig;

// Fallback config file path when no platform config directory exists
const CONFIG_FILE_PATH: &str = "config/blockfall.toml";

// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "BLOCKFALL_CONFIG";

/// Loads the configuration from the default location, writing a default file
/// first if none exists.
pub fn load_config_from_file() -> Result<GameConfig, ConfigError> {
    load_config_from(&config_file_path())
}

pub fn load_config_from(config_path: &Path) -> Result<GameConfig, ConfigError> {
    // Create a default config file if it doesn't exist
    if !config_path.exists() {
        info!("No config at {}, writing defaults", config_path.display());
        let default_config = GameConfig::default();
        save_config_to(config_path, &default_config)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(config_path)?;
    let config: GameConfig = toml::from_str(&contents)?;
    config.validate()?;

    debug!("Loaded config from {}: {config:?}", config_path.display());
    Ok(config)
}

pub fn save_config_to(config_path: &Path, config: &GameConfig) -> Result<(), ConfigError> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(config_path, toml_string)?;

    Ok(())
}

/// Where the config file lives: the env var override, then the user's config
/// directory, then a path relative to the working directory.
#[must_use]
pub fn config_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("blockfall").join("config.toml")
    } else {
        PathBuf::from(CONFIG_FILE_PATH)
    }
}

// Custom error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config file I/O failed: {err}"),
            ConfigError::Parse(err) => write!(f, "config file is not valid TOML: {err}"),
            ConfigError::Serialize(err) => write!(f, "could not serialize config: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
