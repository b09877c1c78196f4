//! Configuration management for afetch.
//!
//! Configuration is read from `~/.config/apod/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.
//! The `NASA_API_KEY` environment variable overrides the configured key.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::fetcher::http_fetcher::DEFAULT_TIMEOUT_SECS;
use crate::fetcher::parallel::DEFAULT_WORKERS;
use crate::query::DEMO_API_KEY;

pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// api.nasa.gov key; `DEMO_KEY` works with a low rate limit.
    pub api_key: String,
    /// Download the HD variant of images when one exists.
    pub prefer_hd: bool,
    /// Request video thumbnails.
    pub thumbs: bool,
    /// Concurrent image downloads.
    pub workers: usize,
    /// Where downloaded images go; the current directory when unset.
    pub download_dir: Option<PathBuf>,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            prefer_hd: false,
            thumbs: false,
            workers: DEFAULT_WORKERS,
            download_dir: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the default path, then apply environment overrides.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Load configuration from `path`, creating it with defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// A non-empty key from the environment wins over the file.
    pub fn apply_env(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
    }

    /// Get the default config file path: `~/.config/apod/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("apod").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# afetch configuration

# Personal key from https://api.nasa.gov. DEMO_KEY is rate limited.
# The NASA_API_KEY environment variable overrides this value.
api_key = "DEMO_KEY"

# Download the HD image when the entry has one
prefer_hd = false

# Ask for thumbnail URLs of video entries
thumbs = false

# Concurrent image downloads for date ranges and random picks
workers = 4

# Directory for downloaded images (default: current directory)
# download_dir = "/home/me/Pictures/apod"

# HTTP timeout in seconds
timeout_secs = 30
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
