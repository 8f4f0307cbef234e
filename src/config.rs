//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! The resolved [`Config`] is passed to the storage layer at construction time; nothing
//! reads the environment after startup.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default base directory when `APP_DATA_DIR` is unset or blank.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default name of the backing file inside the data directory.
pub const DEFAULT_FILE_NAME: &str = "address_book.csv";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory holding the address book file
    pub data_dir: PathBuf,

    /// File name of the address book inside `data_dir` (default: "address_book.csv")
    pub file_name: String,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `APP_DATA_DIR`: Base data directory (default: "data")
    /// - `ADDRESS_BOOK_FILE`: File name under the data directory (default: "address_book.csv")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_dir = match env::var("APP_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(DEFAULT_DATA_DIR),
        };

        let file_name =
            env::var("ADDRESS_BOOK_FILE").unwrap_or_else(|_| DEFAULT_FILE_NAME.to_string());
        Self::validate_file_name(&file_name)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let log_level = Self::parse_log_level(&log_level)?;

        Ok(Config {
            data_dir,
            file_name,
            log_level,
        })
    }

    /// Build a configuration rooted at `data_dir` with default file name and log level.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
            ..Config::default()
        }
    }

    /// Full path of the address book file.
    pub fn address_book_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// The file name must be a bare name, not a path.
    fn validate_file_name(file_name: &str) -> ConfigResult<()> {
        if file_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        if file_name.contains('/') || file_name.contains('\\') {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_FILE".to_string(),
                reason: format!("Must be a file name, not a path, got: {}", file_name),
            });
        }
        Ok(())
    }

    /// Normalize and check a log level name.
    fn parse_log_level(level: &str) -> ConfigResult<String> {
        let level = level.trim().to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Unknown level: {}", level),
            })
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
            log_level: "warn".to_string(),
        }
    }
}
