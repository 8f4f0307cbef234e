//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level integrity failures live in [`crate::domain::IntegrityError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur reading or writing the backing file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file could not be opened, read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the backing file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Errors that can occur while searching for or selecting a contact.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchingError {
    /// Search field is not one of first/last/full/name/email/phone
    #[error("Unknown search field: {0}")]
    UnknownField(String),

    /// No matches found
    #[error("No matching contacts found.")]
    NoMatches,

    /// Selection abandoned before a valid choice was made
    #[error("Selection cancelled")]
    Cancelled,
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with MatchingError
pub type MatchingResult<T> = Result<T, MatchingError>;
