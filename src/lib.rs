//! Address Book - a personal contact directory backed by a flat CSV file.
//!
//! Records are validated on entry, kept in an ordered in-memory list, and
//! written to a comma-delimited file. Contacts are found by case-insensitive
//! partial match on a chosen field and, when several match, picked by number.
//!
//! # Architecture
//!
//! - **models**: The `Contact` record and its fields
//! - **domain**: Field rules, the whole-record integrity gate, and normalization
//! - **codec**: CSV header, line encoding and line parsing
//! - **matching**: Field-scoped search and ordinal selection
//! - **repositories**: Persistence of the full contact list
//! - **services**: The `AddressBook` working set (add, delete, update, persist, reload, import)
//! - **console**: The interactive menu front end
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod codec;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::IntegrityError;
pub use error::{ConfigError, MatchingError, StorageError};
pub use matching::{find_matches, select_from_list, Chooser, SearchField};
pub use models::{Contact, ContactField};
pub use repositories::{ContactRepository, CsvFileRepository};
pub use services::{AddressBook, ImportReport};
