use crate::codec::{self, FileParser};
use crate::config::Config;
use crate::error::{StorageError, StorageResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contact repository backed by a single CSV file.
///
/// The file is opened, read or written, and closed within each call.
/// Parent directories are created on demand before writing.
#[derive(Debug, Clone)]
pub struct CsvFileRepository {
    path: PathBuf,
}

impl CsvFileRepository {
    /// Create a repository for the address book file named by `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_path(config.address_book_path())
    }

    /// Create a repository for an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `line` looks like the column header.
    fn is_header(line: &str) -> bool {
        line.to_lowercase().contains("first name")
    }

    fn ensure_parent_directory(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }
        Ok(())
    }
}

impl ContactRepository for CsvFileRepository {
    fn load(&self) -> StorageResult<Vec<Contact>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;

        let mut lines = content.lines().peekable();
        if lines.peek().is_some_and(|first| Self::is_header(first)) {
            lines.next();
        }

        let contacts = FileParser::contacts().parse_lines(lines);
        debug!(
            "Loaded {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> StorageResult<()> {
        self.ensure_parent_directory()?;

        let write = || -> std::io::Result<()> {
            let mut out = BufWriter::new(fs::File::create(&self.path)?);
            writeln!(out, "{}", codec::header())?;
            for contact in contacts {
                writeln!(out, "{}", codec::encode(contact))?;
            }
            out.flush()
        };
        write().map_err(|e| StorageError::io(&self.path, e))?;

        debug!("Saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
