//! The address book service.
//!
//! [`AddressBook`] owns the in-memory working set and is the only thing that
//! mutates it. Searches go through [`crate::matching`]; persistence goes
//! through a [`ContactRepository`].

use crate::domain::{self, IntegrityError};
use crate::error::StorageResult;
use crate::matching::{self, Chooser, SearchField};
use crate::models::Contact;
use crate::repositories::{ContactRepository, CsvFileRepository};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// True for `y` or `yes` in any case, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Outcome of a bulk import.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Number of records appended to the address book
    pub imported: usize,

    /// Records that failed the integrity check, with the reason
    pub rejected: Vec<(Contact, IntegrityError)>,
}

/// The in-memory address book and its backing store.
pub struct AddressBook {
    contacts: Vec<Contact>,
    repository: Box<dyn ContactRepository>,
    /// Set when the backing store exists but could not be read
    load_failed: bool,
}

impl AddressBook {
    /// Create an empty address book that persists through `repository`.
    pub fn new(repository: Box<dyn ContactRepository>) -> Self {
        Self {
            contacts: Vec::new(),
            repository,
            load_failed: false,
        }
    }

    /// All contacts, in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// True when the last reload hit an unreadable backing store.
    ///
    /// While set, [`persist`](Self::persist) refuses to write.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Append a contact. The caller is responsible for validating it.
    pub fn add(&mut self, contact: Contact) {
        info!("Added contact {}", contact.compact());
        self.contacts.push(contact);
    }

    /// Append a contact after it passes the integrity check.
    ///
    /// # Errors
    ///
    /// Returns the first failing field; the working set is left unchanged.
    pub fn add_checked(&mut self, contact: Contact) -> Result<(), IntegrityError> {
        domain::validate_contact(&contact)?;
        self.add(contact);
        Ok(())
    }

    /// Search, select, confirm and remove a single contact.
    ///
    /// `confirm` receives the chooser back along with the selected contact
    /// and returns the raw answer; only `y`/`yes` removes the record.
    /// Returns the removed contact, or `None` if nothing was selected or
    /// the removal was declined.
    pub fn delete<C, F, S>(
        &mut self,
        field: SearchField,
        value: &str,
        chooser: &mut C,
        confirm: F,
    ) -> Option<Contact>
    where
        C: Chooser + ?Sized,
        F: FnOnce(&mut C, &Contact) -> S,
        S: AsRef<str>,
    {
        let position = self.select(field, value, chooser)?;

        let answer = confirm(chooser, &self.contacts[position]);
        if !is_affirmative(answer.as_ref()) {
            debug!("Deletion of {} declined", self.contacts[position].compact());
            return None;
        }

        let removed = self.contacts.remove(position);
        info!("Deleted contact {}", removed.compact());
        Some(removed)
    }

    /// Search, select and edit a single contact in place.
    ///
    /// A snapshot is taken before `editor` runs. Returns the snapshot and
    /// the edited record, or `None` if nothing was selected.
    pub fn update<C, E>(
        &mut self,
        field: SearchField,
        value: &str,
        chooser: &mut C,
        editor: E,
    ) -> Option<(Contact, &Contact)>
    where
        C: Chooser + ?Sized,
        E: FnOnce(&mut C, &mut Contact),
    {
        let position = self.select(field, value, chooser)?;

        let snapshot = self.contacts[position].clone();
        editor(chooser, &mut self.contacts[position]);

        let updated = &self.contacts[position];
        let changed = updated.changed_fields(&snapshot);
        if changed.is_empty() {
            info!("Contact {} left unchanged", updated.compact());
        }
        for field in changed {
            info!(
                "Updated {} of {}: {:?} -> {:?}",
                field,
                snapshot.compact(),
                snapshot.field(field),
                updated.field(field)
            );
        }
        Some((snapshot, updated))
    }

    /// Write every contact to the backing store.
    ///
    /// Failures are logged, not raised; returns whether the write succeeded.
    /// Nothing is written after a failed reload, so an unreadable file is
    /// never replaced by an empty one.
    pub fn persist(&self) -> bool {
        if self.load_failed {
            warn!(
                "Not saving: {} could not be read and would be overwritten",
                self.repository.location()
            );
            return false;
        }
        match self.repository.save(&self.contacts) {
            Ok(()) => {
                info!(
                    "Saved {} contacts to {}",
                    self.contacts.len(),
                    self.repository.location()
                );
                true
            }
            Err(e) => {
                error!("Error saving contacts: {}", e);
                false
            }
        }
    }

    /// Replace the working set with the contents of the backing store.
    ///
    /// On any read failure the working set becomes empty. A missing file is
    /// a fresh start; any other failure also blocks [`persist`](Self::persist)
    /// until a later reload succeeds. Returns the number of contacts loaded.
    pub fn reload(&mut self) -> usize {
        self.load_failed = false;
        self.contacts = match self.repository.load() {
            Ok(contacts) => contacts,
            Err(e) if e.is_not_found() => {
                info!(
                    "No address book at {}, starting empty",
                    self.repository.location()
                );
                Vec::new()
            }
            Err(e) => {
                error!("Error loading contacts: {}", e);
                self.load_failed = true;
                Vec::new()
            }
        };
        self.contacts.len()
    }

    /// Append the valid records of another CSV file.
    ///
    /// Each decoded record goes through the integrity check; failures are
    /// collected in the report and do not stop the import.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the file cannot be read.
    pub fn import(&mut self, path: impl AsRef<Path>) -> StorageResult<ImportReport> {
        let source = CsvFileRepository::with_path(path.as_ref());
        let candidates = source.load()?;

        let mut report = ImportReport::default();
        for contact in candidates {
            match domain::validate_contact(&contact) {
                Ok(()) => {
                    self.add(contact);
                    report.imported += 1;
                }
                Err(e) => {
                    warn!("Rejected {} during import: {}", contact.compact(), e);
                    report.rejected.push((contact, e));
                }
            }
        }

        info!(
            "Imported {} contacts from {} ({} rejected)",
            report.imported,
            source.location(),
            report.rejected.len()
        );
        Ok(report)
    }

    /// Resolve a search to a position in the working set.
    fn select<C: Chooser + ?Sized>(
        &self,
        field: SearchField,
        value: &str,
        chooser: &mut C,
    ) -> Option<usize> {
        let positions = matching::find_positions(&self.contacts, field, value);
        let matches: Vec<Contact> = positions.iter().map(|&i| self.contacts[i].clone()).collect();

        match matching::select_index(&matches, chooser) {
            Ok(i) => Some(positions[i]),
            Err(e) => {
                debug!("No contact selected for {:?} ~ {:?}: {}", field, value, e);
                None
            }
        }
    }
}
