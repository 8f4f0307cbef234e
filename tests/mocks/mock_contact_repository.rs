use address_book::error::{StorageError, StorageResult};
use address_book::models::Contact;
use address_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data, made to fail on demand, and tracks
/// method calls for verification. Clones share state, so a test can keep
/// one handle after boxing another into an `AddressBook`.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_with: Arc<Mutex<Option<io::ErrorKind>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a repository that already holds `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        *repo.contacts.lock().unwrap() = contacts;
        repo
    }

    /// Make every subsequent load and save fail with `kind`.
    pub fn fail_with(&self, kind: io::ErrorKind) {
        *self.fail_with.lock().unwrap() = Some(kind);
    }

    /// Snapshot of what has been saved.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_failure(&self) -> StorageResult<()> {
        match *self.fail_with.lock().unwrap() {
            Some(kind) => Err(StorageError::io(
                "mock://address_book.csv",
                io::Error::new(kind, "injected failure"),
            )),
            None => Ok(()),
        }
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> StorageResult<Vec<Contact>> {
        self.track_call("load");
        self.check_failure()?;
        Ok(self.stored())
    }

    fn save(&self, contacts: &[Contact]) -> StorageResult<()> {
        self.track_call("save");
        self.check_failure()?;
        *self.contacts.lock().unwrap() = contacts.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "mock://address_book.csv".to_string()
    }
}
