use crate::error::StorageResult;
use crate::models::Contact;

/// Repository for the persisted contact list.
///
/// Provides abstraction over where the address book lives, enabling
/// different implementations (CSV file, in-memory mock). Every call reads
/// or writes the whole list.
pub trait ContactRepository {
    /// Read every stored contact, in stored order.
    fn load(&self) -> StorageResult<Vec<Contact>>;

    /// Replace the stored contacts with `contacts`, preserving order.
    fn save(&self, contacts: &[Contact]) -> StorageResult<()>;

    /// Human-readable location, for log messages.
    fn location(&self) -> String;
}
