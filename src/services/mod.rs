//! Service layer.
//!
//! Business logic that sits between the interactive console and storage.

pub mod address_book;

pub use address_book::{is_affirmative, AddressBook, ImportReport};
