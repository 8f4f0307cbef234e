//! Data models for the address book.
//!
//! This module contains the [`Contact`] record and the [`ContactField`]
//! enum naming its attributes.

pub mod contact;

pub use contact::{Contact, ContactField};
