//! CSV codec for contact records.
//!
//! [`formatter`] turns contacts into lines, [`parser`] turns lines back
//! into contacts.

pub mod formatter;
pub mod parser;

pub use formatter::{encode, escape, header, HEADER};
pub use parser::{decode, ContactLineParser, FileParser, LineParser, FIELD_COUNT};
