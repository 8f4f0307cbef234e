//! Validation and normalization rules for contact fields.
//!
//! Two rule sets live here and are kept separate: [`fields`] gates guided,
//! field-by-field entry, while [`integrity`] checks whole records that
//! arrive by other routes. [`normalize`] produces canonical phone and ZIP
//! forms for display.

pub mod errors;
pub mod fields;
pub mod integrity;
pub mod normalize;

pub use errors::IntegrityError;
pub use fields::StringValidator;
pub use integrity::validate_contact;
pub use normalize::{normalize_phone, normalize_zip};
