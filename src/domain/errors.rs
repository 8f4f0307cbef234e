//! Record integrity errors.

use crate::models::ContactField;
use std::fmt;

/// A contact field that failed the whole-record integrity check.
///
/// Each variant carries the rejected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    InvalidFirstName(String),
    InvalidLastName(String),
    InvalidStreet(String),
    InvalidCity(String),
    InvalidState(String),
    InvalidZipCode(String),
    InvalidPhone(String),
    InvalidEmail(String),
}

impl IntegrityError {
    /// The field that failed.
    pub fn field(&self) -> ContactField {
        match self {
            Self::InvalidFirstName(_) => ContactField::FirstName,
            Self::InvalidLastName(_) => ContactField::LastName,
            Self::InvalidStreet(_) => ContactField::Street,
            Self::InvalidCity(_) => ContactField::City,
            Self::InvalidState(_) => ContactField::State,
            Self::InvalidZipCode(_) => ContactField::ZipCode,
            Self::InvalidPhone(_) => ContactField::Phone,
            Self::InvalidEmail(_) => ContactField::Email,
        }
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidFirstName(v)
            | Self::InvalidLastName(v)
            | Self::InvalidStreet(v)
            | Self::InvalidCity(v)
            | Self::InvalidState(v)
            | Self::InvalidZipCode(v)
            | Self::InvalidPhone(v)
            | Self::InvalidEmail(v) => v,
        }
    }
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFirstName(_) => write!(f, "Invalid first name."),
            Self::InvalidLastName(_) => write!(f, "Invalid last name."),
            Self::InvalidStreet(_) => write!(f, "Invalid street address."),
            Self::InvalidCity(_) => write!(f, "Invalid city name."),
            Self::InvalidState(_) => write!(f, "Invalid state name."),
            Self::InvalidZipCode(_) => write!(f, "Invalid ZIP code. Use 12345 or 12345-6789."),
            Self::InvalidPhone(_) => write!(f, "Phone must contain exactly 10 digits."),
            Self::InvalidEmail(_) => write!(f, "Invalid email format."),
        }
    }
}

impl std::error::Error for IntegrityError {}
