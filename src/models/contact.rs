//! Contact model representing one entry in the address book.

use crate::domain::{fields, normalize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact with its eight address-book attributes.
///
/// Contacts carry no identity of their own: a record is located by its
/// position in the owning collection, or by matching its content. Field
/// rules are enforced where records enter the system (guided entry, bulk
/// import), not by the struct itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Create a contact from its eight fields, in CSV column order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// "First Last", the form used for full-name search.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Borrow the value of a single field.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Street => &self.street,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::ZipCode => &self.zip_code,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }

    /// Replace the value of a single field.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Street => &mut self.street,
            ContactField::City => &mut self.city,
            ContactField::State => &mut self.state,
            ContactField::ZipCode => &mut self.zip_code,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// Fields whose values differ between `self` and `other`, in column order.
    pub fn changed_fields(&self, other: &Contact) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|&f| self.field(f) != other.field(f))
            .collect()
    }

    /// Single-line label used in selection lists.
    pub fn compact(&self) -> String {
        self.full_name()
    }

    /// Multi-line card for the contact listing.
    ///
    /// Phone and ZIP are shown in canonical form when they are valid;
    /// anything else is printed as stored.
    pub fn card(&self) -> String {
        format!(
            "---------------------------------\n\
             {} {}\n\
             {}\n\
             {}, {} {}\n\
             {}\n\
             {}\n\
             ---------------------------------",
            self.first_name,
            self.last_name,
            self.street,
            self.city,
            self.state,
            normalize::normalize_zip(&self.zip_code),
            normalize::normalize_phone(&self.phone),
            self.email,
        )
    }
}

/// The eight attributes of a [`Contact`], in CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Street,
    City,
    State,
    ZipCode,
    Phone,
    Email,
}

impl ContactField {
    /// Every field, in column order.
    pub const ALL: [ContactField; 8] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Street,
        ContactField::City,
        ContactField::State,
        ContactField::ZipCode,
        ContactField::Phone,
        ContactField::Email,
    ];

    /// Human-readable name used in prompts and error messages.
    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "first name",
            ContactField::LastName => "last name",
            ContactField::Street => "street address",
            ContactField::City => "city",
            ContactField::State => "state",
            ContactField::ZipCode => "ZIP code",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
        }
    }

    /// Name used when guided entry rejects a value ("Invalid city name.").
    pub fn entry_name(self) -> &'static str {
        match self {
            ContactField::FirstName => "first name",
            ContactField::LastName => "last name",
            ContactField::Street => "street address",
            ContactField::City => "city name",
            ContactField::State => "state name",
            ContactField::ZipCode => "zip code",
            ContactField::Phone => "phone number",
            ContactField::Email => "email",
        }
    }

    /// The guided-entry validator for this field.
    pub fn validator(self) -> fields::StringValidator {
        match self {
            ContactField::FirstName => fields::is_valid_first_name,
            ContactField::LastName => fields::is_valid_last_name,
            ContactField::Street => fields::is_valid_street_address,
            ContactField::City => fields::is_valid_city,
            ContactField::State => fields::is_valid_state,
            ContactField::ZipCode => fields::is_valid_zip_code,
            ContactField::Phone => fields::is_valid_phone_number,
            ContactField::Email => fields::is_valid_email,
        }
    }

    /// Check `value` against the guided-entry rule for this field.
    pub fn is_valid(self, value: &str) -> bool {
        (self.validator())(value)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
