//! CSV encoding of contacts.

use crate::models::Contact;

/// Column header written as the first line of the backing file.
pub const HEADER: &str = "First Name,Last Name,Street,City,State,Zip,Phone,Email";

/// The header row for the CSV file.
pub fn header() -> &'static str {
    HEADER
}

/// Encode a contact as one CSV line, fields in column order.
///
/// Accepts `&Contact` or `Option<&Contact>`; `None` encodes to an empty string.
pub fn encode<'a>(contact: impl Into<Option<&'a Contact>>) -> String {
    let Some(c) = contact.into() else {
        return String::new();
    };

    [
        &c.first_name,
        &c.last_name,
        &c.street,
        &c.city,
        &c.state,
        &c.zip_code,
        &c.phone,
        &c.email,
    ]
    .iter()
    .map(|value| escape(value))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a field containing a comma or double quote, doubling inner quotes.
pub fn escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
