//! Whole-record integrity gate.
//!
//! Used on paths that bypass guided entry, such as bulk import. The rules
//! here are defined independently of [`super::fields`] and differ from them
//! in places: names may run to 50 characters, streets may contain an
//! apostrophe, and cities may contain apostrophes and hyphens but need not
//! start with a letter. A failure names the first offending field and is
//! meant to stop processing of that record, not to re-prompt.

use super::errors::IntegrityError;
use crate::models::Contact;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z'\- ]{2,50}$").unwrap());
static STREET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 .,'#\-]{5,100}$").unwrap());
static CITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z'\- ]{2,}$").unwrap());
static STATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]{2,50}$").unwrap());
static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+\.[A-Za-z]{2,}$").unwrap());

/// Check every field of `contact`, in column order.
///
/// # Errors
///
/// Returns the [`IntegrityError`] for the first field that fails.
pub fn validate_contact(contact: &Contact) -> Result<(), IntegrityError> {
    if !NAME_RE.is_match(&contact.first_name) {
        return Err(IntegrityError::InvalidFirstName(contact.first_name.clone()));
    }
    if !NAME_RE.is_match(&contact.last_name) {
        return Err(IntegrityError::InvalidLastName(contact.last_name.clone()));
    }
    if !STREET_RE.is_match(&contact.street) {
        return Err(IntegrityError::InvalidStreet(contact.street.clone()));
    }
    if !CITY_RE.is_match(&contact.city) {
        return Err(IntegrityError::InvalidCity(contact.city.clone()));
    }
    if !STATE_RE.is_match(&contact.state) {
        return Err(IntegrityError::InvalidState(contact.state.clone()));
    }
    if !ZIP_RE.is_match(&contact.zip_code) {
        return Err(IntegrityError::InvalidZipCode(contact.zip_code.clone()));
    }
    let digits = contact.phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits != 10 {
        return Err(IntegrityError::InvalidPhone(contact.phone.clone()));
    }
    if !EMAIL_RE.is_match(&contact.email) {
        return Err(IntegrityError::InvalidEmail(contact.email.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields;
    use crate::models::ContactField;

    fn valid_contact() -> Contact {
        Contact::new(
            "James",
            "Stevens",
            "123 Main St",
            "Chicago",
            "Illinois",
            "60601",
            "3125551212",
            "james@example.com",
        )
    }

    #[test]
    fn test_accepts_valid_contact() {
        assert_eq!(validate_contact(&valid_contact()), Ok(()));
    }

    #[test]
    fn test_rejects_invalid_email() {
        let mut c = valid_contact();
        c.email = "bad-email".to_string();
        let err = validate_contact(&c).unwrap_err();
        assert_eq!(err, IntegrityError::InvalidEmail("bad-email".to_string()));
        assert_eq!(err.field(), ContactField::Email);
        assert_eq!(err.to_string(), "Invalid email format.");
    }

    #[test]
    fn test_rejects_invalid_phone() {
        let mut c = valid_contact();
        c.phone = "123".to_string();
        let err = validate_contact(&c).unwrap_err();
        assert_eq!(err.field(), ContactField::Phone);
        assert_eq!(err.value(), "123");
    }

    #[test]
    fn test_reports_first_failing_field() {
        let mut c = valid_contact();
        c.zip_code = "1234".to_string();
        c.email = "nope".to_string();
        assert_eq!(validate_contact(&c).unwrap_err().field(), ContactField::ZipCode);
    }

    #[test]
    fn test_rejects_short_state() {
        let mut c = valid_contact();
        c.state = "I".to_string();
        assert_eq!(validate_contact(&c).unwrap_err().field(), ContactField::State);
    }

    #[test]
    fn test_blank_state_passes_integrity_only() {
        let mut c = valid_contact();
        c.state = "   ".to_string();
        assert!(validate_contact(&c).is_ok());
        assert!(!fields::is_valid_state(&c.state));
    }

    #[test]
    fn test_city_rules_diverge_from_guided_entry() {
        let mut c = valid_contact();
        c.city = "Coeur d'Alene".to_string();
        assert!(validate_contact(&c).is_ok());
        assert!(!fields::is_valid_city(&c.city));

        c.city = "-Dash".to_string();
        assert!(validate_contact(&c).is_ok());
        assert!(!fields::is_valid_city(&c.city));
    }

    #[test]
    fn test_name_rules_diverge_from_guided_entry() {
        let mut c = valid_contact();
        c.first_name = "A".repeat(40);
        assert!(validate_contact(&c).is_ok());
        assert!(!fields::is_valid_first_name(&c.first_name));

        // guided entry allows tabs, the integrity gate does not
        c.first_name = "Mary\tAnn".to_string();
        assert!(fields::is_valid_first_name(&c.first_name));
        assert_eq!(
            validate_contact(&c).unwrap_err(),
            IntegrityError::InvalidFirstName("Mary\tAnn".to_string())
        );
    }

    #[test]
    fn test_street_apostrophe_only_passes_integrity() {
        let mut c = valid_contact();
        c.street = "12 Queen's Rd".to_string();
        assert!(validate_contact(&c).is_ok());
        assert!(!fields::is_valid_street_address(&c.street));
    }
}
