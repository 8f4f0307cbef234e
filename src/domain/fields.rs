//! Per-field validation rules for guided contact entry.
//!
//! Each rule is a total `&str -> bool` predicate. The empty string fails
//! every rule. These are the rules the interactive prompts re-ask on.

use once_cell::sync::Lazy;
use regex::Regex;

/// A validation rule for a single field value.
pub type StringValidator = fn(&str) -> bool;

// ASCII classes only. `\d`, `\w` and `\s` are Unicode-aware in the regex crate.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z'\- \t\r\n\x0B\x0C]{1,29}$").unwrap());
static STREET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9 .#,\-]{5,100}$").unwrap());
static CITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z \t\r\n\x0B\x0C]{1,49}$").unwrap());
static STATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]{2,50}$").unwrap());
static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+\.[A-Za-z]{2,}$").unwrap());

/// Letters, apostrophes, hyphens and whitespace; 2-30 chars, leading letter.
pub fn is_valid_first_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Same rule as [`is_valid_first_name`].
pub fn is_valid_last_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Alphanumerics plus space, `.`, `#`, `,` and `-`; 5-100 chars.
pub fn is_valid_street_address(street: &str) -> bool {
    STREET_RE.is_match(street)
}

/// Letters and whitespace; 2-50 chars, leading letter.
pub fn is_valid_city(city: &str) -> bool {
    CITY_RE.is_match(city)
}

/// Letters and spaces; 2-50 chars and not blank.
pub fn is_valid_state(state: &str) -> bool {
    STATE_RE.is_match(state) && !state.trim().is_empty()
}

/// `12345` or `12345-6789`.
pub fn is_valid_zip_code(zip: &str) -> bool {
    ZIP_RE.is_match(zip)
}

/// Exactly ten digits once every non-digit character is dropped.
pub fn is_valid_phone_number(phone: &str) -> bool {
    phone_digits(phone).len() == 10
}

/// `local@domain.tld` with a top-level domain of two or more letters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The ASCII digits of `raw`, in order.
pub(crate) fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
