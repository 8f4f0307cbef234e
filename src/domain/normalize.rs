//! Canonical forms for phone numbers and ZIP codes.
//!
//! Values that fail their field rule come back unchanged. Both functions are
//! idempotent: canonical output still passes the rule and maps to itself.

use super::fields::{is_valid_phone_number, is_valid_zip_code, phone_digits};

/// Format a valid phone number as `(AAA) BBB-CCCC`.
pub fn normalize_phone(raw: &str) -> String {
    if !is_valid_phone_number(raw) {
        return raw.to_string();
    }
    let digits = phone_digits(raw);
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// Format a valid ZIP as `12345` or `12345-6789`.
///
/// Nine bare digits are accepted as an unhyphenated ZIP+4.
pub fn normalize_zip(raw: &str) -> String {
    let bare_zip4 = raw.len() == 9 && raw.bytes().all(|b| b.is_ascii_digit());
    if !is_valid_zip_code(raw) && !bare_zip4 {
        return raw.to_string();
    }
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 9 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}
