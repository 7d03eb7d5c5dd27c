//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Ukrainian mobile in international form: +380 and nine ASCII digits
static REGISTRATION_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+380[0-9]{9}$").unwrap()
});

/// Check if a phone number is acceptable for registration.
///
/// The match is exact: no whitespace or separators are stripped first.
pub fn is_valid_registration_phone(phone: &str) -> bool {
    REGISTRATION_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for logs (e.g., +38****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        "****".to_string()
    }
}
