//! # Digit Normalization and Shared Rules
//!
//! Rules shared by book numbers and account numbers. Both identifier types
//! call these directly; neither delegates to the other's validator.

use std::ops::RangeInclusive;

/// Characters stripped from raw input before any other check.
pub const SEPARATORS: [char; 3] = ['/', '-', '\\'];

/// Accepted business unit codes (first two digits of a book number).
pub const BUSINESS_UNIT_CODES: RangeInclusive<u8> = 32..=38;

/// Remove every separator character, leaving everything else in place.
pub fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// True when `s` is non-empty and made only of ASCII digits.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Integer value of the first two digits, or `None` if there are fewer
/// than two leading ASCII digits.
pub fn business_unit_code(digits: &str) -> Option<u8> {
    match digits.as_bytes() {
        [a, b, ..] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some((a - b'0') * 10 + (b - b'0'))
        }
        _ => None,
    }
}

/// True when `code` is an accepted business unit code.
pub fn is_valid_business_unit(code: u8) -> bool {
    BUSINESS_UNIT_CODES.contains(&code)
}

/// Numeric value of an ASCII digit byte. Callers check [`is_numeric`] first.
pub(crate) fn digit_value(b: u8) -> u8 {
    b.wrapping_sub(b'0')
}
