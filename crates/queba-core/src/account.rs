//! # Account Numbers
//!
//! An account number is 10 to 12 digits:
//!
//! | Positions | Meaning |
//! |-----------|---------|
//! | 0..6   | embedded book number (business unit code in 32-38) |
//! | 6..10  | account sequence |
//! | 9      | check digit (last digit of the sequence) |
//! | 10..12 | optional suffix / branch code |
//!
//! The canonical form is `XX/XX/XX/XXXX`, with `-S` appended when a suffix
//! is present.
//!
//! ## Check digit
//!
//! Weighted sum of the first nine digits, weights 1 through 9, mod 10.
//! For `320601572`: 3·1 + 2·2 + 0·3 + 6·4 + 0·5 + 1·6 + 5·7 + 7·8 + 2·9 = 146,
//! so the check digit is 6 and `3206015726` is valid.

use std::fmt;
use std::str::FromStr;

use crate::book::{format_book_number, BookNumber, BOOK_NUMBER_LEN};
use crate::config::{check_error_message, ValidatorConfig};
use crate::digits::{
    business_unit_code, digit_value, is_numeric, is_valid_business_unit, strip_separators,
};
use crate::error::{QuebaError, ValidationError};
use crate::validator::{ValidationResult, Validator};

/// Shortest normalized account number.
pub const ACCOUNT_NUMBER_MIN_LEN: usize = 10;

/// Longest normalized account number (two suffix digits).
pub const ACCOUNT_NUMBER_MAX_LEN: usize = 12;

/// Number of leading digits covered by the check digit.
pub const CHECKED_DIGITS: usize = 9;

/// Error message used by [`AccountNumberValidator`] unless configured otherwise.
pub const DEFAULT_ACCOUNT_ERROR_MESSAGE: &str = "Invalid account number";

/// Expected check digit for `digits`, computed over its first nine digits.
///
/// Returns `None` if `digits` has fewer than nine leading ASCII digits.
pub fn expected_check_digit(digits: &str) -> Option<u8> {
    let head = digits.as_bytes().get(..CHECKED_DIGITS)?;
    if !head.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let sum: u32 = head
        .iter()
        .zip(1u32..)
        .map(|(b, weight)| u32::from(digit_value(*b)) * weight)
        .sum();
    u8::try_from(sum % 10).ok()
}

fn is_account_shaped(digits: &str) -> bool {
    (ACCOUNT_NUMBER_MIN_LEN..=ACCOUNT_NUMBER_MAX_LEN).contains(&digits.len()) && is_numeric(digits)
}

/// Lay out a 10-12 digit string as `XX/XX/XX/XXXX`, appending `-S` for
/// the digits past the tenth.
///
/// Anything that is not 10-12 ASCII digits is returned as-is.
pub fn format_account_number(digits: &str) -> String {
    if !is_account_shaped(digits) {
        return digits.to_string();
    }
    let mut out = format!(
        "{}/{}",
        format_book_number(&digits[..BOOK_NUMBER_LEN]),
        &digits[BOOK_NUMBER_LEN..ACCOUNT_NUMBER_MIN_LEN]
    );
    if digits.len() > ACCOUNT_NUMBER_MIN_LEN {
        out.push('-');
        out.push_str(&digits[ACCOUNT_NUMBER_MIN_LEN..]);
    }
    out
}

/// A validated account number, stored as its normalized digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountNumber(String);

impl_identifier_serde!(AccountNumber);

impl AccountNumber {
    /// Parse an account number from raw input, stripping separators.
    ///
    /// Checks run in order: length, digits only, business unit code of the
    /// embedded book, check digit.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first failed check.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let digits = strip_separators(value);

        let len = digits.chars().count();
        if !(ACCOUNT_NUMBER_MIN_LEN..=ACCOUNT_NUMBER_MAX_LEN).contains(&len) {
            return Err(ValidationError::Length {
                expected: "10-12",
                actual: len,
            });
        }
        if !is_numeric(&digits) {
            return Err(ValidationError::NonNumeric);
        }

        let code = business_unit_code(&digits).ok_or(ValidationError::NonNumeric)?;
        if !is_valid_business_unit(code) {
            return Err(ValidationError::BusinessUnitOutOfRange(code));
        }

        let expected = expected_check_digit(&digits).ok_or(ValidationError::NonNumeric)?;
        let actual = digit_value(digits.as_bytes()[CHECKED_DIGITS]);
        if actual != expected {
            return Err(ValidationError::CheckDigitMismatch { expected, actual });
        }

        Ok(Self(digits))
    }

    /// The normalized digits, suffix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The embedded book number.
    pub fn book_number(&self) -> BookNumber {
        BookNumber::from_checked_digits(&self.0[..BOOK_NUMBER_LEN])
    }

    /// The 4-digit account sequence, check digit included.
    pub fn sequence(&self) -> &str {
        &self.0[BOOK_NUMBER_LEN..ACCOUNT_NUMBER_MIN_LEN]
    }

    /// The check digit.
    pub fn check_digit(&self) -> u8 {
        digit_value(self.0.as_bytes()[CHECKED_DIGITS])
    }

    /// The 1–2 digit suffix, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.0
            .get(ACCOUNT_NUMBER_MIN_LEN..)
            .filter(|s| !s.is_empty())
    }

    /// Canonical `XX/XX/XX/XXXX[-S]` form.
    pub fn formatted(&self) -> String {
        format_account_number(&self.0)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for AccountNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Validates account numbers and, by default, rewrites them to
/// `XX/XX/XX/XXXX[-S]`.
///
/// Every failure (length, non-digit, business unit, check digit) yields
/// the same configured message. The specific reason is only visible in
/// `debug` level traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNumberValidator {
    error_message: String,
    format: bool,
}

impl AccountNumberValidator {
    /// Validator with the default message and formatting enabled.
    pub fn new() -> Self {
        Self {
            error_message: DEFAULT_ACCOUNT_ERROR_MESSAGE.to_string(),
            format: true,
        }
    }

    /// Build from a [`ValidatorConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`QuebaError::Config`] if the configured message is blank.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self, QuebaError> {
        config.check()?;
        Ok(Self {
            error_message: config.message_or(DEFAULT_ACCOUNT_ERROR_MESSAGE),
            format: config.format,
        })
    }

    /// Replace the error message.
    ///
    /// # Errors
    ///
    /// Returns [`QuebaError::Config`] if `message` is blank, the same rule
    /// [`from_config`](Self::from_config) applies.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Result<Self, QuebaError> {
        let message = message.into();
        check_error_message(&message)?;
        self.error_message = message;
        Ok(self)
    }

    /// Enable or disable canonical formatting of passing values.
    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    /// Whether passing values are rewritten to canonical form.
    pub fn formats(&self) -> bool {
        self.format
    }

    fn reject(&self, value: Option<&str>, reason: ValidationError) -> ValidationResult {
        tracing::debug!(validator = "account_number", %reason, "account number rejected");
        ValidationResult::failed(value, &self.error_message)
    }
}

impl Default for AccountNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for AccountNumberValidator {
    fn validate(&self, value: Option<&str>) -> ValidationResult {
        let Some(raw) = value else {
            return self.reject(value, ValidationError::Absent);
        };

        match AccountNumber::new(raw) {
            Ok(account) if self.format => ValidationResult::passed(account.formatted()),
            Ok(_) => ValidationResult::passed(raw),
            Err(reason) => self.reject(value, reason),
        }
    }

    fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Lay out any 10-12 digit value as `XX/XX/XX/XXXX[-S]`, separators
    /// ignored. Neither the business unit nor the check digit is checked
    /// here; anything else is returned unchanged.
    fn format(&self, value: &str) -> String {
        let digits = strip_separators(value);
        if is_account_shaped(&digits) {
            format_account_number(&digits)
        } else {
            value.to_string()
        }
    }
}
