//! # Book Numbers
//!
//! A book number identifies an accounting book. It is six digits, written
//! canonically as `XX/XX/XX`. The first two digits are the business unit
//! code and must lie in 32-38.
//!
//! ## Accepted input
//!
//! Separators (`/`, `-`, `\`) may appear anywhere and are stripped before
//! checking, so `32/06/01`, `32-06-01`, `3206-01` and `320601` are all the
//! same book.

use std::fmt;
use std::str::FromStr;

use crate::config::{check_error_message, ValidatorConfig};
use crate::digits::{business_unit_code, is_numeric, is_valid_business_unit, strip_separators};
use crate::error::{QuebaError, ValidationError};
use crate::validator::{ValidationResult, Validator};

/// Number of digits in a normalized book number.
pub const BOOK_NUMBER_LEN: usize = 6;

/// Error message used by [`BookNumberValidator`] unless configured otherwise.
pub const DEFAULT_BOOK_ERROR_MESSAGE: &str = "Invalid book number";

/// Join a 6-digit string into `XX/XX/XX`.
///
/// Input shorter than four characters, or not splittable on character
/// boundaries, is returned as-is.
pub fn format_book_number(digits: &str) -> String {
    match (digits.get(..2), digits.get(2..4), digits.get(4..)) {
        (Some(a), Some(b), Some(c)) => format!("{a}/{b}/{c}"),
        _ => digits.to_string(),
    }
}

/// A validated book number, stored as its six normalized digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookNumber(String);

impl_identifier_serde!(BookNumber);

impl BookNumber {
    /// Parse a book number from raw input, stripping separators.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first rule the input
    /// breaks: length, non-digit content, or business unit code range.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let digits = strip_separators(value);

        let len = digits.chars().count();
        if len != BOOK_NUMBER_LEN {
            return Err(ValidationError::Length {
                expected: "6",
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

        Ok(Self(digits))
    }

    /// Wrap digits already checked by the account number parser.
    pub(crate) fn from_checked_digits(digits: &str) -> Self {
        Self(digits.to_string())
    }

    /// The six normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The business unit code (first two digits).
    pub fn business_unit_code(&self) -> u8 {
        business_unit_code(&self.0).unwrap_or_default()
    }

    /// Canonical `XX/XX/XX` form.
    pub fn formatted(&self) -> String {
        format_book_number(&self.0)
    }
}

impl fmt::Display for BookNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for BookNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Validates book numbers and, by default, rewrites them to `XX/XX/XX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookNumberValidator {
    error_message: String,
    format: bool,
}

impl BookNumberValidator {
    /// Validator with the default message and formatting enabled.
    pub fn new() -> Self {
        Self {
            error_message: DEFAULT_BOOK_ERROR_MESSAGE.to_string(),
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
            error_message: config.message_or(DEFAULT_BOOK_ERROR_MESSAGE),
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
        tracing::debug!(validator = "book_number", %reason, "book number rejected");
        ValidationResult::failed(value, &self.error_message)
    }
}

impl Default for BookNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for BookNumberValidator {
    fn validate(&self, value: Option<&str>) -> ValidationResult {
        let Some(raw) = value else {
            return self.reject(value, ValidationError::Absent);
        };

        match BookNumber::new(raw) {
            Ok(book) if self.format => ValidationResult::passed(book.formatted()),
            Ok(_) => ValidationResult::passed(raw),
            Err(reason) => self.reject(value, reason),
        }
    }

    fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Split any 6-digit value into `XX/XX/XX`, separators ignored. The
    /// business unit range is not checked here; anything else is returned
    /// unchanged.
    fn format(&self, value: &str) -> String {
        let digits = strip_separators(value);
        if digits.len() == BOOK_NUMBER_LEN && is_numeric(&digits) {
            format_book_number(&digits)
        } else {
            value.to_string()
        }
    }
}
