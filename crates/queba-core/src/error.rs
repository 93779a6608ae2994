//! # Error Hierarchy
//!
//! Structured error types for queba-core, built with `thiserror`.
//!
//! Two layers, kept apart on purpose:
//!
//! - [`ValidationError`] is the *reason* an identifier was rejected. The
//!   newtype constructors return it. The validators collapse every variant
//!   into the single configured message, so callers of
//!   [`Validator::validate`](crate::Validator::validate) only ever see
//!   pass/fail plus text.
//! - [`QuebaError`] is for exceptional failures that are not a verdict on
//!   user input: bad configuration, unparseable settings documents.

use thiserror::Error;

/// Top-level error type for queba-core.
#[derive(Error, Debug)]
pub enum QuebaError {
    /// Validator configuration misuse.
    #[error("configuration error: {0}")]
    Config(String),

    /// Identifier rejected by a newtype constructor. Lets callers use `?`
    /// on [`BookNumber::new`](crate::BookNumber::new) and
    /// [`AccountNumber::new`](crate::AccountNumber::new) inside functions
    /// returning `QuebaError`; the validators themselves never produce it.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON settings document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML settings document could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Why an identifier was rejected.
///
/// Messages never echo the raw input; account numbers are not something
/// to leak into logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No value was supplied.
    #[error("value is absent")]
    Absent,

    /// Wrong number of digits once separators are stripped.
    #[error("expected {expected} digits after removing separators, found {actual}")]
    Length {
        /// Human-readable accepted length, e.g. `"6"` or `"10-12"`.
        expected: &'static str,
        /// Length of the normalized string.
        actual: usize,
    },

    /// Something other than ASCII digits survived normalization.
    #[error("contains characters other than digits and separators")]
    NonNumeric,

    /// Business unit code outside the allowed range.
    #[error("business unit code {0} is outside 32-38")]
    BusinessUnitOutOfRange(u8),

    /// Account check digit does not match the weighted sum.
    #[error("check digit {actual} does not match expected {expected}")]
    CheckDigitMismatch {
        /// Digit computed from the first nine digits.
        expected: u8,
        /// Digit found at position 10.
        actual: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queba_error_config_display() {
        let err = QuebaError::Config("error message must not be empty".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn queba_error_wraps_validation_error() {
        let err: QuebaError = ValidationError::BusinessUnitOutOfRange(31).into();
        assert!(matches!(err, QuebaError::Validation(_)));
        assert!(format!("{err}").contains("31"));
    }

    fn parse_both(book: &str, account: &str) -> Result<String, QuebaError> {
        let book = crate::BookNumber::new(book)?;
        let account = crate::AccountNumber::new(account)?;
        Ok(format!("{book} {account}"))
    }

    #[test]
    fn question_mark_lifts_constructor_errors() {
        assert_eq!(
            parse_both("320601", "3206015726").unwrap(),
            "32/06/01 32/06/01/5726"
        );
        let err = parse_both("320601", "3206015727").unwrap_err();
        assert!(matches!(
            err,
            QuebaError::Validation(ValidationError::CheckDigitMismatch {
                expected: 6,
                actual: 7
            })
        ));
    }

    #[test]
    fn queba_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: QuebaError = json_err.into();
        assert!(format!("{err}").contains("JSON error"));
    }

    #[test]
    fn length_error_display() {
        let err = ValidationError::Length {
            expected: "10-12",
            actual: 13,
        };
        let msg = format!("{err}");
        assert!(msg.contains("10-12"));
        assert!(msg.contains("13"));
    }

    #[test]
    fn check_digit_error_display() {
        let err = ValidationError::CheckDigitMismatch {
            expected: 6,
            actual: 7,
        };
        assert_eq!(
            format!("{err}"),
            "check digit 7 does not match expected 6"
        );
    }

    #[test]
    fn validation_error_is_comparable() {
        assert_eq!(ValidationError::NonNumeric, ValidationError::NonNumeric);
        assert_ne!(
            ValidationError::BusinessUnitOutOfRange(31),
            ValidationError::BusinessUnitOutOfRange(39)
        );
    }
}
