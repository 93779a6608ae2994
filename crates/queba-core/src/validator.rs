//! # Validator Capability
//!
//! The [`Validator`] trait is the single call surface: one input in, one
//! `(value, error)` pair out. Concrete implementations are
//! [`BookNumberValidator`](crate::BookNumberValidator) and
//! [`AccountNumberValidator`](crate::AccountNumberValidator).
//!
//! ## Concurrency
//!
//! Validators are configured once and never mutated afterwards. The trait
//! requires `Send + Sync`, so one instance can be shared across threads.

use serde::{Deserialize, Serialize};

/// Error message used when a validator is not given a more specific one.
pub const DEFAULT_ERROR_MESSAGE: &str = "validation failed";

/// A stateless check over an optional string value.
pub trait Validator: Send + Sync {
    /// Validate `value`, returning the (possibly reformatted) value and
    /// an optional error message.
    ///
    /// Expected bad input is reported in the result, never by panicking.
    fn validate(&self, value: Option<&str>) -> ValidationResult;

    /// Message placed in the error slot on failure.
    fn error_message(&self) -> &str {
        DEFAULT_ERROR_MESSAGE
    }

    /// Canonical form of an already-validated value. The default leaves
    /// the value unchanged.
    fn format(&self, value: &str) -> String {
        value.to_string()
    }

    /// Shorthand for validating a present value.
    fn check(&self, value: &str) -> ValidationResult {
        self.validate(Some(value))
    }
}

/// Outcome of a single validation call.
///
/// `error` is `None` exactly when validation passed. On failure `value`
/// holds the caller's original input untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    value: Option<String>,
    error: Option<String>,
}

impl ValidationResult {
    /// A passing result carrying `value`.
    pub fn passed(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            error: None,
        }
    }

    /// A failing result carrying the original `value` and `message`.
    pub fn failed(value: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            value: value.map(str::to_string),
            error: Some(message.into()),
        }
    }

    /// True when no error was recorded.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The value slot.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The error slot.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Split into the `(value, error)` pair.
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        (self.value, self.error)
    }
}

impl From<ValidationResult> for (Option<String>, Option<String>) {
    fn from(result: ValidationResult) -> Self {
        result.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Passes when the input is the literal string "true".
    struct TruthValidator {
        message: String,
    }

    impl TruthValidator {
        fn new() -> Self {
            Self {
                message: DEFAULT_ERROR_MESSAGE.to_string(),
            }
        }
    }

    impl Validator for TruthValidator {
        fn validate(&self, value: Option<&str>) -> ValidationResult {
            match value {
                Some("true") => ValidationResult::passed(self.format("true")),
                other => ValidationResult::failed(other, self.error_message()),
            }
        }

        fn error_message(&self) -> &str {
            &self.message
        }
    }

    #[test]
    fn result_splits_into_pair() {
        let (value, error) = TruthValidator::new().check("false").into_parts();
        assert_eq!(value.as_deref(), Some("false"));
        assert_eq!(error.as_deref(), Some("validation failed"));
    }

    #[test]
    fn passing_result_has_no_error() {
        let r = TruthValidator::new().check("true");
        assert!(r.is_valid());
        assert_eq!(r.value(), Some("true"));
        assert_eq!(r.error(), None);
    }

    #[test]
    fn default_message_can_be_overridden() {
        let v = TruthValidator {
            message: "Condition not met".to_string(),
        };
        let r = v.check("nope");
        assert!(!r.is_valid());
        assert_eq!(r.error(), Some("Condition not met"));
    }

    #[test]
    fn failed_absent_value_stays_absent() {
        let r = TruthValidator::new().validate(None);
        assert_eq!(r.value(), None);
        assert!(!r.is_valid());
    }

    #[test]
    fn default_format_is_identity() {
        assert_eq!(TruthValidator::new().format("32-06-01"), "32-06-01");
    }

    #[test]
    fn tuple_conversion() {
        let pair: (Option<String>, Option<String>) = ValidationResult::passed("x").into();
        assert_eq!(pair, (Some("x".to_string()), None));
    }

    #[test]
    fn result_serde_roundtrip() {
        let r = ValidationResult::failed(Some("310601"), "Invalid book number");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"value":"310601","error":"Invalid book number"}"#);
        let back: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
