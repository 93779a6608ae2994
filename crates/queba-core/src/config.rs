//! # Validator Configuration
//!
//! Each validator takes two options: the error message placed in failed
//! results and whether passing values are rewritten to canonical form.
//! [`ValidatorSettings`] groups the options for both validators so a host
//! application can keep them in its own JSON or YAML config.
//!
//! ```yaml
//! book_number:
//!   error_message: "Unknown book"
//! account_number:
//!   format: false
//! ```
//!
//! Unknown keys are rejected. Reading files is left to the caller.

use serde::{Deserialize, Serialize};

use crate::account::AccountNumberValidator;
use crate::book::BookNumberValidator;
use crate::error::QuebaError;

fn default_format() -> bool {
    true
}

/// A failed result must carry a non-empty message.
pub(crate) fn check_error_message(message: &str) -> Result<(), QuebaError> {
    if message.trim().is_empty() {
        return Err(QuebaError::Config(
            "error_message must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// Options for a single validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Message for failed results. `None` uses the validator's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Rewrite passing values to canonical form.
    #[serde(default = "default_format")]
    pub format: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            error_message: None,
            format: default_format(),
        }
    }
}

impl ValidatorConfig {
    /// Reject configurations that would produce unusable results.
    ///
    /// # Errors
    ///
    /// Returns [`QuebaError::Config`] if `error_message` is present but
    /// blank; a failed result must carry a non-empty message.
    pub fn check(&self) -> Result<(), QuebaError> {
        match &self.error_message {
            Some(message) => check_error_message(message),
            None => Ok(()),
        }
    }

    /// The configured message, or `default` when none is set.
    pub(crate) fn message_or(&self, default: &str) -> String {
        self.error_message
            .clone()
            .unwrap_or_else(|| default.to_string())
    }
}

/// Options for both validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorSettings {
    /// Book number validator options.
    #[serde(default)]
    pub book_number: ValidatorConfig,
    /// Account number validator options.
    #[serde(default)]
    pub account_number: ValidatorConfig,
}

impl ValidatorSettings {
    /// Parse settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`QuebaError::Json`] on malformed input or unknown keys, and
    /// [`QuebaError::Config`] if either section fails [`ValidatorConfig::check`].
    pub fn from_json_str(s: &str) -> Result<Self, QuebaError> {
        let settings: Self = serde_json::from_str(s)?;
        settings.check()?;
        Ok(settings)
    }

    /// Parse settings from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`QuebaError::Yaml`] on malformed input or unknown keys, and
    /// [`QuebaError::Config`] if either section fails [`ValidatorConfig::check`].
    pub fn from_yaml_str(s: &str) -> Result<Self, QuebaError> {
        let settings: Self = serde_yaml::from_str(s)?;
        settings.check()?;
        Ok(settings)
    }

    /// Check both sections.
    pub fn check(&self) -> Result<(), QuebaError> {
        self.book_number.check()?;
        self.account_number.check()
    }

    /// Build the configured book number validator.
    pub fn book_validator(&self) -> Result<BookNumberValidator, QuebaError> {
        BookNumberValidator::from_config(&self.book_number)
    }

    /// Build the configured account number validator.
    pub fn account_validator(&self) -> Result<AccountNumberValidator, QuebaError> {
        AccountNumberValidator::from_config(&self.account_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Validator;

    #[test]
    fn default_config_formats() {
        let config = ValidatorConfig::default();
        assert!(config.format);
        assert!(config.error_message.is_none());
        assert!(config.check().is_ok());
    }

    #[test]
    fn blank_message_is_rejected() {
        let config = ValidatorConfig {
            error_message: Some("   ".to_string()),
            format: true,
        };
        assert!(matches!(config.check(), Err(QuebaError::Config(_))));
        assert!(BookNumberValidator::from_config(&config).is_err());
        assert!(AccountNumberValidator::from_config(&config).is_err());
    }

    #[test]
    fn empty_json_uses_defaults() {
        let settings = ValidatorSettings::from_json_str("{}").unwrap();
        assert_eq!(settings, ValidatorSettings::default());
    }

    #[test]
    fn json_overrides_one_section() {
        let settings = ValidatorSettings::from_json_str(
            r#"{"account_number": {"error_message": "Unknown account", "format": false}}"#,
        )
        .unwrap();
        assert!(settings.book_number.format);
        let v = settings.account_validator().unwrap();
        assert!(!v.formats());
        assert_eq!(v.error_message(), "Unknown account");
    }

    #[test]
    fn json_unknown_key_is_rejected() {
        let err = ValidatorSettings::from_json_str(r#"{"book_number": {"strict": true}}"#)
            .unwrap_err();
        assert!(matches!(err, QuebaError::Json(_)));
    }

    #[test]
    fn yaml_settings() {
        let settings = ValidatorSettings::from_yaml_str(
            "book_number:\n  error_message: Unknown book\naccount_number:\n  format: false\n",
        )
        .unwrap();
        let book = settings.book_validator().unwrap();
        assert_eq!(book.check("310601").error(), Some("Unknown book"));
        let account = settings.account_validator().unwrap();
        assert_eq!(account.check("3206015726").value(), Some("3206015726"));
    }

    #[test]
    fn yaml_blank_message_is_config_error() {
        let err = ValidatorSettings::from_yaml_str("book_number:\n  error_message: \"\"\n")
            .unwrap_err();
        assert!(matches!(err, QuebaError::Config(_)));
    }

    #[test]
    fn config_serializes_without_absent_message() {
        let json = serde_json::to_string(&ValidatorConfig::default()).unwrap();
        assert_eq!(json, r#"{"format":true}"#);
    }
}
