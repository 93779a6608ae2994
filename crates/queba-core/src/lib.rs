//! # queba-core — Identifier Validation for the QuEBA Accounts System
//!
//! This crate validates and canonicalizes the two identifiers the accounts
//! system hands around as free-form strings:
//!
//! - **Book numbers**: 6 digits, written `XX/XX/XX`.
//! - **Account numbers**: 10–12 digits, written `XX/XX/XX/XXXX[-XX]`. The
//!   first six digits are an embedded book number and the tenth digit is a
//!   weighted mod-10 check digit.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`BookNumber`] and
//!    [`AccountNumber`] can only be built through validating constructors.
//!    Holding one means the digits were checked.
//!
//! 2. **Validation outcomes are values.** [`Validator::validate`] never
//!    returns `Err` and never panics on bad input. It returns a
//!    [`ValidationResult`] pair of `(value, error)`, and the caller decides
//!    what to surface or store.
//!
//! 3. **Shared rules are functions, not base classes.** The business unit
//!    range check lives in [`digits`] and both identifier types call it
//!    directly.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O. Configuration is parsed from strings the caller supplies.
//! - Diagnostics go through `tracing`; installing a subscriber is the
//!   caller's business.

/// Implement `Serialize` (canonical display form) and a validating
/// `Deserialize` for identifier newtypes. Deserialization routes through
/// the type's `new()` constructor, so invalid strings are rejected at
/// deserialization time rather than silently accepted.
macro_rules! impl_identifier_serde {
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod account;
pub mod book;
pub mod config;
pub mod digits;
pub mod error;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use account::{
    expected_check_digit, format_account_number, AccountNumber, AccountNumberValidator,
};
pub use book::{format_book_number, BookNumber, BookNumberValidator};
pub use config::{ValidatorConfig, ValidatorSettings};
pub use digits::{business_unit_code, is_valid_business_unit, strip_separators, BUSINESS_UNIT_CODES};
pub use error::{QuebaError, ValidationError};
pub use validator::{ValidationResult, Validator, DEFAULT_ERROR_MESSAGE};
