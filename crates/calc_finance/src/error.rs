//! Construction-time validation errors.

use thiserror::Error;

/// Errors raised when building trades, products or conventions.
///
/// Validation is fatal and immediate: an invalid value is never
/// constructible, so calculation code only ever sees well-formed inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required builder field was not supplied.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A field value is present but invalid.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        /// The name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A convention name was not found in the registry.
    #[error("Unknown convention '{name}'")]
    UnknownConvention {
        /// The name that was looked up.
        name: String,
    },
}
