//! Foundation error types.

use thiserror::Error;

/// Errors arising from date construction and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The year/month/day combination does not form a valid calendar date.
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year component.
        year: i32,
        /// The month component (1-12).
        month: u32,
        /// The day component (1-31).
        day: u32,
    },

    /// The input string is not an ISO 8601 date.
    #[error("Cannot parse date from '{input}'")]
    ParseError {
        /// The rejected input.
        input: String,
    },

    /// The input string is not a recognised day count name.
    #[error("Unknown day count convention '{input}'")]
    UnknownDayCount {
        /// The rejected input.
        input: String,
    },
}

/// Errors arising from currency parsing and mixed-currency arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The input string is not a recognised ISO 4217 code.
    #[error("Unknown currency code '{code}'")]
    UnknownCurrency {
        /// The rejected input.
        code: String,
    },

    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        left: &'static str,
        /// Currency of the right operand.
        right: &'static str,
    },
}
