//! Schedule generation error types.

use calc_core::types::Date;
use thiserror::Error;

/// Errors that can occur during schedule generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Start date must be before end date.
    #[error("Start date {start} must be before end date {end}")]
    InvalidDateRange {
        /// The start date.
        start: Date,
        /// The end date.
        end: Date,
    },

    /// Missing required field in the schedule builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The date range is not an exact multiple of the frequency and no stub
    /// convention allows truncation.
    #[error("Date range {start} to {end} does not divide evenly by {frequency} and no stub is allowed")]
    UnevenPeriods {
        /// The start date.
        start: Date,
        /// The end date.
        end: Date,
        /// The payment frequency.
        frequency: String,
    },
}
