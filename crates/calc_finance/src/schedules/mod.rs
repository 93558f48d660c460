//! Periodic schedule generation.
//!
//! A [`PeriodicSchedule`] describes a regular series of accrual periods
//! between a start and end date. Building it rolls unadjusted boundary
//! dates by the payment frequency, resolves any stub, and applies a
//! business-day adjustment, producing immutable [`SchedulePeriod`] values.

pub mod error;
pub mod frequency;
pub mod period;
pub mod schedule;

pub use error::ScheduleError;
pub use frequency::{Frequency, StubConvention};
pub use period::SchedulePeriod;
pub use schedule::PeriodicSchedule;
