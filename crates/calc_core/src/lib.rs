//! # calc_core: Foundation Layer for the Calc Grid Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! calc_core is the bottom layer of the 4-layer workspace, providing:
//! - Date type and day count conventions (`types::time`)
//! - Currency and money types (`types::currency`, `types::amount`)
//! - Holiday calendars and business-day adjustment (`date`)
//! - Foundation error types (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other calc_* crates, with minimal external
//! dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use calc_core::types::{Currency, Date, DayCount};
//!
//! let start = Date::from_ymd(2014, 6, 20).unwrap();
//! let end = Date::from_ymd(2014, 9, 22).unwrap();
//!
//! // Year fraction under ACT/360
//! let yf = DayCount::Act360.year_fraction(start, end);
//! assert!((yf - 94.0 / 360.0).abs() < 1e-12);
//!
//! // Currency metadata
//! assert_eq!(Currency::USD.code(), "USD");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date`, `Currency`, `DayCount` and the
//!   date-adjustment types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod date;
pub mod types;

pub use date::{BusinessDayAdjustment, BusinessDayConvention, DaysAdjustment, HolidayCalendar};
pub use types::{Currency, CurrencyAmount, Date, DayCount};
