//! Foundation value types: dates, day counts, currencies and amounts.

pub mod amount;
pub mod currency;
pub mod error;
pub mod time;

pub use amount::CurrencyAmount;
pub use currency::Currency;
pub use error::{CurrencyError, DateError};
pub use time::{Date, DayCount};
