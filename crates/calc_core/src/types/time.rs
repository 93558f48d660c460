//! Date type and day count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCount`: Industry-standard day count conventions
//! - Year fraction calculations used by accrual and discounting
//!
//! # Examples
//!
//! ```
//! use calc_core::types::{Date, DayCount};
//!
//! let start = Date::from_ymd(2014, 1, 1).unwrap();
//! let end = Date::from_ymd(2014, 7, 1).unwrap();
//!
//! let yf = DayCount::Act365Fixed.year_fraction(start, end);
//! assert!((yf - 181.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, Months, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing/formatting and the date arithmetic needed by
/// schedule generation and accrual calculations.
///
/// # Examples
///
/// ```
/// use calc_core::types::Date;
///
/// let date = Date::from_ymd(2014, 6, 20).unwrap();
/// assert_eq!(date.year(), 2014);
///
/// let parsed: Date = "2014-06-20".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let later = date.plus_months(3);
/// assert_eq!(later, Date::from_ymd(2014, 9, 20).unwrap());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month and day components.
    ///
    /// Returns `DateError::InvalidDate` when the components do not form a
    /// valid calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Creates a Date from a chrono `NaiveDate`.
    #[inline]
    pub fn from_naive(date: NaiveDate) -> Self {
        Date(date)
    }

    /// Returns the underlying chrono `NaiveDate`.
    #[inline]
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day-of-month component (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns this date shifted by the given number of calendar days.
    ///
    /// # Panics
    ///
    /// Panics if the result falls outside the representable chrono range,
    /// roughly +/- 262,000 years.
    pub fn plus_days(&self, days: i64) -> Self {
        Date(
            self.0
                .checked_add_signed(chrono::Duration::days(days))
                .unwrap_or_else(|| panic!("date out of range: {} + {} days", self.0, days)),
        )
    }

    /// Returns this date shifted by the given number of months.
    ///
    /// The day-of-month is clamped to the end of the target month, so
    /// 2014-01-31 plus one month is 2014-02-28.
    ///
    /// # Panics
    ///
    /// Panics if the result falls outside the representable chrono range.
    pub fn plus_months(&self, months: i32) -> Self {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months as u32))
        } else {
            self.0.checked_sub_months(Months::new((-months) as u32))
        };
        Date(shifted.unwrap_or_else(|| {
            panic!("date out of range: {} + {} months", self.0, months)
        }))
    }

    /// Returns this date shifted by the given number of years.
    ///
    /// # Panics
    ///
    /// Panics if the result falls outside the representable chrono range.
    #[inline]
    pub fn plus_years(&self, years: i32) -> Self {
        self.plus_months(years * 12)
    }

    /// Returns the number of calendar days from this date to `other`.
    ///
    /// Positive when `other` is later than this date.
    #[inline]
    pub fn days_until(&self, other: Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Number of calendar days between two dates (`self - other`).
    fn sub(self, other: Date) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| DateError::ParseError {
                input: s.to_string(),
            })
    }
}

/// Day count convention for accrual year fractions.
///
/// The convention determines how the fraction of a year between two dates is
/// measured for interest accrual and discounting.
///
/// # Examples
///
/// ```
/// use calc_core::types::{Date, DayCount};
///
/// let start = Date::from_ymd(2014, 6, 20).unwrap();
/// let end = Date::from_ymd(2014, 12, 20).unwrap();
///
/// let yf = DayCount::Thirty360.year_fraction(start, end);
/// assert!((yf - 0.5).abs() < 1e-12);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCount {
    /// Actual days divided by 360.
    ///
    /// Standard for money market instruments and CDS fee legs.
    Act360,
    /// Actual days divided by a fixed 365.
    Act365Fixed,
    /// 30/360 US bond basis: months count as 30 days, years as 360.
    Thirty360,
}

impl DayCount {
    /// Returns the market name of this convention.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act360 => "ACT/360",
            DayCount::Act365Fixed => "ACT/365F",
            DayCount::Thirty360 => "30/360",
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Returns a negative fraction when `end` is before `start`, mirroring
    /// the sign of the day count.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCount::Act360 => (end - start) as f64 / 360.0,
            DayCount::Act365Fixed => (end - start) as f64 / 365.0,
            DayCount::Thirty360 => {
                let d1 = start.day().min(30);
                let d2 = if d1 == 30 { end.day().min(30) } else { end.day() };
                let days = 360 * (end.year() - start.year()) as i64
                    + 30 * (end.month() as i64 - start.month() as i64)
                    + (d2 as i64 - d1 as i64);
                days as f64 / 360.0
            }
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayCount {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACT/360" => Ok(DayCount::Act360),
            "ACT/365F" | "ACT/365" => Ok(DayCount::Act365Fixed),
            "30/360" => Ok(DayCount::Thirty360),
            _ => Err(DateError::UnknownDayCount {
                input: s.to_string(),
            }),
        }
    }
}
