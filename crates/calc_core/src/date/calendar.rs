//! Holiday calendars.
//!
//! Calendars are small deterministic rule sets: weekends plus a handful of
//! fixed-date holidays per market. They exist to make business-day
//! adjustment and spot-date derivation reproducible, not to be a complete
//! holiday dataset.

use chrono::Weekday;
use std::fmt;

use crate::types::Date;

/// A holiday calendar identifying business days for a market.
///
/// Two calendars can be combined into a union calendar where a day is a
/// holiday if either input treats it as one, matching the market practice of
/// adjusting cross-border trades against both centres.
///
/// # Examples
///
/// ```
/// use calc_core::date::HolidayCalendar;
/// use calc_core::types::Date;
///
/// let cal = HolidayCalendar::Usny.combine_with(HolidayCalendar::Gblo);
///
/// // Boxing Day is a GBLO holiday, so the union treats it as one too
/// let boxing_day = Date::from_ymd(2014, 12, 26).unwrap();
/// assert!(!cal.is_business_day(boxing_day));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayCalendar {
    /// Every day is a business day, including weekends.
    NoHolidays,
    /// Saturdays and Sundays only.
    SatSun,
    /// New York: weekends, New Year's Day, Independence Day, Christmas Day.
    Usny,
    /// London: weekends, New Year's Day, Christmas Day, Boxing Day.
    Gblo,
    /// Union of two calendars; a holiday in either is a holiday here.
    Combined(Box<HolidayCalendar>, Box<HolidayCalendar>),
}

impl HolidayCalendar {
    /// Combines this calendar with another, taking the union of holidays.
    pub fn combine_with(self, other: HolidayCalendar) -> HolidayCalendar {
        if self == other {
            self
        } else {
            HolidayCalendar::Combined(Box::new(self), Box::new(other))
        }
    }

    /// Returns whether the date is a holiday (including weekends).
    pub fn is_holiday(&self, date: Date) -> bool {
        match self {
            HolidayCalendar::NoHolidays => false,
            HolidayCalendar::SatSun => is_weekend(date),
            HolidayCalendar::Usny => {
                is_weekend(date) || is_fixed_holiday(date, &[(1, 1), (7, 4), (12, 25)])
            }
            HolidayCalendar::Gblo => {
                is_weekend(date) || is_fixed_holiday(date, &[(1, 1), (12, 25), (12, 26)])
            }
            HolidayCalendar::Combined(a, b) => a.is_holiday(date) || b.is_holiday(date),
        }
    }

    /// Returns whether the date is a business day.
    #[inline]
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.is_holiday(date)
    }

    /// Returns the first business day strictly after the date.
    pub fn next(&self, date: Date) -> Date {
        let mut d = date.plus_days(1);
        while self.is_holiday(d) {
            d = d.plus_days(1);
        }
        d
    }

    /// Returns the first business day on or after the date.
    pub fn next_or_same(&self, date: Date) -> Date {
        if self.is_business_day(date) {
            date
        } else {
            self.next(date)
        }
    }

    /// Returns the first business day strictly before the date.
    pub fn previous(&self, date: Date) -> Date {
        let mut d = date.plus_days(-1);
        while self.is_holiday(d) {
            d = d.plus_days(-1);
        }
        d
    }

    /// Returns the first business day on or before the date.
    pub fn previous_or_same(&self, date: Date) -> Date {
        if self.is_business_day(date) {
            date
        } else {
            self.previous(date)
        }
    }

    /// Shifts the date by the given number of business days.
    ///
    /// Zero returns the date unchanged even if it is a holiday; positive
    /// counts move forward, negative backward.
    pub fn shift(&self, date: Date, business_days: i32) -> Date {
        let mut d = date;
        if business_days >= 0 {
            for _ in 0..business_days {
                d = self.next(d);
            }
        } else {
            for _ in 0..(-business_days) {
                d = self.previous(d);
            }
        }
        d
    }
}

impl fmt::Display for HolidayCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayCalendar::NoHolidays => f.write_str("NoHolidays"),
            HolidayCalendar::SatSun => f.write_str("Sat/Sun"),
            HolidayCalendar::Usny => f.write_str("USNY"),
            HolidayCalendar::Gblo => f.write_str("GBLO"),
            HolidayCalendar::Combined(a, b) => write!(f, "{}+{}", a, b),
        }
    }
}

fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn is_fixed_holiday(date: Date, holidays: &[(u32, u32)]) -> bool {
    holidays
        .iter()
        .any(|&(m, d)| date.month() == m && date.day() == d)
}
