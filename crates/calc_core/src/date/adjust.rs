//! Business-day conventions and date adjustments.

use std::fmt;

use super::calendar::HolidayCalendar;
use crate::types::Date;

/// Convention for moving a date that falls on a non-business day.
///
/// # Examples
///
/// ```
/// use calc_core::date::{BusinessDayConvention, HolidayCalendar};
/// use calc_core::types::Date;
///
/// // 2014-06-21 is a Saturday
/// let sat = Date::from_ymd(2014, 6, 21).unwrap();
/// let cal = HolidayCalendar::SatSun;
///
/// let adjusted = BusinessDayConvention::Following.adjust(sat, &cal);
/// assert_eq!(adjusted, Date::from_ymd(2014, 6, 23).unwrap());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Leave the date unchanged even if it is a holiday.
    NoAdjust,
    /// Move forward to the next business day.
    Following,
    /// Move forward unless that crosses a month end, then move backward.
    ModifiedFollowing,
    /// Move backward to the previous business day.
    Preceding,
}

impl BusinessDayConvention {
    /// Adjusts the date according to this convention and calendar.
    ///
    /// Business days are returned unchanged under every convention.
    pub fn adjust(&self, date: Date, calendar: &HolidayCalendar) -> Date {
        if calendar.is_business_day(date) {
            return date;
        }
        match self {
            BusinessDayConvention::NoAdjust => date,
            BusinessDayConvention::Following => calendar.next(date),
            BusinessDayConvention::ModifiedFollowing => {
                let next = calendar.next(date);
                if next.month() == date.month() {
                    next
                } else {
                    calendar.previous(date)
                }
            }
            BusinessDayConvention::Preceding => calendar.previous(date),
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BusinessDayConvention::NoAdjust => "NoAdjust",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::Preceding => "Preceding",
        };
        f.write_str(s)
    }
}

/// A business-day convention paired with the calendar it adjusts against.
///
/// This is the unit that conventions and schedules carry: the calendar and
/// convention are substituted as values, never subclassed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusinessDayAdjustment {
    convention: BusinessDayConvention,
    calendar: HolidayCalendar,
}

impl BusinessDayAdjustment {
    /// Creates an adjustment from a convention and calendar.
    pub fn of(convention: BusinessDayConvention, calendar: HolidayCalendar) -> Self {
        Self {
            convention,
            calendar,
        }
    }

    /// An adjustment that leaves every date unchanged.
    pub fn none() -> Self {
        Self {
            convention: BusinessDayConvention::NoAdjust,
            calendar: HolidayCalendar::NoHolidays,
        }
    }

    /// Returns the convention.
    #[inline]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Returns the calendar.
    #[inline]
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Adjusts the date.
    #[inline]
    pub fn adjust(&self, date: Date) -> Date {
        self.convention.adjust(date, &self.calendar)
    }
}

/// A day offset applied before an optional business-day adjustment.
///
/// Used for settlement offsets such as "spot is two business days after the
/// as-of date" or "fee payments start one calendar day after trade date".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaysAdjustment {
    days: i32,
    business_days: bool,
    calendar: HolidayCalendar,
    adjustment: BusinessDayAdjustment,
}

impl DaysAdjustment {
    /// Offset by calendar days with no further adjustment.
    pub fn of_calendar_days(days: i32) -> Self {
        Self {
            days,
            business_days: false,
            calendar: HolidayCalendar::NoHolidays,
            adjustment: BusinessDayAdjustment::none(),
        }
    }

    /// Offset by calendar days, then apply a business-day adjustment.
    pub fn of_calendar_days_adjusted(days: i32, adjustment: BusinessDayAdjustment) -> Self {
        Self {
            days,
            business_days: false,
            calendar: HolidayCalendar::NoHolidays,
            adjustment,
        }
    }

    /// Offset by business days of the given calendar.
    pub fn of_business_days(days: i32, calendar: HolidayCalendar) -> Self {
        Self {
            days,
            business_days: true,
            calendar,
            adjustment: BusinessDayAdjustment::none(),
        }
    }

    /// Returns the number of days in the offset.
    #[inline]
    pub fn days(&self) -> i32 {
        self.days
    }

    /// Applies the offset and adjustment to a date.
    pub fn adjusted(&self, date: Date) -> Date {
        let shifted = if self.business_days {
            self.calendar.shift(date, self.days)
        } else {
            date.plus_days(self.days as i64)
        };
        self.adjustment.adjust(shifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_following_moves_forward() {
        let adj = BusinessDayAdjustment::of(
            BusinessDayConvention::Following,
            HolidayCalendar::SatSun,
        );
        assert_eq!(adj.adjust(date(2014, 6, 21)), date(2014, 6, 23));
        // business day unchanged
        assert_eq!(adj.adjust(date(2014, 6, 23)), date(2014, 6, 23));
    }

    #[test]
    fn test_preceding_moves_backward() {
        let adj = BusinessDayAdjustment::of(
            BusinessDayConvention::Preceding,
            HolidayCalendar::SatSun,
        );
        assert_eq!(adj.adjust(date(2014, 6, 22)), date(2014, 6, 20));
    }

    #[test]
    fn test_modified_following_stays_in_month() {
        // 2014-08-31 is a Sunday; following would be 2014-09-01
        let adj = BusinessDayAdjustment::of(
            BusinessDayConvention::ModifiedFollowing,
            HolidayCalendar::SatSun,
        );
        assert_eq!(adj.adjust(date(2014, 8, 31)), date(2014, 8, 29));
        // mid-month weekend still rolls forward
        assert_eq!(adj.adjust(date(2014, 8, 17)), date(2014, 8, 18));
    }

    #[test]
    fn test_no_adjust_keeps_holiday() {
        let adj = BusinessDayAdjustment::of(
            BusinessDayConvention::NoAdjust,
            HolidayCalendar::SatSun,
        );
        assert_eq!(adj.adjust(date(2014, 6, 21)), date(2014, 6, 21));
    }

    #[test]
    fn test_days_adjustment_business_days() {
        let adj = DaysAdjustment::of_business_days(2, HolidayCalendar::SatSun);
        // Friday + 2 business days = Tuesday
        assert_eq!(adj.adjusted(date(2014, 6, 20)), date(2014, 6, 24));
    }

    #[test]
    fn test_days_adjustment_calendar_days_adjusted() {
        let adj = DaysAdjustment::of_calendar_days_adjusted(
            1,
            BusinessDayAdjustment::of(BusinessDayConvention::Following, HolidayCalendar::SatSun),
        );
        // Friday + 1 calendar day = Saturday, adjusted to Monday
        assert_eq!(adj.adjusted(date(2014, 6, 20)), date(2014, 6, 23));
    }

    proptest! {
        #[test]
        fn prop_adjusted_date_is_business_day(days in 0i64..3650) {
            let cal = HolidayCalendar::Usny;
            let adj = BusinessDayAdjustment::of(BusinessDayConvention::Following, cal.clone());
            let d = date(2014, 1, 1).plus_days(days);
            let adjusted = adj.adjust(d);
            prop_assert!(cal.is_business_day(adjusted));
            prop_assert!(adjusted >= d);
        }

        #[test]
        fn prop_modified_following_same_month(days in 0i64..3650) {
            let cal = HolidayCalendar::Usny;
            let adj = BusinessDayAdjustment::of(
                BusinessDayConvention::ModifiedFollowing, cal.clone());
            let d = date(2014, 1, 1).plus_days(days);
            let adjusted = adj.adjust(d);
            prop_assert!(cal.is_business_day(adjusted));
            prop_assert_eq!(adjusted.month(), d.month());
        }
    }
}
