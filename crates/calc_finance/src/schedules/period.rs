//! Schedule period definition.

use calc_core::types::{Date, DayCount};

/// A single accrual period produced by schedule generation.
///
/// Carries both the adjusted dates used for accrual and discounting and the
/// unadjusted roll dates they were derived from. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulePeriod {
    start: Date,
    end: Date,
    unadjusted_start: Date,
    unadjusted_end: Date,
}

impl SchedulePeriod {
    /// Creates a period from adjusted and unadjusted boundary dates.
    #[inline]
    pub fn new(start: Date, end: Date, unadjusted_start: Date, unadjusted_end: Date) -> Self {
        Self {
            start,
            end,
            unadjusted_start,
            unadjusted_end,
        }
    }

    /// Returns the adjusted accrual start date.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the adjusted accrual end date.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the unadjusted roll start date.
    #[inline]
    pub fn unadjusted_start(&self) -> Date {
        self.unadjusted_start
    }

    /// Returns the unadjusted roll end date.
    #[inline]
    pub fn unadjusted_end(&self) -> Date {
        self.unadjusted_end
    }

    /// Returns the accrual year fraction under the given day count.
    #[inline]
    pub fn year_fraction(&self, day_count: DayCount) -> f64 {
        day_count.year_fraction(self.start, self.end)
    }

    /// Returns whether the date falls within this period, start inclusive,
    /// end exclusive.
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date < self.end
    }
}
