//! Periodic schedule definition and generation.

use calc_core::date::BusinessDayAdjustment;
use calc_core::types::Date;

use super::error::ScheduleError;
use super::frequency::{Frequency, StubConvention};
use super::period::SchedulePeriod;

/// A regular schedule of accrual periods between two dates.
///
/// The schedule is a pure description: generating its periods rolls
/// unadjusted boundary dates by the frequency, resolves the stub, and
/// applies the business-day adjustment. Two structurally equal schedules
/// always generate structurally equal periods.
///
/// # Examples
///
/// ```
/// use calc_finance::schedules::{Frequency, PeriodicSchedule, StubConvention};
/// use calc_core::types::Date;
///
/// let schedule = PeriodicSchedule::builder()
///     .start(Date::from_ymd(2014, 6, 20).unwrap())
///     .end(Date::from_ymd(2019, 6, 20).unwrap())
///     .frequency(Frequency::Quarterly)
///     .stub_convention(StubConvention::ShortFinal)
///     .build()
///     .unwrap();
///
/// let periods = schedule.periods().unwrap();
/// assert_eq!(periods.len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodicSchedule {
    start: Date,
    end: Date,
    frequency: Frequency,
    stub_convention: StubConvention,
    adjustment: BusinessDayAdjustment,
}

impl PeriodicSchedule {
    /// Returns a builder with no dates set.
    pub fn builder() -> PeriodicScheduleBuilder {
        PeriodicScheduleBuilder::new()
    }

    /// Returns the unadjusted start date.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start
    }

    /// Returns the unadjusted end date.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.end
    }

    /// Returns the payment frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the business-day adjustment applied to boundary dates.
    #[inline]
    pub fn adjustment(&self) -> &BusinessDayAdjustment {
        &self.adjustment
    }

    /// Generates the accrual periods.
    ///
    /// Boundary dates are rolled from a fixed anchor (the start for final
    /// stubs, the end for initial stubs) so repeated month addition cannot
    /// drift across month ends.
    pub fn periods(&self) -> Result<Vec<SchedulePeriod>, ScheduleError> {
        let boundaries = self.unadjusted_boundaries()?;
        let periods = boundaries
            .windows(2)
            .map(|pair| {
                SchedulePeriod::new(
                    self.adjustment.adjust(pair[0]),
                    self.adjustment.adjust(pair[1]),
                    pair[0],
                    pair[1],
                )
            })
            .collect();
        Ok(periods)
    }

    fn unadjusted_boundaries(&self) -> Result<Vec<Date>, ScheduleError> {
        let months = self.frequency.months_per_period();
        match self.stub_convention {
            StubConvention::None | StubConvention::ShortFinal => {
                let mut dates = vec![self.start];
                let mut i = 1;
                loop {
                    let next = self.start.plus_months(i * months);
                    if next >= self.end {
                        break;
                    }
                    dates.push(next);
                    i += 1;
                }
                let fits = self.start.plus_months(i * months) == self.end;
                if self.stub_convention == StubConvention::None && !fits {
                    return Err(ScheduleError::UnevenPeriods {
                        start: self.start,
                        end: self.end,
                        frequency: self.frequency.to_string(),
                    });
                }
                dates.push(self.end);
                Ok(dates)
            }
            StubConvention::ShortInitial => {
                let mut dates = vec![self.end];
                let mut i = 1;
                loop {
                    let prev = self.end.plus_months(-i * months);
                    if prev <= self.start {
                        break;
                    }
                    dates.push(prev);
                    i += 1;
                }
                dates.push(self.start);
                dates.reverse();
                Ok(dates)
            }
        }
    }
}

/// Builder for [`PeriodicSchedule`], validating on `build`.
#[derive(Debug, Clone)]
pub struct PeriodicScheduleBuilder {
    start: Option<Date>,
    end: Option<Date>,
    frequency: Option<Frequency>,
    stub_convention: StubConvention,
    adjustment: BusinessDayAdjustment,
}

impl Default for PeriodicScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodicScheduleBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            frequency: None,
            stub_convention: StubConvention::default(),
            adjustment: BusinessDayAdjustment::none(),
        }
    }

    /// Sets the unadjusted start date.
    pub fn start(mut self, start: Date) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the unadjusted end date.
    pub fn end(mut self, end: Date) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the payment frequency.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the stub convention; defaults to a short final stub.
    pub fn stub_convention(mut self, stub: StubConvention) -> Self {
        self.stub_convention = stub;
        self
    }

    /// Sets the business-day adjustment; defaults to no adjustment.
    pub fn adjustment(mut self, adjustment: BusinessDayAdjustment) -> Self {
        self.adjustment = adjustment;
        self
    }

    /// Validates the inputs and builds the schedule.
    pub fn build(self) -> Result<PeriodicSchedule, ScheduleError> {
        let start = self.start.ok_or(ScheduleError::MissingField { field: "start" })?;
        let end = self.end.ok_or(ScheduleError::MissingField { field: "end" })?;
        let frequency = self
            .frequency
            .ok_or(ScheduleError::MissingField { field: "frequency" })?;
        if start >= end {
            return Err(ScheduleError::InvalidDateRange { start, end });
        }
        Ok(PeriodicSchedule {
            start,
            end,
            frequency,
            stub_convention: self.stub_convention,
            adjustment: self.adjustment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::date::{BusinessDayConvention, HolidayCalendar};
    use calc_core::types::DayCount;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn quarterly(start: Date, end: Date) -> PeriodicSchedule {
        PeriodicSchedule::builder()
            .start(start)
            .end(end)
            .frequency(Frequency::Quarterly)
            .build()
            .unwrap()
    }

    #[test]
    fn test_even_quarterly_schedule() {
        let periods = quarterly(date(2014, 6, 20), date(2015, 6, 20))
            .periods()
            .unwrap();
        assert_eq!(periods.len(), 4);
        assert_eq!(periods[0].start(), date(2014, 6, 20));
        assert_eq!(periods[0].end(), date(2014, 9, 20));
        assert_eq!(periods[3].end(), date(2015, 6, 20));
    }

    #[test]
    fn test_short_final_stub() {
        let schedule = PeriodicSchedule::builder()
            .start(date(2014, 1, 1))
            .end(date(2014, 8, 15))
            .frequency(Frequency::Quarterly)
            .stub_convention(StubConvention::ShortFinal)
            .build()
            .unwrap();
        let periods = schedule.periods().unwrap();
        assert_eq!(periods.len(), 3);
        // final period truncated at the end date
        assert_eq!(periods[2].start(), date(2014, 7, 1));
        assert_eq!(periods[2].end(), date(2014, 8, 15));
    }

    #[test]
    fn test_short_initial_stub() {
        let schedule = PeriodicSchedule::builder()
            .start(date(2014, 1, 1))
            .end(date(2014, 8, 15))
            .frequency(Frequency::Quarterly)
            .stub_convention(StubConvention::ShortInitial)
            .build()
            .unwrap();
        let periods = schedule.periods().unwrap();
        assert_eq!(periods.len(), 3);
        // first period truncated at the start date
        assert_eq!(periods[0].start(), date(2014, 1, 1));
        assert_eq!(periods[0].end(), date(2014, 2, 15));
        assert_eq!(periods[2].end(), date(2014, 8, 15));
    }

    #[test]
    fn test_no_stub_rejects_uneven_range() {
        let schedule = PeriodicSchedule::builder()
            .start(date(2014, 1, 1))
            .end(date(2014, 8, 15))
            .frequency(Frequency::Quarterly)
            .stub_convention(StubConvention::None)
            .build()
            .unwrap();
        assert!(matches!(
            schedule.periods(),
            Err(ScheduleError::UnevenPeriods { .. })
        ));
    }

    #[test]
    fn test_adjustment_applied_to_boundaries() {
        let schedule = PeriodicSchedule::builder()
            .start(date(2014, 3, 20)) // Thursday
            .end(date(2014, 9, 20)) // Saturday
            .frequency(Frequency::Quarterly)
            .adjustment(BusinessDayAdjustment::of(
                BusinessDayConvention::Following,
                HolidayCalendar::SatSun,
            ))
            .build()
            .unwrap();
        let periods = schedule.periods().unwrap();
        assert_eq!(periods.len(), 2);
        // 2014-06-20 is a Friday, unchanged; 2014-09-20 rolls to Monday
        assert_eq!(periods[0].end(), date(2014, 6, 20));
        assert_eq!(periods[1].end(), date(2014, 9, 22));
        assert_eq!(periods[1].unadjusted_end(), date(2014, 9, 20));
    }

    #[test]
    fn test_builder_rejects_missing_and_inverted() {
        assert!(matches!(
            PeriodicSchedule::builder().build(),
            Err(ScheduleError::MissingField { field: "start" })
        ));
        assert!(matches!(
            PeriodicSchedule::builder()
                .start(date(2015, 1, 1))
                .end(date(2014, 1, 1))
                .frequency(Frequency::Annual)
                .build(),
            Err(ScheduleError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_year_fraction_act360() {
        let periods = quarterly(date(2014, 6, 20), date(2014, 12, 20))
            .periods()
            .unwrap();
        let yf = periods[0].year_fraction(DayCount::Act360);
        assert!((yf - 92.0 / 360.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_periods_are_contiguous(months in 1i32..120) {
            let start = date(2014, 6, 20);
            let end = start.plus_months(months);
            let periods = quarterly(start, end).periods().unwrap();
            prop_assert_eq!(periods[0].start(), start);
            prop_assert_eq!(periods.last().unwrap().end(), end);
            for pair in periods.windows(2) {
                prop_assert_eq!(pair[0].end(), pair[1].start());
            }
        }

        #[test]
        fn prop_generation_is_deterministic(months in 1i32..120) {
            let start = date(2014, 6, 20);
            let end = start.plus_months(months);
            let a = quarterly(start, end).periods().unwrap();
            let b = quarterly(start, end).periods().unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
