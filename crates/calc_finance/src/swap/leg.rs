//! Swap legs and their rate calculations.

use std::fmt;

use calc_core::date::DaysAdjustment;
use calc_core::types::{Currency, DayCount};

use super::index::IborIndex;
use super::period::{PaymentPeriod, RateObservation, RatePaymentPeriod};
use crate::error::ValidationError;
use crate::schedules::{PeriodicSchedule, ScheduleError};

/// Whether a leg is paid or received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayReceive {
    /// The leg is paid: cashflows carry a negative sign.
    Pay,
    /// The leg is received: cashflows carry a positive sign.
    Receive,
}

impl PayReceive {
    /// Returns the sign applied to this leg's cashflows.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        match self {
            PayReceive::Pay => -1.0,
            PayReceive::Receive => 1.0,
        }
    }
}

impl fmt::Display for PayReceive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayReceive::Pay => f.write_str("Pay"),
            PayReceive::Receive => f.write_str("Receive"),
        }
    }
}

/// The notional of a leg: a constant amount in one currency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotionalSchedule {
    currency: Currency,
    amount: f64,
}

impl NotionalSchedule {
    /// Creates a notional schedule, rejecting non-positive or non-finite
    /// amounts.
    pub fn of(currency: Currency, amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidField {
                field: "notional",
                reason: format!("notional must be positive and finite, got {amount}"),
            });
        }
        Ok(Self { currency, amount })
    }

    /// Returns the currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the notional amount.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// A fixed-rate accrual calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedRateCalculation {
    /// The annualised fixed rate, e.g. 0.05004 for 5.004%.
    pub rate: f64,
    /// The day count for accrual year fractions.
    pub day_count: DayCount,
}

impl FixedRateCalculation {
    /// Creates a fixed-rate calculation.
    pub fn of(rate: f64, day_count: DayCount) -> Self {
        Self { rate, day_count }
    }
}

/// A floating-rate accrual calculation observing an Ibor index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborRateCalculation {
    /// The index observed each period.
    pub index: IborIndex,
    /// The day count for accrual year fractions.
    pub day_count: DayCount,
}

impl IborRateCalculation {
    /// Creates an Ibor calculation with the market-standard ACT/360 accrual.
    pub fn of(index: IborIndex) -> Self {
        Self {
            index,
            day_count: DayCount::Act360,
        }
    }
}

/// How a leg accrues interest: a closed variant over calculation kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RateCalculation {
    /// Fixed-rate accrual.
    Fixed(FixedRateCalculation),
    /// Ibor floating-rate accrual.
    Ibor(IborRateCalculation),
}

impl RateCalculation {
    /// Returns the day count used for accrual.
    #[inline]
    pub fn day_count(&self) -> DayCount {
        match self {
            RateCalculation::Fixed(c) => c.day_count,
            RateCalculation::Ibor(c) => c.day_count,
        }
    }
}

/// One leg of a swap: a schedule, a notional and a rate calculation.
///
/// # Examples
///
/// ```
/// use calc_finance::swap::{
///     FixedRateCalculation, NotionalSchedule, PayReceive, RateCalculation, SwapLeg,
/// };
/// use calc_finance::schedules::{Frequency, PeriodicSchedule};
/// use calc_core::types::{Currency, Date, DayCount};
///
/// let schedule = PeriodicSchedule::builder()
///     .start(Date::from_ymd(2014, 2, 24).unwrap())
///     .end(Date::from_ymd(2016, 2, 24).unwrap())
///     .frequency(Frequency::Quarterly)
///     .build()
///     .unwrap();
///
/// let leg = SwapLeg::builder()
///     .pay_receive(PayReceive::Pay)
///     .accrual_schedule(schedule)
///     .notional(NotionalSchedule::of(Currency::USD, 12_000_000.0).unwrap())
///     .calculation(RateCalculation::Fixed(FixedRateCalculation::of(
///         0.05004,
///         DayCount::Act360,
///     )))
///     .build()
///     .unwrap();
///
/// assert_eq!(leg.pay_receive(), PayReceive::Pay);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapLeg {
    pay_receive: PayReceive,
    accrual_schedule: PeriodicSchedule,
    payment_offset: DaysAdjustment,
    notional: NotionalSchedule,
    calculation: RateCalculation,
}

impl SwapLeg {
    /// Returns a builder with no fields set.
    pub fn builder() -> SwapLegBuilder {
        SwapLegBuilder::default()
    }

    /// Returns whether the leg is paid or received.
    #[inline]
    pub fn pay_receive(&self) -> PayReceive {
        self.pay_receive
    }

    /// Returns the accrual schedule.
    #[inline]
    pub fn accrual_schedule(&self) -> &PeriodicSchedule {
        &self.accrual_schedule
    }

    /// Returns the notional schedule.
    #[inline]
    pub fn notional(&self) -> NotionalSchedule {
        self.notional
    }

    /// Returns the rate calculation.
    #[inline]
    pub fn calculation(&self) -> &RateCalculation {
        &self.calculation
    }

    /// Expands this leg into its payment periods.
    ///
    /// Expansion is deterministic: the same leg always produces the same
    /// periods. Each accrual period becomes one [`PaymentPeriod::Rate`]
    /// whose payment date is the adjusted accrual end plus the payment
    /// offset.
    pub fn expand(&self) -> Result<Vec<PaymentPeriod>, ScheduleError> {
        let day_count = self.calculation.day_count();
        let periods = self
            .accrual_schedule
            .periods()?
            .into_iter()
            .map(|p| {
                let observation = match &self.calculation {
                    RateCalculation::Fixed(calc) => RateObservation::Fixed { rate: calc.rate },
                    RateCalculation::Ibor(calc) => RateObservation::Ibor {
                        index: calc.index,
                        fixing_date: calc.index.fixing_date_for(p.start()),
                    },
                };
                PaymentPeriod::Rate(RatePaymentPeriod::new(
                    p.start(),
                    p.end(),
                    self.payment_offset.adjusted(p.end()),
                    p.year_fraction(day_count),
                    self.notional.amount(),
                    self.notional.currency(),
                    observation,
                ))
            })
            .collect();
        Ok(periods)
    }
}

/// Builder for [`SwapLeg`], validating on `build`.
#[derive(Debug, Clone)]
pub struct SwapLegBuilder {
    pay_receive: Option<PayReceive>,
    accrual_schedule: Option<PeriodicSchedule>,
    payment_offset: DaysAdjustment,
    notional: Option<NotionalSchedule>,
    calculation: Option<RateCalculation>,
}

impl Default for SwapLegBuilder {
    fn default() -> Self {
        Self {
            pay_receive: None,
            accrual_schedule: None,
            payment_offset: DaysAdjustment::of_calendar_days(0),
            notional: None,
            calculation: None,
        }
    }
}

impl SwapLegBuilder {
    /// Sets the pay/receive flag (required).
    pub fn pay_receive(mut self, pay_receive: PayReceive) -> Self {
        self.pay_receive = Some(pay_receive);
        self
    }

    /// Sets the accrual schedule (required).
    pub fn accrual_schedule(mut self, schedule: PeriodicSchedule) -> Self {
        self.accrual_schedule = Some(schedule);
        self
    }

    /// Sets the payment offset; defaults to payment on the accrual end date.
    pub fn payment_offset(mut self, offset: DaysAdjustment) -> Self {
        self.payment_offset = offset;
        self
    }

    /// Sets the notional schedule (required).
    pub fn notional(mut self, notional: NotionalSchedule) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the rate calculation (required).
    pub fn calculation(mut self, calculation: RateCalculation) -> Self {
        self.calculation = Some(calculation);
        self
    }

    /// Validates required fields and builds the leg.
    pub fn build(self) -> Result<SwapLeg, ValidationError> {
        Ok(SwapLeg {
            pay_receive: self
                .pay_receive
                .ok_or(ValidationError::MissingField { field: "pay_receive" })?,
            accrual_schedule: self
                .accrual_schedule
                .ok_or(ValidationError::MissingField { field: "accrual_schedule" })?,
            payment_offset: self.payment_offset,
            notional: self
                .notional
                .ok_or(ValidationError::MissingField { field: "notional" })?,
            calculation: self
                .calculation
                .ok_or(ValidationError::MissingField { field: "calculation" })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::date::HolidayCalendar;
    use calc_core::types::Date;
    use crate::schedules::Frequency;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn schedule() -> PeriodicSchedule {
        PeriodicSchedule::builder()
            .start(date(2014, 6, 20))
            .end(date(2015, 6, 20))
            .frequency(Frequency::Quarterly)
            .build()
            .unwrap()
    }

    #[test]
    fn test_notional_validation() {
        assert!(NotionalSchedule::of(Currency::USD, 0.0).is_err());
        assert!(NotionalSchedule::of(Currency::USD, -1.0).is_err());
        assert!(NotionalSchedule::of(Currency::USD, f64::NAN).is_err());
        assert!(NotionalSchedule::of(Currency::USD, 1_000_000.0).is_ok());
    }

    #[test]
    fn test_fixed_leg_expands_to_fixed_observations() {
        let leg = SwapLeg::builder()
            .pay_receive(PayReceive::Pay)
            .accrual_schedule(schedule())
            .notional(NotionalSchedule::of(Currency::USD, 1_000_000.0).unwrap())
            .calculation(RateCalculation::Fixed(FixedRateCalculation::of(
                0.05,
                DayCount::Act360,
            )))
            .build()
            .unwrap();

        let periods = leg.expand().unwrap();
        assert_eq!(periods.len(), 4);
        for period in &periods {
            let PaymentPeriod::Rate(p) = period else {
                panic!("expected rate payment period");
            };
            assert!(matches!(
                p.observation(),
                RateObservation::Fixed { rate } if (*rate - 0.05).abs() < 1e-15
            ));
            assert_eq!(p.notional(), 1_000_000.0);
        }
    }

    #[test]
    fn test_ibor_leg_has_fixing_dates_before_start() {
        let leg = SwapLeg::builder()
            .pay_receive(PayReceive::Receive)
            .accrual_schedule(schedule())
            .notional(NotionalSchedule::of(Currency::USD, 1_000_000.0).unwrap())
            .calculation(RateCalculation::Ibor(IborRateCalculation::of(
                IborIndex::UsdLibor3M,
            )))
            .build()
            .unwrap();

        for period in leg.expand().unwrap() {
            let PaymentPeriod::Rate(p) = period else {
                panic!("expected rate payment period");
            };
            match p.observation() {
                RateObservation::Ibor { index, fixing_date } => {
                    assert_eq!(*index, IborIndex::UsdLibor3M);
                    assert!(*fixing_date < p.start());
                }
                other => panic!("expected ibor observation, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_payment_offset_shifts_payment_date() {
        let leg = SwapLeg::builder()
            .pay_receive(PayReceive::Pay)
            .accrual_schedule(schedule())
            .payment_offset(DaysAdjustment::of_business_days(2, HolidayCalendar::SatSun))
            .notional(NotionalSchedule::of(Currency::USD, 1_000_000.0).unwrap())
            .calculation(RateCalculation::Fixed(FixedRateCalculation::of(
                0.05,
                DayCount::Act360,
            )))
            .build()
            .unwrap();

        let periods = leg.expand().unwrap();
        let PaymentPeriod::Rate(first) = &periods[0] else {
            panic!("expected rate payment period");
        };
        // accrual end 2014-09-20 (Sat): +2 business days = Tuesday 09-23
        assert_eq!(first.end(), date(2014, 9, 20));
        assert_eq!(first.payment_date(), date(2014, 9, 23));
    }

    #[test]
    fn test_builder_rejects_missing_fields() {
        let err = SwapLeg::builder().build();
        assert!(matches!(
            err,
            Err(ValidationError::MissingField { field: "pay_receive" })
        ));
    }
}
