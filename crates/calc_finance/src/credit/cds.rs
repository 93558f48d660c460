//! The credit default swap product and its expanded form.

use calc_core::types::{Currency, Date};

use super::fee::{FeeLeg, ProtectionTerms};
use super::terms::{BuySell, GeneralTerms, RedCode, ReferenceInformation};
use crate::schedules::{PeriodicSchedule, ScheduleError};

/// A credit default swap, single-name or index.
///
/// The product kind used for pricer dispatch derives from the reference
/// information inside the general terms.
///
/// # Examples
///
/// ```
/// use calc_finance::credit::{
///     BuySell, CreditDefaultSwap, FeeLeg, GeneralTerms, ProtectionTerms, RedCode,
///     ReferenceInformation, RestructuringClause, SeniorityLevel,
/// };
/// use calc_finance::schedules::{Frequency, StubConvention};
/// use calc_core::date::{BusinessDayAdjustment, BusinessDayConvention, DaysAdjustment, HolidayCalendar};
/// use calc_core::types::{Currency, Date, DayCount};
///
/// let effective = Date::from_ymd(2014, 6, 20).unwrap();
/// let cds = CreditDefaultSwap::of(
///     BuySell::Buy,
///     GeneralTerms::of(
///         effective,
///         effective.plus_years(5),
///         BusinessDayAdjustment::of(BusinessDayConvention::Following, HolidayCalendar::Usny),
///         Currency::USD,
///         ReferenceInformation::SingleName {
///             red_code: RedCode::of("H98A7X").unwrap(),
///             entity_name: "Ford Motor Company".to_string(),
///             seniority: SeniorityLevel::SeniorUnsecured,
///         },
///     )
///     .unwrap(),
///     FeeLeg::of(
///         1_000_000.0,
///         0.0100,
///         true,
///         DayCount::Act360,
///         Frequency::Quarterly,
///         StubConvention::ShortFinal,
///         DaysAdjustment::of_calendar_days(0),
///     )
///     .unwrap(),
///     ProtectionTerms::of(1_000_000.0, RestructuringClause::NoRestructuring).unwrap(),
/// );
///
/// let expanded = cds.expand().unwrap();
/// assert_eq!(expanded.fee_periods().len(), 20);
/// assert_eq!(expanded.protection_notional(), 1_000_000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditDefaultSwap {
    buy_sell: BuySell,
    general_terms: GeneralTerms,
    fee_leg: FeeLeg,
    protection_terms: ProtectionTerms,
}

impl CreditDefaultSwap {
    /// Creates a credit default swap from its three term groups.
    pub fn of(
        buy_sell: BuySell,
        general_terms: GeneralTerms,
        fee_leg: FeeLeg,
        protection_terms: ProtectionTerms,
    ) -> Self {
        Self {
            buy_sell,
            general_terms,
            fee_leg,
            protection_terms,
        }
    }

    /// Returns whether protection is bought or sold.
    #[inline]
    pub fn buy_sell(&self) -> BuySell {
        self.buy_sell
    }

    /// Returns the general terms.
    #[inline]
    pub fn general_terms(&self) -> &GeneralTerms {
        &self.general_terms
    }

    /// Returns the fee leg.
    #[inline]
    pub fn fee_leg(&self) -> &FeeLeg {
        &self.fee_leg
    }

    /// Returns the protection terms.
    #[inline]
    pub fn protection_terms(&self) -> &ProtectionTerms {
        &self.protection_terms
    }

    /// Returns whether the swap references an index rather than a single
    /// name.
    pub fn is_index(&self) -> bool {
        matches!(
            self.general_terms.reference(),
            ReferenceInformation::Index { .. }
        )
    }

    /// Expands the swap into dated fee periods and protection terms.
    ///
    /// The fee schedule runs from the effective date to the scheduled
    /// termination date at the fee leg's frequency, with boundary dates
    /// adjusted under the general terms' business-day adjustment.
    pub fn expand(&self) -> Result<ExpandedCds, ScheduleError> {
        let schedule = PeriodicSchedule::builder()
            .start(self.general_terms.effective_date())
            .end(self.general_terms.scheduled_termination_date())
            .frequency(self.fee_leg.payment_frequency())
            .stub_convention(self.fee_leg.stub_convention())
            .adjustment(self.general_terms.date_adjustment().clone())
            .build()?;

        let day_count = self.fee_leg.day_count();
        let fee_periods = schedule
            .periods()?
            .into_iter()
            .map(|p| CdsFeePeriod {
                start: p.start(),
                end: p.end(),
                payment_date: self.fee_leg.payment_offset().adjusted(p.end()),
                year_fraction: p.year_fraction(day_count),
                notional: self.fee_leg.notional(),
                coupon: self.fee_leg.coupon(),
            })
            .collect();

        Ok(ExpandedCds {
            buy_sell: self.buy_sell,
            currency: self.general_terms.currency(),
            red_code: self.general_terms.reference().red_code().clone(),
            effective_date: self.general_terms.effective_date(),
            maturity_date: self.general_terms.scheduled_termination_date(),
            fee_periods,
            protection_notional: self.protection_terms.notional(),
            pay_accrued_on_default: self.fee_leg.pay_accrued_on_default(),
        })
    }
}

/// One premium accrual period of an expanded CDS fee leg.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CdsFeePeriod {
    /// Accrual start date (adjusted).
    pub start: Date,
    /// Accrual end date (adjusted).
    pub end: Date,
    /// Premium payment date.
    pub payment_date: Date,
    /// Accrual year fraction under the fee leg day count.
    pub year_fraction: f64,
    /// Fee leg notional.
    pub notional: f64,
    /// Annualised coupon.
    pub coupon: f64,
}

/// A credit default swap with its fee schedule materialised.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandedCds {
    buy_sell: BuySell,
    currency: Currency,
    red_code: RedCode,
    effective_date: Date,
    maturity_date: Date,
    fee_periods: Vec<CdsFeePeriod>,
    protection_notional: f64,
    pay_accrued_on_default: bool,
}

impl ExpandedCds {
    /// Returns whether protection is bought or sold.
    #[inline]
    pub fn buy_sell(&self) -> BuySell {
        self.buy_sell
    }

    /// Returns the swap currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the RED code of the reference.
    #[inline]
    pub fn red_code(&self) -> &RedCode {
        &self.red_code
    }

    /// Returns the protection effective date.
    #[inline]
    pub fn effective_date(&self) -> Date {
        self.effective_date
    }

    /// Returns the scheduled maturity date.
    #[inline]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the premium periods in date order.
    #[inline]
    pub fn fee_periods(&self) -> &[CdsFeePeriod] {
        &self.fee_periods
    }

    /// Returns the protected notional.
    #[inline]
    pub fn protection_notional(&self) -> f64 {
        self.protection_notional
    }

    /// Returns whether accrued premium is paid on default.
    #[inline]
    pub fn pay_accrued_on_default(&self) -> bool {
        self.pay_accrued_on_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::terms::{RestructuringClause, SeniorityLevel};
    use crate::schedules::{Frequency, StubConvention};
    use calc_core::date::{
        BusinessDayAdjustment, BusinessDayConvention, DaysAdjustment, HolidayCalendar,
    };
    use calc_core::types::DayCount;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn single_name_cds() -> CreditDefaultSwap {
        let effective = date(2014, 6, 20);
        CreditDefaultSwap::of(
            BuySell::Buy,
            GeneralTerms::of(
                effective,
                effective.plus_years(5),
                BusinessDayAdjustment::of(
                    BusinessDayConvention::Following,
                    HolidayCalendar::Usny.combine_with(HolidayCalendar::Gblo),
                ),
                Currency::USD,
                ReferenceInformation::SingleName {
                    red_code: RedCode::of("H98A7X").unwrap(),
                    entity_name: "Ford Motor Company".to_string(),
                    seniority: SeniorityLevel::SeniorUnsecured,
                },
            )
            .unwrap(),
            FeeLeg::of(
                1_000_000.0,
                0.0100,
                true,
                DayCount::Act360,
                Frequency::Quarterly,
                StubConvention::ShortFinal,
                DaysAdjustment::of_calendar_days(0),
            )
            .unwrap(),
            ProtectionTerms::of(1_000_000.0, RestructuringClause::NoRestructuring).unwrap(),
        )
    }

    #[test]
    fn test_expand_quarterly_fee_periods() {
        let expanded = single_name_cds().expand().unwrap();
        // 5 years quarterly = 20 periods
        assert_eq!(expanded.fee_periods().len(), 20);
        assert_eq!(expanded.effective_date(), date(2014, 6, 20));
        assert_eq!(expanded.maturity_date(), date(2019, 6, 20));
        assert_eq!(expanded.protection_notional(), 1_000_000.0);
        for p in expanded.fee_periods() {
            assert_eq!(p.notional, 1_000_000.0);
            assert_relative_eq!(p.coupon, 0.0100, epsilon = 1e-15);
            // quarterly ACT/360 accrual is roughly a quarter of a year
            assert!(p.year_fraction > 0.23 && p.year_fraction < 0.28);
        }
    }

    #[test]
    fn test_expand_is_deterministic() {
        let cds = single_name_cds();
        assert_eq!(cds.expand().unwrap(), cds.expand().unwrap());
    }

    #[test]
    fn test_index_reference_detected() {
        let mut cds = single_name_cds();
        assert!(!cds.is_index());
        cds.general_terms = GeneralTerms::of(
            date(2014, 6, 20),
            date(2019, 12, 20),
            BusinessDayAdjustment::of(
                BusinessDayConvention::Following,
                HolidayCalendar::NoHolidays,
            ),
            Currency::USD,
            ReferenceInformation::Index {
                red_code: RedCode::of("2I65BYCL7").unwrap(),
                index_name: "CDX.NA.IG.15".to_string(),
                series: 15,
                version: 1,
            },
        )
        .unwrap();
        assert!(cds.is_index());
    }
}
