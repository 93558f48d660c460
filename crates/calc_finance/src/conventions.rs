//! Named market convention bundles and their registry.
//!
//! Conventions package the day counts, calendars and offsets that market
//! participants agree on per currency or market segment, so trades and
//! curves can be built from a name instead of a dozen loose parameters.
//!
//! The [`ConventionRegistry`] is built explicitly with
//! [`ConventionRegistry::standard`] and passed by reference; there is no
//! global registry and lookups of unknown names are errors, never silent
//! defaults.

use std::collections::HashMap;

use calc_core::date::{BusinessDayAdjustment, BusinessDayConvention, DaysAdjustment, HolidayCalendar};
use calc_core::types::{Currency, Date, DayCount};

use crate::credit::{
    BuySell, CreditDefaultSwap, FeeLeg, GeneralTerms, ProtectionTerms, ReferenceInformation,
};
use crate::error::ValidationError;
use crate::product::Product;
use crate::schedules::{Frequency, StubConvention};
use crate::trade::{StandardId, Trade, TradeInfo};

/// ISDA yield curve conventions for one currency.
///
/// Bundles the day counts and date rules used when bootstrapping an ISDA
/// standard-model yield curve from money-market and swap quotes.
///
/// # Examples
///
/// ```
/// use calc_finance::conventions::IsdaYieldCurveConvention;
/// use calc_core::types::Date;
///
/// let convention = IsdaYieldCurveConvention::usd_isda();
/// // Friday + 2 spot days lands on Sunday, adjusted forward to Monday
/// let spot = convention.spot_date_as_of(Date::from_ymd(2014, 1, 3).unwrap());
/// assert_eq!(spot, Date::from_ymd(2014, 1, 6).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsdaYieldCurveConvention {
    name: String,
    currency: Currency,
    mm_day_count: DayCount,
    fixed_day_count: DayCount,
    curve_day_count: DayCount,
    spot_days: u32,
    fixed_payment_frequency: Frequency,
    bad_day_convention: BusinessDayConvention,
    holiday_calendar: HolidayCalendar,
}

impl IsdaYieldCurveConvention {
    /// Returns a builder with no fields set.
    pub fn builder() -> IsdaYieldCurveConventionBuilder {
        IsdaYieldCurveConventionBuilder::default()
    }

    /// The standard USD ISDA curve convention.
    pub fn usd_isda() -> Self {
        Self {
            name: "USD-ISDA".to_string(),
            currency: Currency::USD,
            mm_day_count: DayCount::Act360,
            fixed_day_count: DayCount::Thirty360,
            curve_day_count: DayCount::Act365Fixed,
            spot_days: 2,
            fixed_payment_frequency: Frequency::SemiAnnual,
            bad_day_convention: BusinessDayConvention::ModifiedFollowing,
            holiday_calendar: HolidayCalendar::SatSun,
        }
    }

    /// The standard EUR ISDA curve convention.
    pub fn eur_isda() -> Self {
        Self {
            name: "EUR-ISDA".to_string(),
            currency: Currency::EUR,
            mm_day_count: DayCount::Act360,
            fixed_day_count: DayCount::Thirty360,
            curve_day_count: DayCount::Act365Fixed,
            spot_days: 2,
            fixed_payment_frequency: Frequency::Annual,
            bad_day_convention: BusinessDayConvention::ModifiedFollowing,
            holiday_calendar: HolidayCalendar::SatSun,
        }
    }

    /// Returns the convention name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the money-market day count.
    #[inline]
    pub fn mm_day_count(&self) -> DayCount {
        self.mm_day_count
    }

    /// Returns the fixed-leg day count.
    #[inline]
    pub fn fixed_day_count(&self) -> DayCount {
        self.fixed_day_count
    }

    /// Returns the day count used along the curve itself.
    #[inline]
    pub fn curve_day_count(&self) -> DayCount {
        self.curve_day_count
    }

    /// Returns the number of calendar days to spot.
    #[inline]
    pub fn spot_days(&self) -> u32 {
        self.spot_days
    }

    /// Returns the fixed-leg payment frequency.
    #[inline]
    pub fn fixed_payment_frequency(&self) -> Frequency {
        self.fixed_payment_frequency
    }

    /// Returns the bad-day convention.
    #[inline]
    pub fn bad_day_convention(&self) -> BusinessDayConvention {
        self.bad_day_convention
    }

    /// Returns the holiday calendar.
    #[inline]
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        self.holiday_calendar.clone()
    }

    /// Returns the spot date for a given valuation date: the valuation
    /// date plus the spot day count in calendar days, adjusted onto a
    /// business day under the bad-day convention.
    pub fn spot_date_as_of(&self, as_of: Date) -> Date {
        let adjustment =
            BusinessDayAdjustment::of(self.bad_day_convention, self.holiday_calendar.clone());
        adjustment.adjust(as_of.plus_days(i64::from(self.spot_days)))
    }
}

/// Builder for [`IsdaYieldCurveConvention`], validating on `build`.
#[derive(Debug, Clone, Default)]
pub struct IsdaYieldCurveConventionBuilder {
    name: Option<String>,
    currency: Option<Currency>,
    mm_day_count: Option<DayCount>,
    fixed_day_count: Option<DayCount>,
    curve_day_count: Option<DayCount>,
    spot_days: Option<u32>,
    fixed_payment_frequency: Option<Frequency>,
    bad_day_convention: Option<BusinessDayConvention>,
    holiday_calendar: Option<HolidayCalendar>,
}

impl IsdaYieldCurveConventionBuilder {
    /// Sets the convention name (required).
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the currency (required).
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the money-market day count (required).
    pub fn mm_day_count(mut self, day_count: DayCount) -> Self {
        self.mm_day_count = Some(day_count);
        self
    }

    /// Sets the fixed-leg day count (required).
    pub fn fixed_day_count(mut self, day_count: DayCount) -> Self {
        self.fixed_day_count = Some(day_count);
        self
    }

    /// Sets the curve day count (required).
    pub fn curve_day_count(mut self, day_count: DayCount) -> Self {
        self.curve_day_count = Some(day_count);
        self
    }

    /// Sets the number of calendar days to spot (required).
    pub fn spot_days(mut self, spot_days: u32) -> Self {
        self.spot_days = Some(spot_days);
        self
    }

    /// Sets the fixed-leg payment frequency (required).
    pub fn fixed_payment_frequency(mut self, frequency: Frequency) -> Self {
        self.fixed_payment_frequency = Some(frequency);
        self
    }

    /// Sets the bad-day convention (required).
    pub fn bad_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.bad_day_convention = Some(convention);
        self
    }

    /// Sets the holiday calendar (required).
    pub fn holiday_calendar(mut self, calendar: HolidayCalendar) -> Self {
        self.holiday_calendar = Some(calendar);
        self
    }

    /// Validates required fields and builds the convention.
    pub fn build(self) -> Result<IsdaYieldCurveConvention, ValidationError> {
        let name = self
            .name
            .ok_or(ValidationError::MissingField { field: "name" })?;
        if name.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "name",
                reason: "name must not be empty".to_string(),
            });
        }
        Ok(IsdaYieldCurveConvention {
            name,
            currency: self
                .currency
                .ok_or(ValidationError::MissingField { field: "currency" })?,
            mm_day_count: self
                .mm_day_count
                .ok_or(ValidationError::MissingField { field: "mm_day_count" })?,
            fixed_day_count: self
                .fixed_day_count
                .ok_or(ValidationError::MissingField { field: "fixed_day_count" })?,
            curve_day_count: self
                .curve_day_count
                .ok_or(ValidationError::MissingField { field: "curve_day_count" })?,
            spot_days: self
                .spot_days
                .ok_or(ValidationError::MissingField { field: "spot_days" })?,
            fixed_payment_frequency: self.fixed_payment_frequency.ok_or(
                ValidationError::MissingField {
                    field: "fixed_payment_frequency",
                },
            )?,
            bad_day_convention: self.bad_day_convention.ok_or(
                ValidationError::MissingField {
                    field: "bad_day_convention",
                },
            )?,
            holiday_calendar: self.holiday_calendar.ok_or(
                ValidationError::MissingField {
                    field: "holiday_calendar",
                },
            )?,
        })
    }
}

/// Market-standard terms for a single-name credit default swap.
///
/// Acts as a trade template: [`SingleNameCdsConvention::to_trade`] fills in
/// everything except the trade-specific economics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleNameCdsConvention {
    name: String,
    currency: Currency,
    day_count: DayCount,
    payment_frequency: Frequency,
    stub_convention: StubConvention,
    business_day_adjustment: BusinessDayAdjustment,
    payment_offset_days: u32,
}

impl SingleNameCdsConvention {
    /// The North American standard contract: USD, quarterly ACT/360
    /// premiums, following adjustment over the US and UK calendars.
    pub fn north_american() -> Self {
        Self {
            name: "NorthAmericanUsd".to_string(),
            currency: Currency::USD,
            day_count: DayCount::Act360,
            payment_frequency: Frequency::Quarterly,
            stub_convention: StubConvention::ShortFinal,
            business_day_adjustment: BusinessDayAdjustment::of(
                BusinessDayConvention::Following,
                HolidayCalendar::Usny.combine_with(HolidayCalendar::Gblo),
            ),
            payment_offset_days: 0,
        }
    }

    /// Returns the convention name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the premium currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the premium accrual day count.
    #[inline]
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Returns the premium payment frequency.
    #[inline]
    pub fn payment_frequency(&self) -> Frequency {
        self.payment_frequency
    }

    /// Returns the stub convention.
    #[inline]
    pub fn stub_convention(&self) -> StubConvention {
        self.stub_convention
    }

    /// Returns the business-day adjustment for schedule dates.
    #[inline]
    pub fn business_day_adjustment(&self) -> &BusinessDayAdjustment {
        &self.business_day_adjustment
    }

    /// Returns the payment offset in calendar days from each accrual end.
    #[inline]
    pub fn payment_offset_days(&self) -> u32 {
        self.payment_offset_days
    }

    /// Builds a complete CDS trade from this convention plus the
    /// trade-specific economics.
    #[allow(clippy::too_many_arguments)]
    pub fn to_trade(
        &self,
        trade_id: StandardId,
        info: TradeInfo,
        buy_sell: BuySell,
        effective_date: Date,
        scheduled_termination_date: Date,
        notional: f64,
        coupon: f64,
        reference: ReferenceInformation,
        restructuring_clause: crate::credit::RestructuringClause,
    ) -> Result<Trade, ValidationError> {
        let general_terms = GeneralTerms::of(
            effective_date,
            scheduled_termination_date,
            self.business_day_adjustment.clone(),
            self.currency,
            reference,
        )?;
        let fee_leg = FeeLeg::of(
            notional,
            coupon,
            true,
            self.day_count,
            self.payment_frequency,
            self.stub_convention,
            DaysAdjustment::of_calendar_days(self.payment_offset_days as i32),
        )?;
        let protection_terms = ProtectionTerms::of(notional, restructuring_clause)?;
        Trade::builder()
            .standard_id(trade_id)
            .info(info)
            .product(Product::CreditDefaultSwap(CreditDefaultSwap::of(
                buy_sell,
                general_terms,
                fee_leg,
                protection_terms,
            )))
            .build()
    }
}

/// A read-only catalogue of named conventions.
///
/// Constructed once (usually via [`ConventionRegistry::standard`]) and
/// passed by reference. Unknown names are reported as
/// [`ValidationError::UnknownConvention`], never defaulted.
#[derive(Debug, Clone)]
pub struct ConventionRegistry {
    yield_curve: HashMap<String, IsdaYieldCurveConvention>,
    single_name_cds: HashMap<String, SingleNameCdsConvention>,
}

impl ConventionRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            yield_curve: HashMap::new(),
            single_name_cds: HashMap::new(),
        }
    }

    /// The standard registry: USD and EUR ISDA curve conventions plus the
    /// North American single-name CDS contract.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.insert_yield_curve(IsdaYieldCurveConvention::usd_isda());
        registry.insert_yield_curve(IsdaYieldCurveConvention::eur_isda());
        registry.insert_single_name_cds(SingleNameCdsConvention::north_american());
        registry
    }

    /// Adds a yield curve convention, keyed by its name.
    pub fn insert_yield_curve(&mut self, convention: IsdaYieldCurveConvention) {
        self.yield_curve
            .insert(convention.name().to_string(), convention);
    }

    /// Adds a single-name CDS convention, keyed by its name.
    pub fn insert_single_name_cds(&mut self, convention: SingleNameCdsConvention) {
        self.single_name_cds
            .insert(convention.name().to_string(), convention);
    }

    /// Looks up a yield curve convention by name.
    pub fn yield_curve(&self, name: &str) -> Result<&IsdaYieldCurveConvention, ValidationError> {
        self.yield_curve
            .get(name)
            .ok_or_else(|| ValidationError::UnknownConvention {
                name: name.to_string(),
            })
    }

    /// Looks up a single-name CDS convention by name.
    pub fn single_name_cds(
        &self,
        name: &str,
    ) -> Result<&SingleNameCdsConvention, ValidationError> {
        self.single_name_cds
            .get(name)
            .ok_or_else(|| ValidationError::UnknownConvention {
                name: name.to_string(),
            })
    }
}
