//! The immutable market data environment.

use std::collections::HashMap;
use std::sync::Arc;

use calc_core::types::{Currency, Date, DayCount};
use calc_finance::credit::RedCode;
use calc_finance::swap::IborIndex;

use super::key::MarketDataKey;
use super::source::MarketDataSource;
use super::value::MarketDataValue;
use crate::curves::{CreditCurve, ZeroRateCurve};
use crate::error::PricingError;

/// An immutable snapshot of market data as of one valuation date.
///
/// Lookups of absent keys fail with [`PricingError::MissingMarketData`]
/// naming the key; there are no fallback values. [`with`] returns a new
/// environment, so a snapshot handed to parallel pricing tasks can never
/// change underneath them.
///
/// [`with`]: MarketDataEnvironment::with
///
/// # Examples
///
/// ```
/// use calc_pricer::market_data::{MarketDataEnvironment, MarketDataKey, MarketDataValue};
/// use calc_pricer::curves::ZeroRateCurve;
/// use calc_core::types::{Currency, Date};
///
/// let env = MarketDataEnvironment::builder(Date::from_ymd(2014, 1, 22).unwrap())
///     .value(
///         MarketDataKey::DiscountCurve(Currency::USD),
///         MarketDataValue::curve(ZeroRateCurve::flat(0.05)),
///     )
///     .build();
///
/// assert!(env.discount_curve(Currency::USD).is_ok());
/// assert!(env.discount_curve(Currency::EUR).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MarketDataEnvironment {
    valuation_date: Date,
    values: HashMap<MarketDataKey, MarketDataValue>,
}

impl MarketDataEnvironment {
    /// An environment with no values.
    pub fn empty(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            values: HashMap::new(),
        }
    }

    /// Returns a builder for the given valuation date.
    pub fn builder(valuation_date: Date) -> MarketDataEnvironmentBuilder {
        MarketDataEnvironmentBuilder {
            valuation_date,
            values: HashMap::new(),
        }
    }

    /// Returns the valuation date.
    #[inline]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns a new environment with the value added.
    pub fn with(&self, key: MarketDataKey, value: MarketDataValue) -> Self {
        let mut values = self.values.clone();
        values.insert(key, value);
        Self {
            valuation_date: self.valuation_date,
            values,
        }
    }

    /// Returns whether the environment contains the key.
    pub fn contains(&self, key: &MarketDataKey) -> bool {
        self.values.contains_key(key)
    }

    /// Year fraction from the valuation date to `date`, ACT/365F.
    ///
    /// Dates before the valuation date clamp to zero; curves are not
    /// defined in the past.
    pub fn time_to(&self, date: Date) -> f64 {
        DayCount::Act365Fixed
            .year_fraction(self.valuation_date, date)
            .max(0.0)
    }

    /// Returns the discount curve for a currency.
    pub fn discount_curve(&self, currency: Currency) -> Result<Arc<ZeroRateCurve>, PricingError> {
        let key = MarketDataKey::DiscountCurve(currency);
        match self.values.get(&key) {
            Some(MarketDataValue::Curve(curve)) => Ok(Arc::clone(curve)),
            _ => Err(self.missing(&key)),
        }
    }

    /// Returns the forward curve for an Ibor index.
    pub fn forward_curve(&self, index: IborIndex) -> Result<Arc<ZeroRateCurve>, PricingError> {
        let key = MarketDataKey::IborIndexCurve(index);
        match self.values.get(&key) {
            Some(MarketDataValue::Curve(curve)) => Ok(Arc::clone(curve)),
            _ => Err(self.missing(&key)),
        }
    }

    /// Returns a historical fixing for an index and date.
    pub fn fixing(&self, index: IborIndex, fixing_date: Date) -> Result<f64, PricingError> {
        let key = MarketDataKey::IborFixing { index, fixing_date };
        match self.values.get(&key) {
            Some(MarketDataValue::Fixing(rate)) => Ok(*rate),
            _ => Err(self.missing(&key)),
        }
    }

    /// Returns the credit curve for a reference entity.
    pub fn credit_curve(
        &self,
        red_code: &RedCode,
        currency: Currency,
    ) -> Result<Arc<CreditCurve>, PricingError> {
        let key = MarketDataKey::CreditCurve {
            red_code: red_code.clone(),
            currency,
        };
        match self.values.get(&key) {
            Some(MarketDataValue::CreditCurve(curve)) => Ok(Arc::clone(curve)),
            _ => Err(self.missing(&key)),
        }
    }

    /// Returns the recovery rate for a reference entity.
    pub fn recovery_rate(&self, red_code: &RedCode) -> Result<f64, PricingError> {
        let key = MarketDataKey::RecoveryRate {
            red_code: red_code.clone(),
        };
        match self.values.get(&key) {
            Some(MarketDataValue::Recovery(rate)) => Ok(*rate),
            _ => Err(self.missing(&key)),
        }
    }

    /// Returns the FX rate from `base` into `quote`.
    ///
    /// The identity rate needs no market data; an inverse quote is used
    /// when only the opposite direction is present.
    pub fn fx_rate(&self, base: Currency, quote: Currency) -> Result<f64, PricingError> {
        if base == quote {
            return Ok(1.0);
        }
        let key = MarketDataKey::FxRate { base, quote };
        if let Some(MarketDataValue::FxRate(rate)) = self.values.get(&key) {
            return Ok(*rate);
        }
        let inverse = MarketDataKey::FxRate {
            base: quote,
            quote: base,
        };
        if let Some(MarketDataValue::FxRate(rate)) = self.values.get(&inverse) {
            if *rate != 0.0 {
                return Ok(1.0 / rate);
            }
        }
        Err(self.missing(&key))
    }

    /// Returns a new environment with the given requirements resolved
    /// through a source.
    ///
    /// Keys already present are kept as-is; keys the source cannot resolve
    /// stay absent and fail at lookup time.
    pub fn resolved(
        &self,
        requirements: &[MarketDataKey],
        source: &dyn MarketDataSource,
    ) -> Self {
        let mut values = self.values.clone();
        for key in requirements {
            if values.contains_key(key) {
                continue;
            }
            if let Some(value) = source.resolve(key, self.valuation_date) {
                values.insert(key.clone(), value);
            }
        }
        Self {
            valuation_date: self.valuation_date,
            values,
        }
    }

    fn missing(&self, key: &MarketDataKey) -> PricingError {
        PricingError::MissingMarketData {
            key: key.to_string(),
        }
    }
}

/// Builder collecting values for a [`MarketDataEnvironment`].
#[derive(Debug)]
pub struct MarketDataEnvironmentBuilder {
    valuation_date: Date,
    values: HashMap<MarketDataKey, MarketDataValue>,
}

impl MarketDataEnvironmentBuilder {
    /// Adds a value under its key.
    pub fn value(mut self, key: MarketDataKey, value: MarketDataValue) -> Self {
        self.values.insert(key, value);
        self
    }

    /// Builds the environment.
    pub fn build(self) -> MarketDataEnvironment {
        MarketDataEnvironment {
            valuation_date: self.valuation_date,
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn env() -> MarketDataEnvironment {
        MarketDataEnvironment::builder(date(2014, 1, 22))
            .value(
                MarketDataKey::DiscountCurve(Currency::USD),
                MarketDataValue::curve(ZeroRateCurve::flat(0.05)),
            )
            .value(
                MarketDataKey::FxRate {
                    base: Currency::USD,
                    quote: Currency::EUR,
                },
                MarketDataValue::FxRate(0.8),
            )
            .build()
    }

    #[test]
    fn test_missing_lookup_names_key() {
        let err = env().forward_curve(IborIndex::UsdLibor3M).unwrap_err();
        assert!(matches!(
            &err,
            PricingError::MissingMarketData { key } if key == "IborIndexCurve:USD-LIBOR-3M"
        ));
    }

    #[test]
    fn test_with_returns_new_environment() {
        let base = env();
        let extended = base.with(
            MarketDataKey::IborIndexCurve(IborIndex::UsdLibor3M),
            MarketDataValue::curve(ZeroRateCurve::flat(0.04)),
        );
        assert!(base.forward_curve(IborIndex::UsdLibor3M).is_err());
        assert!(extended.forward_curve(IborIndex::UsdLibor3M).is_ok());
    }

    #[test]
    fn test_fx_rate_identity_and_inverse() {
        let e = env();
        assert_relative_eq!(e.fx_rate(Currency::USD, Currency::USD).unwrap(), 1.0);
        assert_relative_eq!(e.fx_rate(Currency::USD, Currency::EUR).unwrap(), 0.8);
        assert_relative_eq!(e.fx_rate(Currency::EUR, Currency::USD).unwrap(), 1.25);
        assert!(e.fx_rate(Currency::GBP, Currency::JPY).is_err());
    }

    #[test]
    fn test_resolved_two_tier() {
        struct FlatSource;
        impl MarketDataSource for FlatSource {
            fn resolve(
                &self,
                key: &MarketDataKey,
                _valuation_date: Date,
            ) -> Option<MarketDataValue> {
                match key {
                    MarketDataKey::IborIndexCurve(_) => {
                        Some(MarketDataValue::curve(ZeroRateCurve::flat(0.03)))
                    }
                    _ => None,
                }
            }
        }

        let requirements = vec![
            MarketDataKey::DiscountCurve(Currency::USD),
            MarketDataKey::IborIndexCurve(IborIndex::UsdLibor3M),
            MarketDataKey::DiscountCurve(Currency::EUR),
        ];
        let resolved = env().resolved(&requirements, &FlatSource);

        // snapshot value kept, source value added, unresolvable key absent
        assert!(resolved.discount_curve(Currency::USD).is_ok());
        assert!(resolved.forward_curve(IborIndex::UsdLibor3M).is_ok());
        assert!(resolved.discount_curve(Currency::EUR).is_err());
    }

    #[test]
    fn test_time_to_clamps_past_dates() {
        let e = env();
        assert_eq!(e.time_to(date(2013, 1, 22)), 0.0);
        assert_relative_eq!(e.time_to(date(2015, 1, 22)), 1.0, epsilon = 1e-10);
    }
}
