//! Rate observation functions and their dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use calc_core::types::Date;
use calc_finance::swap::{RateObservation, RateObservationKind};

use crate::error::PricingError;
use crate::market_data::MarketDataEnvironment;

/// Computes the accrual rate implied by a rate observation.
pub trait RateObservationFn: Send + Sync {
    /// Returns the annualised rate for the observation over an accrual
    /// period.
    fn rate(
        &self,
        env: &MarketDataEnvironment,
        observation: &RateObservation,
        start: Date,
        end: Date,
    ) -> Result<f64, PricingError>;
}

/// Returns the contractual rate of a fixed observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRateObservationFn;

impl RateObservationFn for FixedRateObservationFn {
    fn rate(
        &self,
        _env: &MarketDataEnvironment,
        observation: &RateObservation,
        _start: Date,
        _end: Date,
    ) -> Result<f64, PricingError> {
        match observation {
            RateObservation::Fixed { rate } => Ok(*rate),
            other => Err(PricingError::UnsupportedType {
                type_name: other.kind().type_name(),
            }),
        }
    }
}

/// Resolves an Ibor observation from a historical fixing or the forward
/// curve.
///
/// A fixing dated on or before the valuation date has already been
/// published and must come from the environment; later fixings are
/// projected off the index forward curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardIborRateObservationFn;

impl RateObservationFn for ForwardIborRateObservationFn {
    fn rate(
        &self,
        env: &MarketDataEnvironment,
        observation: &RateObservation,
        start: Date,
        end: Date,
    ) -> Result<f64, PricingError> {
        match observation {
            RateObservation::Ibor { index, fixing_date } => {
                if *fixing_date <= env.valuation_date() {
                    return env.fixing(*index, *fixing_date);
                }
                let curve = env.forward_curve(*index)?;
                curve
                    .forward_rate(env.time_to(start), env.time_to(end))
                    .map_err(|e| {
                        PricingError::calculation(format!("forward rate for {index}"), e)
                    })
            }
            other => Err(PricingError::UnsupportedType {
                type_name: other.kind().type_name(),
            }),
        }
    }
}

/// Routes each observation to the function registered for its tag.
pub struct DispatchingRateObservationFn {
    functions: HashMap<RateObservationKind, Arc<dyn RateObservationFn>>,
}

impl DispatchingRateObservationFn {
    /// A dispatcher with the built-in functions registered.
    pub fn standard() -> Self {
        let mut functions: HashMap<RateObservationKind, Arc<dyn RateObservationFn>> =
            HashMap::new();
        functions.insert(
            RateObservationKind::Fixed,
            Arc::new(FixedRateObservationFn),
        );
        functions.insert(
            RateObservationKind::Ibor,
            Arc::new(ForwardIborRateObservationFn),
        );
        Self { functions }
    }

    /// A dispatcher over an explicit registry.
    pub fn new(functions: HashMap<RateObservationKind, Arc<dyn RateObservationFn>>) -> Self {
        Self { functions }
    }
}

impl RateObservationFn for DispatchingRateObservationFn {
    fn rate(
        &self,
        env: &MarketDataEnvironment,
        observation: &RateObservation,
        start: Date,
        end: Date,
    ) -> Result<f64, PricingError> {
        let kind = observation.kind();
        match self.functions.get(&kind) {
            Some(function) => function.rate(env, observation, start, end),
            None => Err(PricingError::UnsupportedType {
                type_name: kind.type_name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::ZeroRateCurve;
    use crate::market_data::{MarketDataKey, MarketDataValue};
    use approx::assert_relative_eq;
    use calc_finance::swap::IborIndex;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn env() -> MarketDataEnvironment {
        MarketDataEnvironment::builder(date(2014, 1, 22))
            .value(
                MarketDataKey::IborIndexCurve(IborIndex::UsdLibor3M),
                MarketDataValue::curve(ZeroRateCurve::flat(0.04)),
            )
            .value(
                MarketDataKey::IborFixing {
                    index: IborIndex::UsdLibor3M,
                    fixing_date: date(2014, 1, 20),
                },
                MarketDataValue::Fixing(0.0235),
            )
            .build()
    }

    #[test]
    fn test_fixed_returns_contract_rate() {
        let observation = RateObservation::Fixed { rate: 0.05004 };
        let rate = DispatchingRateObservationFn::standard()
            .rate(&env(), &observation, date(2014, 3, 24), date(2014, 6, 24))
            .unwrap();
        assert_relative_eq!(rate, 0.05004);
    }

    #[test]
    fn test_published_fixing_comes_from_environment() {
        let observation = RateObservation::Ibor {
            index: IborIndex::UsdLibor3M,
            fixing_date: date(2014, 1, 20),
        };
        let rate = DispatchingRateObservationFn::standard()
            .rate(&env(), &observation, date(2014, 1, 22), date(2014, 4, 22))
            .unwrap();
        assert_relative_eq!(rate, 0.0235);
    }

    #[test]
    fn test_future_fixing_projected_from_curve() {
        let observation = RateObservation::Ibor {
            index: IborIndex::UsdLibor3M,
            fixing_date: date(2014, 3, 20),
        };
        let rate = DispatchingRateObservationFn::standard()
            .rate(&env(), &observation, date(2014, 3, 24), date(2014, 6, 24))
            .unwrap();
        // flat curve: forward equals the zero rate
        assert_relative_eq!(rate, 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_unregistered_kind_is_unsupported() {
        let dispatcher = DispatchingRateObservationFn::new(HashMap::new());
        let observation = RateObservation::Fixed { rate: 0.05 };
        let err = dispatcher
            .rate(&env(), &observation, date(2014, 3, 24), date(2014, 6, 24))
            .unwrap_err();
        assert!(matches!(
            err,
            PricingError::UnsupportedType { type_name: "FixedRateObservation" }
        ));
    }

    #[test]
    fn test_published_fixing_missing_is_error() {
        let observation = RateObservation::Ibor {
            index: IborIndex::UsdLibor3M,
            fixing_date: date(2014, 1, 15),
        };
        let err = DispatchingRateObservationFn::standard()
            .rate(&env(), &observation, date(2014, 1, 17), date(2014, 4, 17))
            .unwrap_err();
        assert!(matches!(err, PricingError::MissingMarketData { .. }));
    }
}
