//! Discounting pricers for swap payment periods and products.

use std::sync::Arc;

use calc_core::types::CurrencyAmount;
use calc_finance::product::ExpandedProduct;
use calc_finance::swap::{
    ExpandedSwap, ExpandedSwapLeg, PayReceive, PaymentPeriod, RateObservation,
};
use thiserror::Error;

use crate::dispatch::observation::{DispatchingRateObservationFn, RateObservationFn};
use crate::dispatch::period::PaymentPeriodPricer;
use crate::dispatch::product::ProductPricer;
use crate::error::PricingError;
use crate::market_data::{MarketDataEnvironment, MarketDataKey};

#[derive(Debug, Error)]
#[error("swap has no {0} leg")]
struct MissingLeg(PayReceive);

/// Prices a rate payment period by discounting its projected cashflow.
///
/// `future_value = rate × year_fraction × notional`, with the rate coming
/// from the observation function; `present_value` multiplies by the
/// discount factor at the payment date.
pub struct DiscountingRatePaymentPeriodPricer {
    observation_fn: Arc<dyn RateObservationFn>,
}

impl DiscountingRatePaymentPeriodPricer {
    /// A pricer using the standard observation dispatcher.
    pub fn standard() -> Self {
        Self {
            observation_fn: Arc::new(DispatchingRateObservationFn::standard()),
        }
    }

    /// A pricer over an explicit observation function.
    pub fn new(observation_fn: Arc<dyn RateObservationFn>) -> Self {
        Self { observation_fn }
    }
}

impl PaymentPeriodPricer for DiscountingRatePaymentPeriodPricer {
    fn present_value(
        &self,
        env: &MarketDataEnvironment,
        period: &PaymentPeriod,
    ) -> Result<f64, PricingError> {
        match period {
            PaymentPeriod::Rate(p) => {
                let fv = self.future_value(env, period)?;
                let curve = env.discount_curve(p.currency())?;
                let df = curve
                    .discount_factor(env.time_to(p.payment_date()))
                    .map_err(|e| PricingError::calculation("discount factor", e))?;
                Ok(fv * df)
            }
            other => Err(PricingError::UnsupportedType {
                type_name: other.kind().type_name(),
            }),
        }
    }

    fn future_value(
        &self,
        env: &MarketDataEnvironment,
        period: &PaymentPeriod,
    ) -> Result<f64, PricingError> {
        match period {
            PaymentPeriod::Rate(p) => {
                let rate = self
                    .observation_fn
                    .rate(env, p.observation(), p.start(), p.end())?;
                Ok(rate * p.year_fraction() * p.notional())
            }
            other => Err(PricingError::UnsupportedType {
                type_name: other.kind().type_name(),
            }),
        }
    }
}

/// Prices a known-amount period by discounting the fixed cashflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountingKnownAmountPeriodPricer;

impl PaymentPeriodPricer for DiscountingKnownAmountPeriodPricer {
    fn present_value(
        &self,
        env: &MarketDataEnvironment,
        period: &PaymentPeriod,
    ) -> Result<f64, PricingError> {
        let fv = self.future_value(env, period)?;
        let curve = env.discount_curve(period.currency())?;
        let df = curve
            .discount_factor(env.time_to(period.payment_date()))
            .map_err(|e| PricingError::calculation("discount factor", e))?;
        Ok(fv * df)
    }

    fn future_value(
        &self,
        _env: &MarketDataEnvironment,
        period: &PaymentPeriod,
    ) -> Result<f64, PricingError> {
        match period {
            PaymentPeriod::KnownAmount(p) => Ok(p.amount().amount()),
            other => Err(PricingError::UnsupportedType {
                type_name: other.kind().type_name(),
            }),
        }
    }
}

/// Prices a whole swap by summing discounted leg cashflows.
///
/// Each leg's present value is the sum of its period present values via
/// the payment-period dispatcher, signed by the leg direction; the product
/// present value is the sum over legs.
pub struct DiscountingSwapProductPricer {
    period_pricer: Arc<dyn PaymentPeriodPricer>,
    observation_fn: Arc<dyn RateObservationFn>,
}

impl DiscountingSwapProductPricer {
    /// A pricer using the standard dispatchers.
    pub fn standard() -> Self {
        Self {
            period_pricer: Arc::new(crate::dispatch::period::DispatchingPaymentPeriodPricer::standard()),
            observation_fn: Arc::new(DispatchingRateObservationFn::standard()),
        }
    }

    /// A pricer over explicit collaborators.
    pub fn new(
        period_pricer: Arc<dyn PaymentPeriodPricer>,
        observation_fn: Arc<dyn RateObservationFn>,
    ) -> Self {
        Self {
            period_pricer,
            observation_fn,
        }
    }

    fn leg_value(
        &self,
        env: &MarketDataEnvironment,
        leg: &ExpandedSwapLeg,
    ) -> Result<CurrencyAmount, PricingError> {
        let mut sum = 0.0;
        for period in leg.periods() {
            // periods already paid contribute nothing
            if period.payment_date() <= env.valuation_date() {
                continue;
            }
            sum += self.period_pricer.present_value(env, period)?;
        }
        Ok(CurrencyAmount::of(
            leg.currency(),
            sum * leg.pay_receive().multiplier(),
        ))
    }

    fn leg_accrued(
        &self,
        env: &MarketDataEnvironment,
        leg: &ExpandedSwapLeg,
    ) -> Result<f64, PricingError> {
        let valuation = env.valuation_date();
        let mut accrued = 0.0;
        for period in leg.periods() {
            let PaymentPeriod::Rate(p) = period else {
                continue;
            };
            if p.start() > valuation || p.end() <= valuation {
                continue;
            }
            let rate = self
                .observation_fn
                .rate(env, p.observation(), p.start(), p.end())?;
            let elapsed = (valuation - p.start()) as f64 / (p.end() - p.start()) as f64;
            accrued += rate * p.year_fraction() * p.notional() * elapsed;
        }
        Ok(accrued * leg.pay_receive().multiplier())
    }
}

fn expect_swap(product: &ExpandedProduct) -> Result<&ExpandedSwap, PricingError> {
    match product {
        ExpandedProduct::Swap(swap) => Ok(swap),
        other => Err(PricingError::UnsupportedType {
            type_name: other.kind().type_name(),
        }),
    }
}

impl ProductPricer for DiscountingSwapProductPricer {
    fn requirements(&self, product: &ExpandedProduct) -> Vec<MarketDataKey> {
        let Ok(swap) = expect_swap(product) else {
            return Vec::new();
        };
        let mut keys = Vec::new();
        let mut push = |key: MarketDataKey, keys: &mut Vec<MarketDataKey>| {
            if !keys.contains(&key) {
                keys.push(key);
            }
        };
        for leg in swap.legs() {
            push(MarketDataKey::DiscountCurve(leg.currency()), &mut keys);
            for period in leg.periods() {
                let PaymentPeriod::Rate(p) = period else {
                    continue;
                };
                if let RateObservation::Ibor { index, fixing_date } = p.observation() {
                    push(MarketDataKey::IborIndexCurve(*index), &mut keys);
                    push(
                        MarketDataKey::IborFixing {
                            index: *index,
                            fixing_date: *fixing_date,
                        },
                        &mut keys,
                    );
                }
            }
        }
        keys
    }

    fn present_value(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
    ) -> Result<CurrencyAmount, PricingError> {
        let swap = expect_swap(product)?;
        let mut total: Option<CurrencyAmount> = None;
        for leg in swap.legs() {
            let leg_pv = self.leg_value(env, leg)?;
            total = Some(match total {
                None => leg_pv,
                Some(sum) => sum
                    .plus(leg_pv)
                    .map_err(|e| PricingError::calculation("summing leg present values", e))?,
            });
        }
        total.ok_or_else(|| PricingError::calculation("swap present value", MissingLeg(PayReceive::Pay)))
    }

    fn leg_present_value(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
        pay_receive: PayReceive,
    ) -> Result<CurrencyAmount, PricingError> {
        let swap = expect_swap(product)?;
        let leg = swap
            .leg(pay_receive)
            .ok_or_else(|| PricingError::calculation("leg present value", MissingLeg(pay_receive)))?;
        self.leg_value(env, leg)
    }

    fn accrued_interest(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
    ) -> Result<CurrencyAmount, PricingError> {
        let swap = expect_swap(product)?;
        let mut total: Option<CurrencyAmount> = None;
        for leg in swap.legs() {
            let amount = CurrencyAmount::of(leg.currency(), self.leg_accrued(env, leg)?);
            total = Some(match total {
                None => amount,
                Some(sum) => sum
                    .plus(amount)
                    .map_err(|e| PricingError::calculation("summing accrued interest", e))?,
            });
        }
        total.ok_or_else(|| PricingError::calculation("accrued interest", MissingLeg(PayReceive::Pay)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::ZeroRateCurve;
    use crate::market_data::MarketDataValue;
    use approx::assert_relative_eq;
    use calc_core::types::{Currency, Date};
    use calc_finance::swap::test_fixtures::vanilla_usd_swap;
    use calc_finance::swap::IborIndex;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn env(valuation: Date) -> MarketDataEnvironment {
        MarketDataEnvironment::builder(valuation)
            .value(
                MarketDataKey::DiscountCurve(Currency::USD),
                MarketDataValue::curve(ZeroRateCurve::flat(0.05)),
            )
            .value(
                MarketDataKey::IborIndexCurve(IborIndex::UsdLibor3M),
                MarketDataValue::curve(ZeroRateCurve::flat(0.04)),
            )
            .build()
    }

    fn expanded() -> ExpandedProduct {
        ExpandedProduct::Swap(vanilla_usd_swap().expand().unwrap())
    }

    #[test]
    fn test_present_value_is_sum_of_leg_values() {
        // value before the first fixing so no historical fixings are needed
        let env = env(date(2006, 2, 20));
        let pricer = DiscountingSwapProductPricer::standard();
        let product = expanded();

        let pv = pricer.present_value(&env, &product).unwrap();
        let pay = pricer
            .leg_present_value(&env, &product, PayReceive::Pay)
            .unwrap();
        let receive = pricer
            .leg_present_value(&env, &product, PayReceive::Receive)
            .unwrap();

        assert_eq!(pv.currency(), Currency::USD);
        assert_relative_eq!(
            pv.amount(),
            pay.amount() + receive.amount(),
            epsilon = 1e-9
        );
        // paying fixed: the pay leg value is negative
        assert!(pay.amount() < 0.0);
        assert!(receive.amount() > 0.0);
    }

    #[test]
    fn test_missing_discount_curve_fails() {
        let env = MarketDataEnvironment::empty(date(2006, 2, 20));
        let pricer = DiscountingSwapProductPricer::standard();
        let err = pricer.present_value(&env, &expanded()).unwrap_err();
        assert!(matches!(err, PricingError::MissingMarketData { .. }));
    }

    #[test]
    fn test_accrued_interest_mid_period() {
        // first period starts 2006-02-24; halfway through it some fixed
        // accrual has built up on the pay leg
        let valuation = date(2006, 4, 10);
        let env = MarketDataEnvironment::builder(valuation)
            .value(
                MarketDataKey::DiscountCurve(Currency::USD),
                MarketDataValue::curve(ZeroRateCurve::flat(0.05)),
            )
            .value(
                MarketDataKey::IborIndexCurve(IborIndex::UsdLibor3M),
                MarketDataValue::curve(ZeroRateCurve::flat(0.04)),
            )
            .value(
                MarketDataKey::IborFixing {
                    index: IborIndex::UsdLibor3M,
                    fixing_date: IborIndex::UsdLibor3M.fixing_date_for(date(2006, 2, 24)),
                },
                MarketDataValue::Fixing(0.045),
            )
            .build();
        let pricer = DiscountingSwapProductPricer::standard();

        let accrued = pricer.accrued_interest(&env, &expanded()).unwrap();
        assert_eq!(accrued.currency(), Currency::USD);
        // pay fixed 5.004% vs receive 4.5%: net accrued is negative
        assert!(accrued.amount() < 0.0);
    }

    #[test]
    fn test_accrued_interest_outside_schedule_is_zero() {
        let env = env(date(2000, 1, 4));
        let pricer = DiscountingSwapProductPricer::standard();
        let accrued = pricer.accrued_interest(&env, &expanded()).unwrap();
        assert_eq!(accrued.amount(), 0.0);
    }

    #[test]
    fn test_requirements_cover_curves_and_fixings() {
        let pricer = DiscountingSwapProductPricer::standard();
        let requirements = pricer.requirements(&expanded());
        assert!(requirements.contains(&MarketDataKey::DiscountCurve(Currency::USD)));
        assert!(requirements.contains(&MarketDataKey::IborIndexCurve(IborIndex::UsdLibor3M)));
        assert!(requirements
            .iter()
            .any(|k| matches!(k, MarketDataKey::IborFixing { .. })));
        // discount curve requirement deduplicated across legs
        let discount_count = requirements
            .iter()
            .filter(|k| matches!(k, MarketDataKey::DiscountCurve(_)))
            .count();
        assert_eq!(discount_count, 1);
    }

    #[test]
    fn test_known_amount_pricer_rejects_rate_periods() {
        let env = env(date(2006, 2, 20));
        let pricer = DiscountingKnownAmountPeriodPricer;
        let ExpandedProduct::Swap(swap) = expanded() else {
            unreachable!()
        };
        let period = swap.legs()[0].periods()[0];
        let err = pricer.future_value(&env, &period).unwrap_err();
        assert!(matches!(
            err,
            PricingError::UnsupportedType { type_name: "RatePaymentPeriod" }
        ));
    }
}
