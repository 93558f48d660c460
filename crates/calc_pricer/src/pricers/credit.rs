//! ISDA-style credit default swap pricer.

use calc_core::types::CurrencyAmount;
use calc_finance::credit::ExpandedCds;
use calc_finance::product::ExpandedProduct;

use crate::dispatch::product::ProductPricer;
use crate::error::PricingError;
use crate::market_data::{MarketDataEnvironment, MarketDataKey};

/// Prices a credit default swap from a survival curve and recovery rate.
///
/// Premium leg: sum over fee periods of
/// `coupon × year_fraction × notional × df(payment) × survival(end)`.
/// Protection leg: `(1 − recovery) × notional` times the sum of
/// `df(end) × default_probability(start, end)` over the same periods.
/// The present value is the protection leg minus the premium leg, signed
/// by the buy/sell direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsdaCdsProductPricer;

impl IsdaCdsProductPricer {
    /// The standard pricer; stateless, so this is the only configuration.
    pub fn standard() -> Self {
        Self
    }

    fn premium_leg(
        &self,
        env: &MarketDataEnvironment,
        cds: &ExpandedCds,
    ) -> Result<f64, PricingError> {
        let discount = env.discount_curve(cds.currency())?;
        let credit = env.credit_curve(cds.red_code(), cds.currency())?;
        let valuation = env.valuation_date();

        let mut pv = 0.0;
        for period in cds.fee_periods() {
            if period.payment_date <= valuation {
                continue;
            }
            let df = discount
                .discount_factor(env.time_to(period.payment_date))
                .map_err(|e| PricingError::calculation("premium discount factor", e))?;
            let survival = credit
                .survival_probability(env.time_to(period.end))
                .map_err(|e| PricingError::calculation("survival probability", e))?;
            pv += period.coupon * period.year_fraction * period.notional * df * survival;
        }
        Ok(pv)
    }

    fn protection_leg(
        &self,
        env: &MarketDataEnvironment,
        cds: &ExpandedCds,
    ) -> Result<f64, PricingError> {
        let discount = env.discount_curve(cds.currency())?;
        let credit = env.credit_curve(cds.red_code(), cds.currency())?;
        let recovery = env.recovery_rate(cds.red_code())?;
        let valuation = env.valuation_date();

        let mut expected_loss = 0.0;
        for period in cds.fee_periods() {
            if period.end <= valuation {
                continue;
            }
            let t_end = env.time_to(period.end);
            let df = discount
                .discount_factor(t_end)
                .map_err(|e| PricingError::calculation("protection discount factor", e))?;
            let default_prob = credit
                .default_probability(env.time_to(period.start), t_end)
                .map_err(|e| PricingError::calculation("default probability", e))?;
            expected_loss += df * default_prob;
        }
        Ok((1.0 - recovery) * cds.protection_notional() * expected_loss)
    }
}

fn expect_cds(product: &ExpandedProduct) -> Result<&ExpandedCds, PricingError> {
    match product {
        ExpandedProduct::CreditDefaultSwap(cds) => Ok(cds),
        other => Err(PricingError::UnsupportedType {
            type_name: other.kind().type_name(),
        }),
    }
}

impl ProductPricer for IsdaCdsProductPricer {
    fn requirements(&self, product: &ExpandedProduct) -> Vec<MarketDataKey> {
        let Ok(cds) = expect_cds(product) else {
            return Vec::new();
        };
        vec![
            MarketDataKey::DiscountCurve(cds.currency()),
            MarketDataKey::CreditCurve {
                red_code: cds.red_code().clone(),
                currency: cds.currency(),
            },
            MarketDataKey::RecoveryRate {
                red_code: cds.red_code().clone(),
            },
        ]
    }

    fn present_value(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
    ) -> Result<CurrencyAmount, PricingError> {
        let cds = expect_cds(product)?;
        let premium = self.premium_leg(env, cds)?;
        let protection = self.protection_leg(env, cds)?;
        let pv = cds.buy_sell().protection_multiplier() * protection
            + cds.buy_sell().premium_multiplier() * premium;
        Ok(CurrencyAmount::of(cds.currency(), pv))
    }
}
