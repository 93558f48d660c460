//! Payment period pricers and their dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use calc_finance::swap::{PaymentPeriod, PaymentPeriodKind};

use crate::error::PricingError;
use crate::market_data::MarketDataEnvironment;
use crate::pricers::swap::{DiscountingKnownAmountPeriodPricer, DiscountingRatePaymentPeriodPricer};

/// Prices a single payment period.
///
/// Both operations are pure: the same environment and period always yield
/// the same value.
pub trait PaymentPeriodPricer: Send + Sync {
    /// The value of the period discounted to the valuation date.
    fn present_value(
        &self,
        env: &MarketDataEnvironment,
        period: &PaymentPeriod,
    ) -> Result<f64, PricingError>;

    /// The undiscounted value of the period at its payment date.
    fn future_value(
        &self,
        env: &MarketDataEnvironment,
        period: &PaymentPeriod,
    ) -> Result<f64, PricingError>;
}

/// Routes each period to the pricer registered for its tag.
///
/// # Examples
///
/// ```
/// use calc_pricer::dispatch::DispatchingPaymentPeriodPricer;
/// use std::collections::HashMap;
///
/// // the standard dispatcher knows every built-in period kind
/// let _standard = DispatchingPaymentPeriodPricer::standard();
/// // an empty registry rejects everything with UnsupportedType
/// let _empty = DispatchingPaymentPeriodPricer::new(HashMap::new());
/// ```
pub struct DispatchingPaymentPeriodPricer {
    pricers: HashMap<PaymentPeriodKind, Arc<dyn PaymentPeriodPricer>>,
}

impl DispatchingPaymentPeriodPricer {
    /// A dispatcher with the built-in period pricers registered.
    pub fn standard() -> Self {
        let mut pricers: HashMap<PaymentPeriodKind, Arc<dyn PaymentPeriodPricer>> = HashMap::new();
        pricers.insert(
            PaymentPeriodKind::RatePayment,
            Arc::new(DiscountingRatePaymentPeriodPricer::standard()),
        );
        pricers.insert(
            PaymentPeriodKind::KnownAmount,
            Arc::new(DiscountingKnownAmountPeriodPricer),
        );
        Self { pricers }
    }

    /// A dispatcher over an explicit registry.
    pub fn new(pricers: HashMap<PaymentPeriodKind, Arc<dyn PaymentPeriodPricer>>) -> Self {
        Self { pricers }
    }

    fn lookup(&self, kind: PaymentPeriodKind) -> Result<&Arc<dyn PaymentPeriodPricer>, PricingError> {
        self.pricers
            .get(&kind)
            .ok_or(PricingError::UnsupportedType {
                type_name: kind.type_name(),
            })
    }
}

impl PaymentPeriodPricer for DispatchingPaymentPeriodPricer {
    fn present_value(
        &self,
        env: &MarketDataEnvironment,
        period: &PaymentPeriod,
    ) -> Result<f64, PricingError> {
        self.lookup(period.kind())?.present_value(env, period)
    }

    fn future_value(
        &self,
        env: &MarketDataEnvironment,
        period: &PaymentPeriod,
    ) -> Result<f64, PricingError> {
        self.lookup(period.kind())?.future_value(env, period)
    }
}
