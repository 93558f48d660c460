//! Calculation rules: pricing, market data resolution and reporting.
//!
//! Rules are assembled once per run and passed by reference; nothing in
//! them mutates during calculation.

use std::sync::Arc;

use calc_core::types::Currency;
use calc_pricer::dispatch::DispatchingProductPricer;
use calc_pricer::market_data::{EmptyMarketDataSource, MarketDataSource};
use calc_pricer::ProductPricer;

/// How products are priced: the product pricer used for every trade.
#[derive(Clone)]
pub struct PricingRules {
    product_pricer: Arc<dyn ProductPricer>,
}

impl PricingRules {
    /// The standard dispatching product pricer.
    pub fn standard() -> Self {
        Self {
            product_pricer: Arc::new(DispatchingProductPricer::standard()),
        }
    }

    /// Rules over an explicit product pricer.
    pub fn of(product_pricer: Arc<dyn ProductPricer>) -> Self {
        Self { product_pricer }
    }

    /// Returns the product pricer.
    #[inline]
    pub fn product_pricer(&self) -> &Arc<dyn ProductPricer> {
        &self.product_pricer
    }
}

/// Where market data not present in the snapshot comes from.
#[derive(Clone)]
pub struct MarketDataRules {
    source: Arc<dyn MarketDataSource>,
}

impl MarketDataRules {
    /// Rules resolving through the given source.
    pub fn of(source: Arc<dyn MarketDataSource>) -> Self {
        Self { source }
    }

    /// Rules that resolve nothing beyond the snapshot.
    pub fn none() -> Self {
        Self {
            source: Arc::new(EmptyMarketDataSource),
        }
    }

    /// Returns the source.
    #[inline]
    pub fn source(&self) -> &Arc<dyn MarketDataSource> {
        &self.source
    }
}

/// The currency monetary results are reported in.
#[derive(Debug, Clone, Copy)]
pub struct ReportingRules {
    currency: Option<Currency>,
}

impl ReportingRules {
    /// Report every amount in one fixed currency.
    pub fn fixed_currency(currency: Currency) -> Self {
        Self {
            currency: Some(currency),
        }
    }

    /// Report amounts in their natural currency.
    pub fn none() -> Self {
        Self { currency: None }
    }

    /// Returns the reporting currency, if fixed.
    #[inline]
    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }
}

/// The full rule set of a calculation run.
///
/// # Examples
///
/// ```
/// use calc_engine::rules::{CalculationRules, ReportingRules};
/// use calc_core::types::Currency;
///
/// let rules = CalculationRules::builder()
///     .reporting(ReportingRules::fixed_currency(Currency::USD))
///     .build();
/// assert_eq!(rules.reporting().currency(), Some(Currency::USD));
/// ```
#[derive(Clone)]
pub struct CalculationRules {
    pricing: PricingRules,
    market_data: MarketDataRules,
    reporting: ReportingRules,
}

impl CalculationRules {
    /// Returns a builder with standard pricing, no market data source and
    /// natural-currency reporting.
    pub fn builder() -> CalculationRulesBuilder {
        CalculationRulesBuilder {
            pricing: PricingRules::standard(),
            market_data: MarketDataRules::none(),
            reporting: ReportingRules::none(),
        }
    }

    /// The default rules, as produced by an unmodified builder.
    pub fn standard() -> Self {
        Self::builder().build()
    }

    /// Returns the pricing rules.
    #[inline]
    pub fn pricing(&self) -> &PricingRules {
        &self.pricing
    }

    /// Returns the market data rules.
    #[inline]
    pub fn market_data(&self) -> &MarketDataRules {
        &self.market_data
    }

    /// Returns the reporting rules.
    #[inline]
    pub fn reporting(&self) -> &ReportingRules {
        &self.reporting
    }
}

/// Builder for [`CalculationRules`]; every part has a default.
#[derive(Clone)]
pub struct CalculationRulesBuilder {
    pricing: PricingRules,
    market_data: MarketDataRules,
    reporting: ReportingRules,
}

impl CalculationRulesBuilder {
    /// Sets the pricing rules.
    pub fn pricing(mut self, pricing: PricingRules) -> Self {
        self.pricing = pricing;
        self
    }

    /// Sets the market data rules.
    pub fn market_data(mut self, market_data: MarketDataRules) -> Self {
        self.market_data = market_data;
        self
    }

    /// Sets the reporting rules.
    pub fn reporting(mut self, reporting: ReportingRules) -> Self {
        self.reporting = reporting;
        self
    }

    /// Builds the rules.
    pub fn build(self) -> CalculationRules {
        CalculationRules {
            pricing: self.pricing,
            market_data: self.market_data,
            reporting: self.reporting,
        }
    }
}
