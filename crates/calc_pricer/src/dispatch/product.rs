//! Product pricers and their dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use calc_core::types::CurrencyAmount;
use calc_finance::product::{ExpandedProduct, ProductKind};
use calc_finance::swap::PayReceive;

use crate::error::PricingError;
use crate::market_data::{MarketDataEnvironment, MarketDataKey};
use crate::pricers::credit::IsdaCdsProductPricer;
use crate::pricers::swap::DiscountingSwapProductPricer;

/// Prices a whole expanded product.
///
/// The leg and accrual entry points only make sense for swap-like
/// products; the defaults reject other kinds so a concrete pricer opts in
/// by overriding them.
pub trait ProductPricer: Send + Sync {
    /// The market data this product needs to be priced.
    fn requirements(&self, product: &ExpandedProduct) -> Vec<MarketDataKey>;

    /// The present value of the product in its own currency.
    fn present_value(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
    ) -> Result<CurrencyAmount, PricingError>;

    /// The present value of one swap leg, signed by its direction.
    fn leg_present_value(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
        pay_receive: PayReceive,
    ) -> Result<CurrencyAmount, PricingError> {
        let _ = (env, pay_receive);
        Err(PricingError::UnsupportedType {
            type_name: product.kind().type_name(),
        })
    }

    /// Interest accrued in the period containing the valuation date.
    fn accrued_interest(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
    ) -> Result<CurrencyAmount, PricingError> {
        let _ = env;
        Err(PricingError::UnsupportedType {
            type_name: product.kind().type_name(),
        })
    }
}

/// Routes each product to the pricer registered for its kind.
pub struct DispatchingProductPricer {
    pricers: HashMap<ProductKind, Arc<dyn ProductPricer>>,
}

impl DispatchingProductPricer {
    /// A dispatcher with the built-in product pricers registered: the
    /// discounting swap pricer and the ISDA-style CDS pricer for both CDS
    /// kinds.
    pub fn standard() -> Self {
        let mut pricers: HashMap<ProductKind, Arc<dyn ProductPricer>> = HashMap::new();
        pricers.insert(
            ProductKind::Swap,
            Arc::new(DiscountingSwapProductPricer::standard()),
        );
        let cds_pricer: Arc<dyn ProductPricer> = Arc::new(IsdaCdsProductPricer::standard());
        pricers.insert(ProductKind::CdsSingleName, Arc::clone(&cds_pricer));
        pricers.insert(ProductKind::CdsIndex, cds_pricer);
        Self { pricers }
    }

    /// A dispatcher over an explicit registry.
    pub fn new(pricers: HashMap<ProductKind, Arc<dyn ProductPricer>>) -> Self {
        Self { pricers }
    }

    fn lookup(&self, kind: ProductKind) -> Result<&Arc<dyn ProductPricer>, PricingError> {
        self.pricers.get(&kind).ok_or(PricingError::UnsupportedType {
            type_name: kind.type_name(),
        })
    }
}

impl ProductPricer for DispatchingProductPricer {
    fn requirements(&self, product: &ExpandedProduct) -> Vec<MarketDataKey> {
        match self.lookup(product.kind()) {
            Ok(pricer) => pricer.requirements(product),
            // an unpriceable product has no requirements; the miss is
            // reported when a value is asked for
            Err(_) => Vec::new(),
        }
    }

    fn present_value(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
    ) -> Result<CurrencyAmount, PricingError> {
        self.lookup(product.kind())?.present_value(env, product)
    }

    fn leg_present_value(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
        pay_receive: PayReceive,
    ) -> Result<CurrencyAmount, PricingError> {
        self.lookup(product.kind())?
            .leg_present_value(env, product, pay_receive)
    }

    fn accrued_interest(
        &self,
        env: &MarketDataEnvironment,
        product: &ExpandedProduct,
    ) -> Result<CurrencyAmount, PricingError> {
        self.lookup(product.kind())?.accrued_interest(env, product)
    }
}
