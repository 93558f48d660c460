//! Dispatch behaviour across the full pricing stack.

use std::collections::HashMap;
use std::sync::Arc;

use approx::assert_relative_eq;
use calc_core::types::{Currency, Date};
use calc_finance::product::ExpandedProduct;
use calc_finance::swap::{test_fixtures::vanilla_usd_swap, IborIndex, PaymentPeriodKind, PayReceive};
use calc_pricer::curves::ZeroRateCurve;
use calc_pricer::dispatch::{
    DispatchingPaymentPeriodPricer, DispatchingProductPricer, PaymentPeriodPricer, ProductPricer,
};
use calc_pricer::market_data::{MarketDataEnvironment, MarketDataKey, MarketDataValue};
use calc_pricer::pricers::swap::DiscountingRatePaymentPeriodPricer;
use calc_pricer::PricingError;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn swap_env() -> MarketDataEnvironment {
    MarketDataEnvironment::builder(date(2006, 2, 20))
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

#[test]
fn registered_pricer_value_passes_through_unchanged() {
    let env = swap_env();
    let expanded = vanilla_usd_swap().expand().unwrap();
    let period = expanded.legs()[0].periods()[0];

    let direct = DiscountingRatePaymentPeriodPricer::standard();
    let mut registry: HashMap<PaymentPeriodKind, Arc<dyn PaymentPeriodPricer>> = HashMap::new();
    registry.insert(
        PaymentPeriodKind::RatePayment,
        Arc::new(DiscountingRatePaymentPeriodPricer::standard()),
    );
    let dispatcher = DispatchingPaymentPeriodPricer::new(registry);

    assert_relative_eq!(
        dispatcher.present_value(&env, &period).unwrap(),
        direct.present_value(&env, &period).unwrap(),
    );
    assert_relative_eq!(
        dispatcher.future_value(&env, &period).unwrap(),
        direct.future_value(&env, &period).unwrap(),
    );
}

#[test]
fn empty_registry_rejects_every_period() {
    let env = swap_env();
    let expanded = vanilla_usd_swap().expand().unwrap();
    let period = expanded.legs()[0].periods()[0];

    let dispatcher = DispatchingPaymentPeriodPricer::new(HashMap::new());
    assert!(matches!(
        dispatcher.present_value(&env, &period),
        Err(PricingError::UnsupportedType { type_name: "RatePaymentPeriod" })
    ));
    assert!(matches!(
        dispatcher.future_value(&env, &period),
        Err(PricingError::UnsupportedType { type_name: "RatePaymentPeriod" })
    ));
}

#[test]
fn fixed_and_ibor_legs_route_to_their_observation_functions() {
    let env = swap_env();
    let product = ExpandedProduct::Swap(vanilla_usd_swap().expand().unwrap());
    let pricer = DispatchingProductPricer::standard();

    // with a flat 4% forward curve and a 5.004% fixed coupon, both leg
    // values are present and the fixed leg is worth more in magnitude
    let pay = pricer
        .leg_present_value(&env, &product, PayReceive::Pay)
        .unwrap();
    let receive = pricer
        .leg_present_value(&env, &product, PayReceive::Receive)
        .unwrap();
    assert!(pay.amount() < 0.0);
    assert!(receive.amount() > 0.0);
    assert!(pay.amount().abs() > receive.amount().abs());

    let pv = pricer.present_value(&env, &product).unwrap();
    assert_relative_eq!(
        pv.amount(),
        pay.amount() + receive.amount(),
        epsilon = 1e-9
    );
}

#[test]
fn product_dispatch_honours_substituted_registry() {
    struct ZeroPricer;
    impl ProductPricer for ZeroPricer {
        fn requirements(&self, _product: &ExpandedProduct) -> Vec<MarketDataKey> {
            Vec::new()
        }

        fn present_value(
            &self,
            _env: &MarketDataEnvironment,
            product: &ExpandedProduct,
        ) -> Result<calc_core::types::CurrencyAmount, PricingError> {
            let _ = product;
            Ok(calc_core::types::CurrencyAmount::zero(Currency::USD))
        }
    }

    let mut registry: HashMap<calc_finance::product::ProductKind, Arc<dyn ProductPricer>> =
        HashMap::new();
    registry.insert(calc_finance::product::ProductKind::Swap, Arc::new(ZeroPricer));
    let pricer = DispatchingProductPricer::new(registry);

    let env = swap_env();
    let product = ExpandedProduct::Swap(vanilla_usd_swap().expand().unwrap());
    let pv = pricer.present_value(&env, &product).unwrap();
    assert_eq!(pv.amount(), 0.0);
}
