//! End-to-end expansion of a vanilla fixed-vs-Libor swap.

use calc_core::types::{Currency, Date};
use calc_finance::product::{Product, ProductKind};
use calc_finance::swap::{
    PayReceive, PaymentPeriod, RateObservation, test_fixtures::vanilla_usd_swap,
};
use calc_finance::trade::{StandardId, Trade, TradeInfo};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn vanilla_swap_expands_to_quarterly_legs() {
    let expanded = vanilla_usd_swap().expand().unwrap();

    // five years of quarterly accrual on each leg
    for leg in expanded.legs() {
        assert_eq!(leg.periods().len(), 20);
        assert_eq!(leg.currency(), Currency::USD);
        assert_eq!(leg.notional(), 12_000_000.0);
    }

    let pay = expanded.leg(PayReceive::Pay).unwrap();
    for period in pay.periods() {
        let PaymentPeriod::Rate(p) = period else {
            panic!("expected rate payment period");
        };
        assert!(matches!(p.observation(), RateObservation::Fixed { .. }));
        // payment two business days after accrual end
        assert!(p.payment_date() > p.end());
    }

    let receive = expanded.leg(PayReceive::Receive).unwrap();
    for period in receive.periods() {
        let PaymentPeriod::Rate(p) = period else {
            panic!("expected rate payment period");
        };
        let RateObservation::Ibor { fixing_date, .. } = p.observation() else {
            panic!("expected ibor observation");
        };
        assert!(*fixing_date < p.start());
    }
}

#[test]
fn swap_trade_reports_product_kind() {
    let trade = Trade::builder()
        .standard_id(StandardId::of("mn", "14248").unwrap())
        .info(TradeInfo::builder().trade_date(date(2006, 2, 24)).build())
        .product(Product::Swap(vanilla_usd_swap()))
        .build()
        .unwrap();
    assert_eq!(trade.product().kind(), ProductKind::Swap);
    assert_eq!(trade.product().expand().unwrap().kind(), ProductKind::Swap);
}

#[test]
fn maturity_tracks_final_payment() {
    let expanded = vanilla_usd_swap().expand().unwrap();
    let maturity = expanded.maturity_date().unwrap();
    assert!(maturity >= date(2011, 2, 24));
    assert!(maturity <= date(2011, 3, 4));
}
