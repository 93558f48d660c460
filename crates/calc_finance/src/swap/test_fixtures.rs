//! Shared swap fixtures for tests and doctests.

use calc_core::date::{BusinessDayAdjustment, BusinessDayConvention, DaysAdjustment, HolidayCalendar};
use calc_core::types::{Currency, Date, DayCount};

use super::index::IborIndex;
use super::leg::{
    FixedRateCalculation, IborRateCalculation, NotionalSchedule, PayReceive, RateCalculation,
    SwapLeg,
};
use super::swap::Swap;
use crate::schedules::{Frequency, PeriodicSchedule};

/// A USD 12m fixed-vs-3M-Libor swap: pay fixed 5.004% ACT/360, receive
/// USD-LIBOR-3M, quarterly accrual 2006-02-24 to 2011-02-24.
pub fn vanilla_usd_swap() -> Swap {
    let adjustment = BusinessDayAdjustment::of(
        BusinessDayConvention::ModifiedFollowing,
        HolidayCalendar::Usny,
    );
    let accrual = PeriodicSchedule::builder()
        .start(Date::from_ymd(2006, 2, 24).expect("valid date"))
        .end(Date::from_ymd(2011, 2, 24).expect("valid date"))
        .frequency(Frequency::Quarterly)
        .adjustment(adjustment)
        .build()
        .expect("valid schedule");
    let notional = NotionalSchedule::of(Currency::USD, 12_000_000.0).expect("valid notional");
    let payment_offset = DaysAdjustment::of_business_days(2, HolidayCalendar::Usny);

    let pay_leg = SwapLeg::builder()
        .pay_receive(PayReceive::Pay)
        .accrual_schedule(accrual.clone())
        .payment_offset(payment_offset.clone())
        .notional(notional)
        .calculation(RateCalculation::Fixed(FixedRateCalculation::of(
            0.05004,
            DayCount::Act360,
        )))
        .build()
        .expect("valid leg");

    let receive_leg = SwapLeg::builder()
        .pay_receive(PayReceive::Receive)
        .accrual_schedule(accrual)
        .payment_offset(payment_offset)
        .notional(notional)
        .calculation(RateCalculation::Ibor(IborRateCalculation::of(
            IborIndex::UsdLibor3M,
        )))
        .build()
        .expect("valid leg");

    Swap::of(vec![pay_leg, receive_leg]).expect("valid swap")
}
