//! Interest rate swap product model.
//!
//! A [`Swap`] owns a list of [`SwapLeg`]s, each pairing an accrual schedule
//! with a rate calculation (fixed or Ibor). Expansion materialises every
//! leg into dated [`PaymentPeriod`]s ready for pricing.

pub mod index;
pub mod leg;
pub mod period;
#[allow(clippy::module_inception)]
pub mod swap;

#[doc(hidden)]
pub mod test_fixtures;

pub use index::IborIndex;
pub use leg::{FixedRateCalculation, IborRateCalculation, NotionalSchedule, PayReceive, RateCalculation, SwapLeg};
pub use period::{
    KnownAmountPaymentPeriod, PaymentPeriod, PaymentPeriodKind, RateObservation,
    RateObservationKind, RatePaymentPeriod,
};
pub use swap::{ExpandedSwap, ExpandedSwapLeg, Swap};
