//! Pricing dispatch: one registry per variant family.
//!
//! Each level of pricing (rate observation, payment period, product) is a
//! trait plus a dispatching implementation holding a registry from the
//! variant tag to a boxed pricer. `standard()` pre-registers the
//! built-ins; `new(map)` substitutes or extends them for testing and
//! configuration. A tag with no registration is always a
//! [`PricingError::UnsupportedType`](crate::error::PricingError), never a
//! numeric default.

pub mod observation;
pub mod period;
pub mod product;

pub use observation::{
    DispatchingRateObservationFn, FixedRateObservationFn, ForwardIborRateObservationFn,
    RateObservationFn,
};
pub use period::{DispatchingPaymentPeriodPricer, PaymentPeriodPricer};
pub use product::{DispatchingProductPricer, ProductPricer};
