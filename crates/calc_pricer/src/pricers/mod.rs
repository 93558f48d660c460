//! Built-in pricer implementations.

pub mod credit;
pub mod swap;

pub use credit::IsdaCdsProductPricer;
pub use swap::{
    DiscountingKnownAmountPeriodPricer, DiscountingRatePaymentPeriodPricer,
    DiscountingSwapProductPricer,
};
