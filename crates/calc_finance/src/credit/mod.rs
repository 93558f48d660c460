//! Credit default swap product model.
//!
//! A [`CreditDefaultSwap`] combines general terms (reference entity or
//! index, dates, currency), a fee leg paying a periodic coupon, and the
//! protection terms triggered by a credit event.

pub mod cds;
pub mod fee;
pub mod terms;

pub use cds::{CdsFeePeriod, CreditDefaultSwap, ExpandedCds};
pub use fee::{FeeLeg, ProtectionTerms};
pub use terms::{
    BuySell, GeneralTerms, RedCode, ReferenceInformation, RestructuringClause, SeniorityLevel,
};
