//! Discount and credit curves.
//!
//! Curves are pure functions of a year fraction measured from the
//! valuation date (ACT/365F by convention). They are built once, shared
//! behind `Arc` inside the market data environment, and never mutated.

pub mod credit;
pub mod error;
pub mod zero;

pub use credit::CreditCurve;
pub use error::CurveError;
pub use zero::ZeroRateCurve;
