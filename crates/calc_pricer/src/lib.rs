//! # calc_pricer: Market Data & Pricing Dispatch (Layer 3)
//!
//! Turns an expanded product plus a market data environment into values.
//!
//! This crate provides:
//! - Typed market data keys, immutable environments and pluggable sources
//!   (`market_data`)
//! - Zero-rate and credit survival curves (`curves`)
//! - One dispatch registry per variant family: rate observations, payment
//!   periods, products (`dispatch`)
//! - The built-in discounting swap pricer and ISDA-style CDS pricer
//!   (`pricers`)
//!
//! ## Design Principles
//!
//! - **Dispatch by tag**: pricers are looked up in a registry keyed by the
//!   variant tag; an unregistered tag is an `UnsupportedType` error, never
//!   a numeric default
//! - **Immutable environments**: adding market data yields a new
//!   environment, so parallel pricing tasks share snapshots safely
//! - **Named failures**: every missing market data item reports its key

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curves;
pub mod dispatch;
pub mod error;
pub mod market_data;
pub mod pricers;

pub use dispatch::{
    DispatchingPaymentPeriodPricer, DispatchingProductPricer, DispatchingRateObservationFn,
    PaymentPeriodPricer, ProductPricer, RateObservationFn,
};
pub use error::PricingError;
pub use market_data::{MarketDataEnvironment, MarketDataKey, MarketDataSource, MarketDataValue};
