//! Market data keys, values, environment and pluggable sources.
//!
//! Pricers declare what they need as typed [`MarketDataKey`]s, the engine
//! resolves those requirements into a [`MarketDataEnvironment`], and every
//! lookup that fails names its key in the resulting error. Environments
//! are immutable; adding a value produces a new environment.

pub mod environment;
pub mod key;
pub mod source;
pub mod value;

pub use environment::MarketDataEnvironment;
pub use key::MarketDataKey;
pub use source::{EmptyMarketDataSource, MarketDataSource};
pub use value::MarketDataValue;
