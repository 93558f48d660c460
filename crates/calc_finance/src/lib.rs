//! # calc_finance: Trade & Product Model (Layer 2)
//!
//! Immutable value objects describing trades and the products they wrap,
//! plus the schedule and convention machinery needed to expand a product
//! into its fully dated, priceable form.
//!
//! This crate provides:
//! - Trade identity and metadata (`trade`)
//! - Products as a closed tagged variant: interest rate swap, single-name
//!   and index credit default swap (`product`, `swap`, `credit`)
//! - Periodic schedule generation (`schedules`)
//! - Named convention bundles and their registry (`conventions`)
//!
//! ## Design Principles
//!
//! - **Enum-based products** for a single, centrally testable dispatch tag
//! - **Validating builders**: invalid trades, conventions and schedules are
//!   unrepresentable after construction
//! - **Deterministic expansion**: `Product::expand` depends only on the
//!   product value, never on hidden state

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod conventions;
pub mod credit;
pub mod error;
pub mod product;
pub mod schedules;
pub mod swap;
pub mod trade;

pub use error::ValidationError;
pub use product::{ExpandedProduct, Product, ProductKind};
pub use trade::{StandardId, Trade, TradeInfo};
