//! # calc_engine: Calculation Orchestration (Layer 4)
//!
//! Evaluates a grid of measures over a portfolio of trades: one row per
//! trade, one column per measure, every cell either a value or the error
//! that prevented it.
//!
//! This crate provides:
//! - The closed measure catalogue and grid columns (`measure`, `column`)
//! - Per-run rules for pricing, market data and reporting (`rules`)
//! - The immutable results grid (`results`)
//! - The parallel calculation engine (`engine`)
//!
//! ## Design Principles
//!
//! - **No partial aborts**: a failing cell is stored as an error; the grid
//!   shape never depends on which cells succeed
//! - **Order preservation**: rows come back in input order regardless of
//!   parallel completion order
//! - **Expand once per row**: a trade's product is expanded a single time
//!   and shared by all of its cells

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod column;
pub mod engine;
pub mod error;
pub mod measure;
pub mod results;
pub mod rules;

pub use column::Column;
pub use engine::CalculationEngine;
pub use error::CalculationError;
pub use measure::Measure;
pub use results::{CellResult, CellValue, Results};
pub use rules::CalculationRules;
