//! Calculation errors attached to individual grid cells.

use calc_finance::product::ProductKind;
use calc_finance::schedules::ScheduleError;
use calc_pricer::PricingError;
use thiserror::Error;

use crate::measure::Measure;

/// Why one cell of a calculation grid could not be computed.
///
/// A cell error never aborts the run; it is stored in the grid where the
/// value would have been.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// The pricing layer failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Expanding the product into dated periods failed.
    #[error(transparent)]
    Expansion(#[from] ScheduleError),

    /// The measure does not apply to this kind of product.
    #[error("measure {measure} is not supported for {product}")]
    UnsupportedMeasure {
        /// The requested measure.
        measure: Measure,
        /// The product kind it was requested for.
        product: ProductKind,
    },

    /// The trade lacks a piece of optional data the measure needs.
    #[error("trade has no {field}")]
    MissingTradeData {
        /// The absent field.
        field: &'static str,
    },
}
