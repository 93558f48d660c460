//! Pricing error taxonomy.
//!
//! Three failure families cover everything the pricing layer can report:
//! a dispatch miss ([`PricingError::UnsupportedType`]), an absent market
//! data item ([`PricingError::MissingMarketData`]) and a wrapped internal
//! failure ([`PricingError::Calculation`]). Construction-time validation
//! lives in `calc_finance` and never reaches this layer.

use thiserror::Error;

/// An error raised while pricing an expanded product.
#[derive(Debug, Error)]
pub enum PricingError {
    /// No pricer or function is registered for the given variant tag.
    ///
    /// Dispatch misses are always surfaced; there is no numeric default.
    #[error("no pricer registered for type '{type_name}'")]
    UnsupportedType {
        /// The stable type name of the unhandled variant.
        type_name: &'static str,
    },

    /// A market data item required by the calculation is absent.
    #[error("missing market data: {key}")]
    MissingMarketData {
        /// Display form of the missing key.
        key: String,
    },

    /// A calculation failed internally; the originating cause is preserved.
    #[error("calculation failed: {context}")]
    Calculation {
        /// What was being computed when the failure occurred.
        context: String,
        /// The underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl PricingError {
    /// Wraps an underlying error with the context of the failed calculation.
    pub fn calculation(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PricingError::Calculation {
            context: context.into(),
            source: Box::new(source),
        }
    }
}
