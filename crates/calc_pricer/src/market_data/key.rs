//! Typed market data requirements.

use std::fmt;

use calc_core::types::{Currency, Date};
use calc_finance::credit::RedCode;
use calc_finance::swap::IborIndex;

/// A typed key naming one item of market data.
///
/// Keys are what pricers report as requirements and what the environment
/// is indexed by. The `Display` form appears in `MissingMarketData`
/// errors, so it stays short and unambiguous.
///
/// # Examples
///
/// ```
/// use calc_pricer::market_data::MarketDataKey;
/// use calc_core::types::Currency;
///
/// let key = MarketDataKey::DiscountCurve(Currency::USD);
/// assert_eq!(key.to_string(), "DiscountCurve:USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarketDataKey {
    /// The discount curve for a currency.
    DiscountCurve(Currency),
    /// The forward curve for an Ibor index.
    IborIndexCurve(IborIndex),
    /// A historical index fixing on a specific date.
    IborFixing {
        /// The index fixed.
        index: IborIndex,
        /// The fixing date.
        fixing_date: Date,
    },
    /// The credit (survival) curve of a reference entity in a currency.
    CreditCurve {
        /// The entity or index RED code.
        red_code: RedCode,
        /// The curve currency.
        currency: Currency,
    },
    /// The recovery rate assumed for a reference entity.
    RecoveryRate {
        /// The entity or index RED code.
        red_code: RedCode,
    },
    /// The FX rate quoted as units of `quote` per unit of `base`.
    FxRate {
        /// The base currency.
        base: Currency,
        /// The quote currency.
        quote: Currency,
    },
}

impl fmt::Display for MarketDataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataKey::DiscountCurve(ccy) => write!(f, "DiscountCurve:{ccy}"),
            MarketDataKey::IborIndexCurve(index) => write!(f, "IborIndexCurve:{index}"),
            MarketDataKey::IborFixing { index, fixing_date } => {
                write!(f, "IborFixing:{index}:{fixing_date}")
            }
            MarketDataKey::CreditCurve { red_code, currency } => {
                write!(f, "CreditCurve:{red_code}:{currency}")
            }
            MarketDataKey::RecoveryRate { red_code } => write!(f, "RecoveryRate:{red_code}"),
            MarketDataKey::FxRate { base, quote } => write!(f, "FxRate:{base}/{quote}"),
        }
    }
}
