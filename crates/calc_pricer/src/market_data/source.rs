//! Pluggable market data resolution.

use calc_core::types::Date;

use super::key::MarketDataKey;
use super::value::MarketDataValue;

/// A provider that can resolve market data keys on demand.
///
/// The engine consults a source for every requirement not already present
/// in the snapshot environment. Implementations must be idempotent:
/// resolving the same key twice, possibly concurrently, must yield the
/// same value.
pub trait MarketDataSource: Send + Sync {
    /// Resolves a key as of a valuation date, or `None` when the source
    /// has no data for it.
    fn resolve(&self, key: &MarketDataKey, valuation_date: Date) -> Option<MarketDataValue>;
}

/// A source that resolves nothing; the default when no source is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyMarketDataSource;

impl MarketDataSource for EmptyMarketDataSource {
    fn resolve(&self, _key: &MarketDataKey, _valuation_date: Date) -> Option<MarketDataValue> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::types::Currency;

    #[test]
    fn test_empty_source_resolves_nothing() {
        let source = EmptyMarketDataSource;
        let key = MarketDataKey::DiscountCurve(Currency::USD);
        let date = Date::from_ymd(2014, 1, 22).unwrap();
        assert!(source.resolve(&key, date).is_none());
    }
}
