//! Trade identity and metadata.

use std::fmt;

use calc_core::types::Date;

use crate::error::ValidationError;
use crate::product::Product;

/// A two-part identifier: a scheme (namespace) and a value unique within it.
///
/// # Examples
///
/// ```
/// use calc_finance::trade::StandardId;
///
/// let id = StandardId::of("trade", "673676").unwrap();
/// assert_eq!(id.to_string(), "trade~673676");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardId {
    scheme: String,
    value: String,
}

impl StandardId {
    /// Creates an identifier, rejecting empty parts and a `~` in the scheme.
    pub fn of(scheme: &str, value: &str) -> Result<Self, ValidationError> {
        if scheme.is_empty() {
            return Err(ValidationError::MissingField { field: "scheme" });
        }
        if value.is_empty() {
            return Err(ValidationError::MissingField { field: "value" });
        }
        if scheme.contains('~') {
            return Err(ValidationError::InvalidField {
                field: "scheme",
                reason: format!("scheme '{scheme}' must not contain '~'"),
            });
        }
        Ok(Self {
            scheme: scheme.to_string(),
            value: value.to_string(),
        })
    }

    /// Returns the scheme.
    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.scheme, self.value)
    }
}

/// Additional information attached to a trade.
///
/// All fields are optional; a missing settlement date simply means the
/// measure asking for it fails for that trade, not that the trade is
/// invalid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeInfo {
    counterparty: Option<StandardId>,
    trade_date: Option<Date>,
    settlement_date: Option<Date>,
}

impl TradeInfo {
    /// Returns a builder with no fields set.
    pub fn builder() -> TradeInfoBuilder {
        TradeInfoBuilder::default()
    }

    /// An empty trade info.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the counterparty identifier, if known.
    #[inline]
    pub fn counterparty(&self) -> Option<&StandardId> {
        self.counterparty.as_ref()
    }

    /// Returns the trade date, if known.
    #[inline]
    pub fn trade_date(&self) -> Option<Date> {
        self.trade_date
    }

    /// Returns the settlement date, if known.
    #[inline]
    pub fn settlement_date(&self) -> Option<Date> {
        self.settlement_date
    }
}

/// Builder for [`TradeInfo`].
#[derive(Debug, Clone, Default)]
pub struct TradeInfoBuilder {
    counterparty: Option<StandardId>,
    trade_date: Option<Date>,
    settlement_date: Option<Date>,
}

impl TradeInfoBuilder {
    /// Sets the counterparty identifier.
    pub fn counterparty(mut self, counterparty: StandardId) -> Self {
        self.counterparty = Some(counterparty);
        self
    }

    /// Sets the trade date.
    pub fn trade_date(mut self, trade_date: Date) -> Self {
        self.trade_date = Some(trade_date);
        self
    }

    /// Sets the settlement date.
    pub fn settlement_date(mut self, settlement_date: Date) -> Self {
        self.settlement_date = Some(settlement_date);
        self
    }

    /// Builds the trade info. All fields are optional, so this cannot fail.
    pub fn build(self) -> TradeInfo {
        TradeInfo {
            counterparty: self.counterparty,
            trade_date: self.trade_date,
            settlement_date: self.settlement_date,
        }
    }
}

/// A trade: an identified position in exactly one product.
///
/// Immutable after construction; the builder rejects a missing identifier
/// or product, so every constructed trade is well-formed.
///
/// # Examples
///
/// ```
/// use calc_finance::trade::{StandardId, Trade, TradeInfo};
/// use calc_finance::product::Product;
/// use calc_finance::swap::Swap;
///
/// # fn make_swap() -> Swap { calc_finance::swap::test_fixtures::vanilla_usd_swap() }
/// let trade = Trade::builder()
///     .standard_id(StandardId::of("mn", "14248").unwrap())
///     .product(Product::Swap(make_swap()))
///     .info(TradeInfo::empty())
///     .build()
///     .unwrap();
///
/// assert_eq!(trade.standard_id().to_string(), "mn~14248");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    standard_id: StandardId,
    info: TradeInfo,
    product: Product,
}

impl Trade {
    /// Returns a builder with no fields set.
    pub fn builder() -> TradeBuilder {
        TradeBuilder::default()
    }

    /// Returns the trade identifier.
    #[inline]
    pub fn standard_id(&self) -> &StandardId {
        &self.standard_id
    }

    /// Returns the trade information.
    #[inline]
    pub fn info(&self) -> &TradeInfo {
        &self.info
    }

    /// Returns the product this trade holds.
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }
}

/// Builder for [`Trade`], validating on `build`.
#[derive(Debug, Clone, Default)]
pub struct TradeBuilder {
    standard_id: Option<StandardId>,
    info: TradeInfo,
    product: Option<Product>,
}

impl TradeBuilder {
    /// Sets the trade identifier (required).
    pub fn standard_id(mut self, id: StandardId) -> Self {
        self.standard_id = Some(id);
        self
    }

    /// Sets the trade information; defaults to empty.
    pub fn info(mut self, info: TradeInfo) -> Self {
        self.info = info;
        self
    }

    /// Sets the product (required).
    pub fn product(mut self, product: Product) -> Self {
        self.product = Some(product);
        self
    }

    /// Validates required fields and builds the trade.
    pub fn build(self) -> Result<Trade, ValidationError> {
        let standard_id = self
            .standard_id
            .ok_or(ValidationError::MissingField { field: "standard_id" })?;
        let product = self
            .product
            .ok_or(ValidationError::MissingField { field: "product" })?;
        Ok(Trade {
            standard_id,
            info: self.info,
            product,
        })
    }
}
