//! Products as a closed tagged variant.
//!
//! Every trade holds exactly one [`Product`]. The [`ProductKind`] tag is
//! what pricer registries key on, so adding a product means adding a
//! variant here and a pricer entry there, with the compiler pointing at
//! every match that needs updating.

use std::fmt;

use crate::credit::{CreditDefaultSwap, ExpandedCds};
use crate::schedules::ScheduleError;
use crate::swap::{ExpandedSwap, Swap};

/// Dispatch tag identifying the kind of product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProductKind {
    /// An interest rate swap.
    Swap,
    /// A credit default swap on a single reference entity.
    CdsSingleName,
    /// A credit default swap on a credit index.
    CdsIndex,
}

impl ProductKind {
    /// Returns the stable name used in dispatch error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ProductKind::Swap => "Swap",
            ProductKind::CdsSingleName => "CdsSingleName",
            ProductKind::CdsIndex => "CdsIndex",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A financial product: the economic terms of a position, without trade
/// identity.
///
/// # Examples
///
/// ```
/// use calc_finance::product::{Product, ProductKind};
///
/// let product = Product::Swap(calc_finance::swap::test_fixtures::vanilla_usd_swap());
/// assert_eq!(product.kind(), ProductKind::Swap);
/// let expanded = product.expand().unwrap();
/// assert_eq!(expanded.kind(), ProductKind::Swap);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Product {
    /// An interest rate swap.
    Swap(Swap),
    /// A credit default swap, single-name or index.
    CreditDefaultSwap(CreditDefaultSwap),
}

impl Product {
    /// Returns the dispatch tag for this product.
    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Swap(_) => ProductKind::Swap,
            Product::CreditDefaultSwap(cds) => {
                if cds.is_index() {
                    ProductKind::CdsIndex
                } else {
                    ProductKind::CdsSingleName
                }
            }
        }
    }

    /// Expands the product into its fully dated form.
    ///
    /// Deterministic: depends only on the product value.
    pub fn expand(&self) -> Result<ExpandedProduct, ScheduleError> {
        match self {
            Product::Swap(swap) => Ok(ExpandedProduct::Swap(swap.expand()?)),
            Product::CreditDefaultSwap(cds) => {
                Ok(ExpandedProduct::CreditDefaultSwap(cds.expand()?))
            }
        }
    }
}

/// A product with all schedules materialised into dated periods.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpandedProduct {
    /// An expanded interest rate swap.
    Swap(ExpandedSwap),
    /// An expanded credit default swap.
    CreditDefaultSwap(ExpandedCds),
}

impl ExpandedProduct {
    /// Returns the dispatch tag for this expanded product.
    pub fn kind(&self) -> ProductKind {
        match self {
            ExpandedProduct::Swap(_) => ProductKind::Swap,
            // 9-character RED codes identify indices, 6-character ones
            // single names; RedCode admits no other lengths.
            ExpandedProduct::CreditDefaultSwap(cds) => {
                if cds.red_code().as_str().len() == 9 {
                    ProductKind::CdsIndex
                } else {
                    ProductKind::CdsSingleName
                }
            }
        }
    }
}
