//! Grid columns: a measure plus optional reporting overrides.

use calc_core::types::Currency;

use crate::measure::Measure;

/// One column of a calculation grid.
///
/// # Examples
///
/// ```
/// use calc_engine::{Column, Measure};
/// use calc_core::types::Currency;
///
/// let pv = Column::of(Measure::PresentValue);
/// let pv_eur = Column::of(Measure::PresentValue).with_currency(Currency::EUR);
/// assert_eq!(pv.measure(), pv_eur.measure());
/// assert_eq!(pv_eur.reporting_currency(), Some(Currency::EUR));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    measure: Measure,
    reporting_currency: Option<Currency>,
}

impl Column {
    /// A column for a measure with no per-column overrides.
    pub fn of(measure: Measure) -> Self {
        Self {
            measure,
            reporting_currency: None,
        }
    }

    /// Overrides the reporting currency for this column only.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.reporting_currency = Some(currency);
        self
    }

    /// Returns the measure.
    #[inline]
    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Returns the per-column reporting currency override, if any.
    #[inline]
    pub fn reporting_currency(&self) -> Option<Currency> {
        self.reporting_currency
    }
}
