//! Cell values and the immutable results grid.

use std::fmt;

use calc_core::types::{CurrencyAmount, Date};
use calc_finance::trade::StandardId;

use crate::column::Column;
use crate::error::CalculationError;
use crate::measure::Measure;

/// The value of one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A monetary amount.
    Amount(CurrencyAmount),
    /// A bare number.
    Numeric(f64),
    /// A date.
    Date(Date),
    /// An identifier.
    Id(StandardId),
    /// Free text.
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Amount(amount) => amount.fmt(f),
            CellValue::Numeric(value) => value.fmt(f),
            CellValue::Date(date) => date.fmt(f),
            CellValue::Id(id) => id.fmt(f),
            CellValue::Text(text) => f.write_str(text),
        }
    }
}

/// One computed cell: a value or the reason it is absent.
pub type CellResult = Result<CellValue, CalculationError>;

/// The immutable output grid of a calculation run.
///
/// Shape invariant: one row per input trade in input order, every row has
/// one cell per column, and every cell is populated with either a value
/// or an error.
#[derive(Debug)]
pub struct Results {
    columns: Vec<Column>,
    rows: Vec<Vec<CellResult>>,
}

impl Results {
    pub(crate) fn new(columns: Vec<Column>, rows: Vec<Vec<CellResult>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    /// Returns the number of rows (input trades).
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the columns in grid order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the cell at a row and column, if in range.
    pub fn get(&self, row: usize, column: usize) -> Option<&CellResult> {
        self.rows.get(row)?.get(column)
    }

    /// Returns the index of the first column computing a measure.
    pub fn column_index(&self, measure: Measure) -> Option<usize> {
        self.columns.iter().position(|c| c.measure() == measure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::types::Currency;

    #[test]
    fn test_display_forms() {
        assert_eq!(
            CellValue::Amount(CurrencyAmount::of(Currency::USD, 1234.5)).to_string(),
            "USD 1234.50"
        );
        assert_eq!(
            CellValue::Date(Date::from_ymd(2014, 6, 20).unwrap()).to_string(),
            "2014-06-20"
        );
        assert_eq!(
            CellValue::Id(StandardId::of("trade", "1").unwrap()).to_string(),
            "trade~1"
        );
    }

    #[test]
    fn test_grid_shape_and_lookup() {
        let columns = vec![
            Column::of(Measure::Id),
            Column::of(Measure::PresentValue),
        ];
        let rows = vec![vec![
            Ok(CellValue::Text("a".to_string())),
            Err(CalculationError::MissingTradeData { field: "x" }),
        ]];
        let results = Results::new(columns, rows);

        assert_eq!(results.row_count(), 1);
        assert_eq!(results.column_count(), 2);
        assert_eq!(results.column_index(Measure::PresentValue), Some(1));
        assert_eq!(results.column_index(Measure::Notional), None);
        assert!(results.get(0, 0).unwrap().is_ok());
        assert!(results.get(0, 1).unwrap().is_err());
        assert!(results.get(1, 0).is_none());
    }
}
