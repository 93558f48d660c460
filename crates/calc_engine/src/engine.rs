//! The calculation engine: trades × columns → results grid.

use calc_core::types::{Currency, CurrencyAmount, Date};
use calc_finance::product::{ExpandedProduct, ProductKind};
use calc_finance::swap::PayReceive;
use calc_finance::trade::Trade;
use calc_pricer::market_data::{MarketDataEnvironment, MarketDataKey};
use rayon::prelude::*;

use crate::column::Column;
use crate::error::CalculationError;
use crate::measure::Measure;
use crate::results::{CellResult, CellValue, Results};
use crate::rules::CalculationRules;

/// Evaluates a grid of measures over a portfolio of trades.
///
/// A run never aborts: every failure is captured in the cell it belongs
/// to and the output grid is always fully populated, one row per input
/// trade in input order.
///
/// # Examples
///
/// ```
/// use calc_engine::{CalculationEngine, Column, Measure};
/// use calc_engine::rules::CalculationRules;
/// use calc_pricer::market_data::MarketDataEnvironment;
/// use calc_core::types::Date;
///
/// let engine = CalculationEngine::new();
/// let results = engine.calculate(
///     &[],
///     &[Column::of(Measure::Id)],
///     &CalculationRules::standard(),
///     &MarketDataEnvironment::empty(Date::from_ymd(2014, 1, 22).unwrap()),
/// );
/// assert_eq!(results.row_count(), 0);
/// assert_eq!(results.column_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculationEngine;

impl CalculationEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Calculates every column for every trade.
    ///
    /// Market data requirements are gathered up front and resolved once
    /// through the rules' source; rows are then evaluated in parallel,
    /// each expanding its product exactly once.
    pub fn calculate(
        &self,
        trades: &[Trade],
        columns: &[Column],
        rules: &CalculationRules,
        market_data: &MarketDataEnvironment,
    ) -> Results {
        let span = tracing::debug_span!(
            "calculate",
            trades = trades.len(),
            columns = columns.len(),
            valuation_date = %market_data.valuation_date(),
        );
        let _guard = span.enter();

        let requirements = self.gather_requirements(trades, columns, rules);
        tracing::debug!(requirements = requirements.len(), "resolving market data");
        let env = market_data.resolved(&requirements, rules.market_data().source().as_ref());

        let rows: Vec<Vec<CellResult>> = trades
            .par_iter()
            .map(|trade| self.calculate_row(trade, columns, rules, &env))
            .collect();

        let failed = rows.iter().flatten().filter(|cell| cell.is_err()).count();
        if failed > 0 {
            tracing::warn!(failed_cells = failed, "calculation finished with failures");
        } else {
            tracing::info!("calculation finished");
        }
        Results::new(columns.to_vec(), rows)
    }

    fn gather_requirements(
        &self,
        trades: &[Trade],
        columns: &[Column],
        rules: &CalculationRules,
    ) -> Vec<MarketDataKey> {
        let pricer = rules.pricing().product_pricer();
        let mut keys: Vec<MarketDataKey> = Vec::new();
        let mut push = |key: MarketDataKey, keys: &mut Vec<MarketDataKey>| {
            if !keys.contains(&key) {
                keys.push(key);
            }
        };

        for trade in trades {
            let Ok(expanded) = trade.product().expand() else {
                // the expansion failure is reported per cell during the run
                continue;
            };
            for key in pricer.requirements(&expanded) {
                push(key, &mut keys);
            }
            if let Some(base) = product_currency(&expanded) {
                for column in columns {
                    let target = column
                        .reporting_currency()
                        .or(rules.reporting().currency());
                    if let Some(quote) = target {
                        if quote != base {
                            push(MarketDataKey::FxRate { base, quote }, &mut keys);
                        }
                    }
                }
            }
        }
        keys
    }

    fn calculate_row(
        &self,
        trade: &Trade,
        columns: &[Column],
        rules: &CalculationRules,
        env: &MarketDataEnvironment,
    ) -> Vec<CellResult> {
        let expanded = match trade.product().expand() {
            Ok(expanded) => expanded,
            Err(e) => {
                tracing::warn!(trade = %trade.standard_id(), error = %e, "product expansion failed");
                return columns
                    .iter()
                    .map(|_| Err(CalculationError::Expansion(e.clone())))
                    .collect();
            }
        };
        columns
            .iter()
            .map(|column| self.calculate_cell(trade, &expanded, column, rules, env))
            .collect()
    }

    fn calculate_cell(
        &self,
        trade: &Trade,
        expanded: &ExpandedProduct,
        column: &Column,
        rules: &CalculationRules,
        env: &MarketDataEnvironment,
    ) -> CellResult {
        let pricer = rules.pricing().product_pricer();
        let kind = expanded.kind();
        let value = match column.measure() {
            Measure::Id => CellValue::Id(trade.standard_id().clone()),
            Measure::Counterparty => trade
                .info()
                .counterparty()
                .cloned()
                .map(CellValue::Id)
                .ok_or(CalculationError::MissingTradeData {
                    field: "counterparty",
                })?,
            Measure::TradeDate => trade
                .info()
                .trade_date()
                .map(CellValue::Date)
                .ok_or(CalculationError::MissingTradeData { field: "trade_date" })?,
            Measure::SettlementDate => trade
                .info()
                .settlement_date()
                .map(CellValue::Date)
                .ok_or(CalculationError::MissingTradeData {
                    field: "settlement_date",
                })?,
            Measure::MaturityDate => product_maturity(expanded)
                .map(CellValue::Date)
                .ok_or(CalculationError::MissingTradeData {
                    field: "maturity_date",
                })?,
            Measure::Notional => product_notional(expanded)
                .map(CellValue::Amount)
                .ok_or(CalculationError::MissingTradeData { field: "notional" })?,
            Measure::PresentValue => CellValue::Amount(pricer.present_value(env, expanded)?),
            Measure::PresentValuePayLeg => {
                self.require_swap(column.measure(), kind)?;
                CellValue::Amount(pricer.leg_present_value(env, expanded, PayReceive::Pay)?)
            }
            Measure::PresentValueReceiveLeg => {
                self.require_swap(column.measure(), kind)?;
                CellValue::Amount(pricer.leg_present_value(env, expanded, PayReceive::Receive)?)
            }
            Measure::AccruedInterest => {
                self.require_swap(column.measure(), kind)?;
                CellValue::Amount(pricer.accrued_interest(env, expanded)?)
            }
        };
        self.report(value, column, rules, env)
    }

    fn require_swap(&self, measure: Measure, kind: ProductKind) -> Result<(), CalculationError> {
        if kind == ProductKind::Swap {
            Ok(())
        } else {
            Err(CalculationError::UnsupportedMeasure {
                measure,
                product: kind,
            })
        }
    }

    /// Converts amount cells into the effective reporting currency.
    fn report(
        &self,
        value: CellValue,
        column: &Column,
        rules: &CalculationRules,
        env: &MarketDataEnvironment,
    ) -> CellResult {
        let Some(target) = column
            .reporting_currency()
            .or(rules.reporting().currency())
        else {
            return Ok(value);
        };
        match value {
            CellValue::Amount(amount) if amount.currency() != target => {
                let rate = env.fx_rate(amount.currency(), target)?;
                Ok(CellValue::Amount(amount.converted_to(target, rate)))
            }
            other => Ok(other),
        }
    }
}

fn product_currency(product: &ExpandedProduct) -> Option<Currency> {
    match product {
        ExpandedProduct::Swap(swap) => swap.currency(),
        ExpandedProduct::CreditDefaultSwap(cds) => Some(cds.currency()),
    }
}

fn product_maturity(product: &ExpandedProduct) -> Option<Date> {
    match product {
        ExpandedProduct::Swap(swap) => swap.maturity_date(),
        ExpandedProduct::CreditDefaultSwap(cds) => Some(cds.maturity_date()),
    }
}

fn product_notional(product: &ExpandedProduct) -> Option<CurrencyAmount> {
    match product {
        ExpandedProduct::Swap(swap) => {
            let currency = swap.currency()?;
            Some(CurrencyAmount::of(currency, swap.notional()?))
        }
        ExpandedProduct::CreditDefaultSwap(cds) => Some(CurrencyAmount::of(
            cds.currency(),
            cds.protection_notional(),
        )),
    }
}
