//! Market data values stored in the environment.

use std::sync::Arc;

use crate::curves::{CreditCurve, ZeroRateCurve};

/// A resolved item of market data.
///
/// Curves are shared behind `Arc` so that one environment can be handed to
/// many parallel pricing tasks without copying.
#[derive(Debug, Clone)]
pub enum MarketDataValue {
    /// A zero rate curve (discounting or index forwards).
    Curve(Arc<ZeroRateCurve>),
    /// A credit survival curve.
    CreditCurve(Arc<CreditCurve>),
    /// A historical index fixing.
    Fixing(f64),
    /// A recovery rate in `[0, 1]`.
    Recovery(f64),
    /// An FX rate, units of quote currency per unit of base.
    FxRate(f64),
}

impl MarketDataValue {
    /// Wraps a zero rate curve.
    pub fn curve(curve: ZeroRateCurve) -> Self {
        MarketDataValue::Curve(Arc::new(curve))
    }

    /// Wraps a credit curve.
    pub fn credit_curve(curve: CreditCurve) -> Self {
        MarketDataValue::CreditCurve(Arc::new(curve))
    }
}
