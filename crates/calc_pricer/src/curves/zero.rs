//! Continuously-compounded zero rate curves.

use super::error::CurveError;

/// A curve of continuously-compounded zero rates over year fractions.
///
/// Rates are linearly interpolated between nodes and extrapolated flat
/// beyond the first and last node, which makes a single-node curve a flat
/// curve.
///
/// # Examples
///
/// ```
/// use calc_pricer::curves::ZeroRateCurve;
///
/// let curve = ZeroRateCurve::flat(0.05);
/// assert!((curve.discount_factor(0.0).unwrap() - 1.0).abs() < 1e-15);
/// assert!((curve.discount_factor(1.0).unwrap() - (-0.05f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroRateCurve {
    times: Vec<f64>,
    rates: Vec<f64>,
}

impl ZeroRateCurve {
    /// A flat curve at a single zero rate.
    pub fn flat(rate: f64) -> Self {
        Self {
            times: vec![0.0],
            rates: vec![rate],
        }
    }

    /// A curve interpolating the given `(time, zero rate)` nodes.
    ///
    /// Times must be non-negative and strictly increasing.
    pub fn of_nodes(times: Vec<f64>, rates: Vec<f64>) -> Result<Self, CurveError> {
        if times.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        if times.len() != rates.len() {
            return Err(CurveError::LengthMismatch {
                times: times.len(),
                values: rates.len(),
            });
        }
        let sorted = times[0] >= 0.0 && times.windows(2).all(|w| w[0] < w[1]);
        if !sorted {
            return Err(CurveError::UnsortedNodes);
        }
        Ok(Self { times, rates })
    }

    /// Returns the zero rate at year fraction `t`.
    pub fn zero_rate(&self, t: f64) -> Result<f64, CurveError> {
        if t < 0.0 || t.is_nan() {
            return Err(CurveError::NegativeTime { time: t });
        }
        Ok(self.interpolate(t))
    }

    /// Returns the discount factor `exp(-r(t) * t)`.
    ///
    /// `discount_factor(0) == 1` and factors are strictly positive.
    pub fn discount_factor(&self, t: f64) -> Result<f64, CurveError> {
        Ok((-self.zero_rate(t)? * t).exp())
    }

    /// Returns the continuously-compounded forward rate over `[t1, t2]`.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> Result<f64, CurveError> {
        if t1 < 0.0 || t1.is_nan() {
            return Err(CurveError::NegativeTime { time: t1 });
        }
        if t2 <= t1 || t2.is_nan() {
            return Err(CurveError::InvalidInterval { start: t1, end: t2 });
        }
        let r1 = self.interpolate(t1);
        let r2 = self.interpolate(t2);
        Ok((r2 * t2 - r1 * t1) / (t2 - t1))
    }

    fn interpolate(&self, t: f64) -> f64 {
        let times = &self.times;
        let rates = &self.rates;
        if t <= times[0] {
            return rates[0];
        }
        let last = times.len() - 1;
        if t >= times[last] {
            return rates[last];
        }
        // times are strictly increasing, so a bracketing pair exists
        let hi = times.partition_point(|&node| node < t);
        let lo = hi - 1;
        let weight = (t - times[lo]) / (times[hi] - times[lo]);
        rates[lo] + weight * (rates[hi] - rates[lo])
    }
}
