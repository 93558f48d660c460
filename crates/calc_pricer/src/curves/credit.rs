//! Survival curves for credit pricing.

use super::error::CurveError;

/// A survival curve parameterised by average hazard rates.
///
/// `survival_probability(t) = exp(-h(t) * t)` where `h` is linearly
/// interpolated between nodes, flat beyond them. A single-node curve is a
/// flat hazard curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditCurve {
    times: Vec<f64>,
    hazards: Vec<f64>,
}

impl CreditCurve {
    /// A flat hazard rate curve.
    pub fn flat(hazard_rate: f64) -> Self {
        Self {
            times: vec![0.0],
            hazards: vec![hazard_rate],
        }
    }

    /// A curve interpolating `(time, average hazard rate)` nodes.
    pub fn of_nodes(times: Vec<f64>, hazards: Vec<f64>) -> Result<Self, CurveError> {
        if times.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        if times.len() != hazards.len() {
            return Err(CurveError::LengthMismatch {
                times: times.len(),
                values: hazards.len(),
            });
        }
        let sorted = times[0] >= 0.0 && times.windows(2).all(|w| w[0] < w[1]);
        if !sorted {
            return Err(CurveError::UnsortedNodes);
        }
        Ok(Self { times, hazards })
    }

    /// Probability that the reference survives to year fraction `t`.
    pub fn survival_probability(&self, t: f64) -> Result<f64, CurveError> {
        if t < 0.0 || t.is_nan() {
            return Err(CurveError::NegativeTime { time: t });
        }
        Ok((-self.interpolate(t) * t).exp())
    }

    /// Probability of default within `[t1, t2]`, seen from today.
    pub fn default_probability(&self, t1: f64, t2: f64) -> Result<f64, CurveError> {
        if t2 < t1 {
            return Err(CurveError::InvalidInterval { start: t1, end: t2 });
        }
        Ok(self.survival_probability(t1)? - self.survival_probability(t2)?)
    }

    fn interpolate(&self, t: f64) -> f64 {
        let times = &self.times;
        let hazards = &self.hazards;
        if t <= times[0] {
            return hazards[0];
        }
        let last = times.len() - 1;
        if t >= times[last] {
            return hazards[last];
        }
        let hi = times.partition_point(|&node| node < t);
        let lo = hi - 1;
        let weight = (t - times[lo]) / (times[hi] - times[lo]);
        hazards[lo] + weight * (hazards[hi] - hazards[lo])
    }
}
