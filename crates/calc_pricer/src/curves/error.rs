//! Curve construction and evaluation errors.

use thiserror::Error;

/// An error raised while building or evaluating a curve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// A curve needs at least one node.
    #[error("curve requires at least one node")]
    EmptyCurve,

    /// Node times and values must have equal length.
    #[error("curve has {times} node times but {values} values")]
    LengthMismatch {
        /// Number of node times supplied.
        times: usize,
        /// Number of node values supplied.
        values: usize,
    },

    /// Node times must be non-negative and strictly increasing.
    #[error("curve node times must be non-negative and strictly increasing")]
    UnsortedNodes,

    /// Curves are only defined for non-negative year fractions.
    #[error("curve queried at negative time {time}")]
    NegativeTime {
        /// The offending year fraction.
        time: f64,
    },

    /// A forward rate needs a strictly positive interval.
    #[error("forward rate interval [{start}, {end}] is empty or inverted")]
    InvalidInterval {
        /// Interval start year fraction.
        start: f64,
        /// Interval end year fraction.
        end: f64,
    },
}
