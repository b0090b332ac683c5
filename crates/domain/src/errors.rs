//! Domain-level errors

use thiserror::Error;

/// Errors raised while building an EV function curve
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// The curve has no data points
    #[error("Curve must contain at least one data point")]
    Empty,

    /// Text is not a comma-separated list of number pairs
    #[error("Malformed curve: {0}")]
    Malformed(String),

    /// A value is NaN, infinite or negative
    #[error("Curve value at point {index} must be finite and non-negative")]
    InvalidValue {
        /// Index of the offending point
        index: usize,
    },

    /// Independent values are not strictly increasing
    #[error("Curve input at point {index} ({value}) must be greater than {previous}")]
    NotIncreasing {
        /// Index of the offending point
        index: usize,
        /// Input value at `index`
        value: f64,
        /// Input value at `index - 1`
        previous: f64,
    },
}
