//! Error type for curve model and transform operations.

use thiserror::Error;

/// Failures raised by [`CurveDocument`](crate::CurveDocument) accessors and
/// pipeline operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// An extremum or range-fitting operation was invoked on a curve with no points.
    #[error("curve has no points")]
    EmptyCurve,

    /// A point index was outside `0..len`.
    #[error("point index {index} out of range for curve with {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// Evaluation of a segment whose start point carries a non-zero slope.
    #[error("interpolation of sloped segments is not supported (slope {slope})")]
    UnsupportedInterpolation { slope: f64 },
}
