//! Evaluation of a curve between its control points.
//!
//! Only flat segments are evaluated. A segment takes its shape from the slope
//! of its start point; when that slope is non-zero the host renders a bent
//! segment whose control-point derivation is not known here, so evaluation
//! fails with [`CurveError::UnsupportedInterpolation`] rather than guessing.

use crate::document::CurveDocument;
use crate::error::CurveError;
use crate::point::CurvePoint;

/// Slopes with a smaller magnitude are treated as flat.
pub const SLOPE_EPSILON: f64 = 1e-9;

/// Evaluates the segment from `start` to `end` at `x`.
///
/// `x` is clamped to the segment. A zero-width segment evaluates to `end.y`.
///
/// # Examples
///
/// ```
/// use curvesmith::{CurvePoint, interpolate};
///
/// let a = CurvePoint::at(0.0, 0.0);
/// let b = CurvePoint::at(2.0, 1.0);
/// assert_eq!(interpolate(&a, &b, 1.0), Ok(0.5));
///
/// let bent = CurvePoint::new(0.0, 0.0, 0.5);
/// assert!(interpolate(&bent, &b, 1.0).is_err());
/// ```
pub fn interpolate(start: &CurvePoint, end: &CurvePoint, x: f64) -> Result<f64, CurveError> {
    if start.slope.abs() >= SLOPE_EPSILON {
        return Err(CurveError::UnsupportedInterpolation { slope: start.slope });
    }

    let width = end.x - start.x;
    if width == 0.0 {
        return Ok(end.y);
    }

    let t = ((x - start.x) / width).clamp(0.0, 1.0);
    Ok(start.y + t * (end.y - start.y))
}

impl CurveDocument {
    /// Evaluates the curve at `x`, assuming points are ordered by x.
    ///
    /// Positions before the first point or after the last one take the
    /// nearest end value.
    pub fn value_at(&self, x: f64) -> Result<f64, CurveError> {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(CurveError::EmptyCurve),
        };

        if x <= first.x {
            return Ok(first.y);
        }
        if x >= last.x {
            return Ok(last.y);
        }

        self.points
            .windows(2)
            .find(|pair| pair[0].x <= x && x < pair[1].x)
            .map_or(Ok(last.y), |pair| interpolate(&pair[0], &pair[1], x))
    }
}
