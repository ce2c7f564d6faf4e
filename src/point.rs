//! Curve control points.

/// A single control point of a curve.
///
/// The host application expects `y` in [0, 1] and `slope` in [-1, 1], but
/// nothing here enforces that; use [`CurveDocument::clamp`](crate::CurveDocument::clamp)
/// before encoding if the source data may stray outside those ranges.
///
/// # Examples
///
/// ```
/// use curvesmith::CurvePoint;
///
/// let p = CurvePoint::new(0.5, 1.0, -0.25);
/// assert_eq!(p.slope, -0.25);
///
/// let flat = CurvePoint::at(1.0, 0.0);
/// assert_eq!(flat.slope, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
    pub slope: f64,
}

impl CurvePoint {
    /// Creates a point from all three components.
    pub const fn new(x: f64, y: f64, slope: f64) -> Self {
        Self { x, y, slope }
    }

    /// Creates a point with zero slope.
    pub const fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::at(x, y)
    }
}

impl From<(f64, f64, f64)> for CurvePoint {
    fn from((x, y, slope): (f64, f64, f64)) -> Self {
        Self::new(x, y, slope)
    }
}

/// Output of a converter passed to [`CurveDocument::set_points`](crate::CurveDocument::set_points).
///
/// The slope is optional and defaults to `0.0` when the point is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointSpec {
    pub x: f64,
    pub y: f64,
    pub slope: Option<f64>,
}

impl PointSpec {
    /// A point without slope information.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, slope: None }
    }

    /// Sets the slope.
    pub const fn with_slope(mut self, slope: f64) -> Self {
        self.slope = Some(slope);
        self
    }
}

impl From<(f64, f64)> for PointSpec {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for PointSpec {
    fn from((x, y, slope): (f64, f64, f64)) -> Self {
        Self::new(x, y).with_slope(slope)
    }
}

impl From<PointSpec> for CurvePoint {
    fn from(spec: PointSpec) -> Self {
        Self::new(spec.x, spec.y, spec.slope.unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_point() {
        assert_eq!(CurvePoint::default(), CurvePoint::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_tuples() {
        assert_eq!(CurvePoint::from((1.0, 0.5)), CurvePoint::new(1.0, 0.5, 0.0));
        assert_eq!(
            CurvePoint::from((1.0, 0.5, 0.3)),
            CurvePoint::new(1.0, 0.5, 0.3)
        );
    }

    #[test]
    fn test_point_spec_slope_defaults_to_zero() {
        let point: CurvePoint = PointSpec::new(2.0, 0.25).into();
        assert_eq!(point, CurvePoint::new(2.0, 0.25, 0.0));

        let point: CurvePoint = PointSpec::from((2.0, 0.25, -1.0)).into();
        assert_eq!(point.slope, -1.0);
    }
}
