//! Chainable transforms over a document's points.
//!
//! Every transform mutates the document in place and returns `&mut Self`, so a
//! pipeline reads left to right in the order it is applied:
//!
//! ```
//! use curvesmith::{ClipAlgorithm, CurveDocument, CurvePoint};
//!
//! let mut doc = CurveDocument::new();
//! doc.push_points([
//!     CurvePoint::at(0.0, 0.0),
//!     CurvePoint::at(4.0, 0.5),
//!     CurvePoint::at(8.0, 0.0),
//! ]);
//! doc.fit_in_x_range(0.0, 1.0)?
//!     .clip(ClipAlgorithm::Cubic)
//!     .clamp();
//!
//! assert_eq!(doc.max_x()?, 1.0);
//! assert_eq!(doc.get(1)?.y, 0.9140625);
//! # Ok::<(), curvesmith::CurveError>(())
//! ```
//!
//! Extremum queries and range fitting fail with [`CurveError::EmptyCurve`] on a
//! document without points. Transforms that only need an extremum to reflect
//! points (`reverse`, `invert`, `double`, `mirror`) leave an empty document as is.

mod clip;
mod interpolate;

pub use clip::{ClipAlgorithm, UnknownClipAlgorithm};
pub use interpolate::{SLOPE_EPSILON, interpolate};

use crate::document::CurveDocument;
use crate::error::CurveError;
use crate::point::CurvePoint;

impl CurveDocument {
    /// Multiplies every x by `factor`.
    pub fn scale_x(&mut self, factor: f64) -> &mut Self {
        self.points.iter_mut().for_each(|p| p.x *= factor);
        self
    }

    /// Multiplies every y by `factor`.
    pub fn scale_y(&mut self, factor: f64) -> &mut Self {
        self.points.iter_mut().for_each(|p| p.y *= factor);
        self
    }

    /// Adds `offset` to every x.
    pub fn shift_x(&mut self, offset: f64) -> &mut Self {
        self.points.iter_mut().for_each(|p| p.x += offset);
        self
    }

    /// Adds `offset` to every y.
    pub fn shift_y(&mut self, offset: f64) -> &mut Self {
        self.points.iter_mut().for_each(|p| p.y += offset);
        self
    }

    /// Smallest x over all points, or [`CurveError::EmptyCurve`].
    pub fn min_x(&self) -> Result<f64, CurveError> {
        self.reduce(|p| p.x, f64::min)
    }

    /// Largest x over all points, or [`CurveError::EmptyCurve`].
    pub fn max_x(&self) -> Result<f64, CurveError> {
        self.reduce(|p| p.x, f64::max)
    }

    /// Smallest y over all points, or [`CurveError::EmptyCurve`].
    pub fn min_y(&self) -> Result<f64, CurveError> {
        self.reduce(|p| p.y, f64::min)
    }

    /// Largest y over all points, or [`CurveError::EmptyCurve`].
    pub fn max_y(&self) -> Result<f64, CurveError> {
        self.reduce(|p| p.y, f64::max)
    }

    /// Normalizes x onto `[0, max - min]`.
    ///
    /// The smallest x is moved to 0 and the largest is scaled to `max - min`.
    /// `min` itself is not added back; this matches what the host does with
    /// its own range fitting, so callers wanting `[min, max]` follow up with
    /// [`shift_x(min)`](Self::shift_x). If all points share one x they all end up at 0.
    pub fn fit_in_x_range(&mut self, min: f64, max: f64) -> Result<&mut Self, CurveError> {
        let lowest = self.min_x()?;
        self.shift_x(-lowest);
        let highest = self.max_x()?;
        if highest != 0.0 {
            self.scale_x((max - min) / highest);
        }
        Ok(self)
    }

    /// Normalizes y onto `[0, max - min]`; see [`fit_in_x_range`](Self::fit_in_x_range).
    pub fn fit_in_y_range(&mut self, min: f64, max: f64) -> Result<&mut Self, CurveError> {
        let lowest = self.min_y()?;
        self.shift_y(-lowest);
        let highest = self.max_y()?;
        if highest != 0.0 {
            self.scale_y((max - min) / highest);
        }
        Ok(self)
    }

    /// Appends `other`'s points, shifted right by this curve's largest x.
    ///
    /// An empty `other` changes nothing; an empty receiver takes `other`'s
    /// points without offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use curvesmith::CurveDocument;
    ///
    /// let mut ramp = CurveDocument::new();
    /// ramp.add_point((0.0, 0.0)).add_point((1.0, 1.0));
    /// let tail = ramp.clone();
    /// ramp.splice_curve(&tail);
    ///
    /// let xs: Vec<f64> = ramp.points().iter().map(|p| p.x).collect();
    /// assert_eq!(xs, [0.0, 1.0, 1.0, 2.0]);
    /// ```
    ///
    /// # Notes
    ///
    /// The offset is exactly the receiver's largest x, so the first spliced
    /// point lands on top of the receiver's last x rather than one step after it.
    pub fn splice_curve(&mut self, other: &CurveDocument) -> &mut Self {
        let offset = match self.max_x() {
            Ok(max) => max,
            Err(_) => {
                self.points = other.points.clone();
                return self;
            }
        };
        self.points.extend(
            other
                .points
                .iter()
                .map(|p| CurvePoint::new(p.x + offset, p.y, p.slope)),
        );
        self
    }

    /// Appends points in iteration order.
    ///
    /// Accepts anything convertible into a [`CurvePoint`], including the
    /// `(x, y)` and `(x, y, slope)` tuples. Several sequences can be pushed at
    /// once by chaining iterators.
    ///
    /// # Examples
    ///
    /// ```
    /// use curvesmith::CurveDocument;
    ///
    /// let mut doc = CurveDocument::new();
    /// doc.push_points([(0.0, 0.0), (1.0, 1.0)])
    ///     .push_points([(2.0, 0.5, -0.25)]);
    /// assert_eq!(doc.point_count(), 3);
    /// assert_eq!(doc.get(2).unwrap().slope, -0.25);
    /// ```
    pub fn push_points<I, P>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<CurvePoint>,
    {
        self.points.extend(points.into_iter().map(Into::into));
        self
    }

    /// Inserts `point` before the first point with a strictly greater x,
    /// or at the end. Equal x values are kept side by side.
    pub fn insert_point_at_x(&mut self, point: impl Into<CurvePoint>) -> &mut Self {
        let point = point.into();
        match self.points.iter().position(|p| p.x > point.x) {
            Some(index) => self.points.insert(index, point),
            None => self.points.push(point),
        }
        self
    }

    /// Stable ascending sort by x.
    pub fn sort(&mut self) -> &mut Self {
        self.points.sort_by(|a, b| a.x.total_cmp(&b.x));
        self
    }

    /// Mirrors the curve left to right within its x domain (`x' = maxX - x`).
    pub fn reverse(&mut self) -> &mut Self {
        if let Ok(max) = self.max_x() {
            self.points.reverse();
            self.points.iter_mut().for_each(|p| p.x = max - p.x);
        }
        self
    }

    /// Flips the curve vertically about its largest y (`y' = maxY - y`).
    pub fn invert(&mut self) -> &mut Self {
        if let Ok(max) = self.max_y() {
            self.points.iter_mut().for_each(|p| p.y = max - p.y);
        }
        self
    }

    /// Halves the x scale, then splices a copy of the halved curve after itself.
    pub fn double(&mut self) -> &mut Self {
        self.scale_x(0.5);
        let copy = self.clone();
        self.splice_curve(&copy)
    }

    /// Halves the x scale, then splices a reversed copy of the halved curve
    /// after itself.
    pub fn mirror(&mut self) -> &mut Self {
        self.scale_x(0.5);
        let mut reflected = self.clone();
        reflected.reverse();
        self.splice_curve(&reflected)
    }

    /// Applies `transform` `times` times in sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use curvesmith::CurveDocument;
    ///
    /// let mut doc = CurveDocument::new();
    /// doc.add_point((0.0, 0.0)).add_point((1.0, 1.0));
    /// doc.repeat(2, |d| {
    ///     d.double();
    /// });
    /// assert_eq!(doc.point_count(), 8);
    /// assert_eq!(doc.max_x().unwrap(), 1.0);
    /// ```
    pub fn repeat<F>(&mut self, times: usize, mut transform: F) -> &mut Self
    where
        F: FnMut(&mut CurveDocument),
    {
        for _ in 0..times {
            transform(self);
        }
        self
    }

    /// Shapes every y with `algorithm`.
    pub fn clip(&mut self, algorithm: ClipAlgorithm) -> &mut Self {
        self.points
            .iter_mut()
            .for_each(|p| p.y = algorithm.apply(p.y));
        self
    }

    /// Shapes every y with the algorithm called `name`.
    ///
    /// Unknown names leave the points untouched.
    pub fn clip_named(&mut self, name: &str) -> &mut Self {
        match name.parse::<ClipAlgorithm>() {
            Ok(algorithm) => self.clip(algorithm),
            Err(err) => {
                tracing::warn!("{}, leaving curve unchanged", err);
                self
            }
        }
    }

    /// Forces y into [0, 1] and slope into [-1, 1]. x is untouched.
    ///
    /// A NaN y or slope becomes 0, so every point is in range afterwards.
    /// Infinities saturate to the nearest bound.
    pub fn clamp(&mut self) -> &mut Self {
        self.points.iter_mut().for_each(|p| {
            p.y = clamp_or_zero(p.y, 0.0, 1.0);
            p.slope = clamp_or_zero(p.slope, -1.0, 1.0);
        });
        self
    }

    /// Replaces each point with `f(point, index, points)`.
    ///
    /// `points` is the sequence as it was before the pass started.
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&CurvePoint, usize, &[CurvePoint]) -> CurvePoint,
    {
        let snapshot = &self.points;
        let mapped: Vec<CurvePoint> = snapshot
            .iter()
            .enumerate()
            .map(|(i, p)| f(p, i, snapshot))
            .collect();
        self.points = mapped;
        self
    }

    /// Keeps the points for which `predicate(point, index, points)` holds.
    ///
    /// `points` is the sequence as it was before the pass started.
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&CurvePoint, usize, &[CurvePoint]) -> bool,
    {
        let snapshot = &self.points;
        let kept: Vec<CurvePoint> = snapshot
            .iter()
            .enumerate()
            .filter(|(i, p)| predicate(*p, *i, snapshot))
            .map(|(_, p)| *p)
            .collect();
        self.points = kept;
        self
    }

    fn reduce(
        &self,
        coordinate: impl Fn(&CurvePoint) -> f64,
        pick: fn(f64, f64) -> f64,
    ) -> Result<f64, CurveError> {
        self.points
            .iter()
            .map(coordinate)
            .reduce(pick)
            .ok_or(CurveError::EmptyCurve)
    }
}

fn clamp_or_zero(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}
