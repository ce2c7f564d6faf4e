//! The curve document: an ordered point sequence plus metadata.

use crate::error::CurveError;
use crate::metadata::{CurveCategory, CurveMetadata};
use crate::point::{CurvePoint, PointSpec};

/// An ordered sequence of [`CurvePoint`]s with descriptive metadata.
///
/// The document owns all of its storage, so [`Clone`] yields a fully
/// independent copy. Mutating methods return `&mut Self` so edits and
/// transforms (see [`crate::transform`]) can be chained; they apply in call order.
///
/// Point access is bounds-checked the same way everywhere: [`get`](Self::get)
/// and [`remove_point`](Self::remove_point) both fail with
/// [`CurveError::IndexOutOfRange`] instead of silently doing nothing.
///
/// # Examples
///
/// ```
/// use curvesmith::{CurveCategory, CurveDocument, CurvePoint};
///
/// let mut doc = CurveDocument::new();
/// doc.set_name("Ramp")
///     .set_category(CurveCategory::Lookup)
///     .add_point(CurvePoint::at(0.0, 0.0))
///     .add_point(CurvePoint::at(1.0, 1.0));
///
/// assert_eq!(doc.point_count(), 2);
/// assert_eq!(doc.get(1).unwrap().y, 1.0);
/// assert!(doc.get(2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveDocument {
    metadata: CurveMetadata,
    pub(crate) points: Vec<CurvePoint>,
}

impl CurveDocument {
    /// Creates an empty document with default metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from existing parts.
    pub fn from_parts(metadata: CurveMetadata, points: Vec<CurvePoint>) -> Self {
        Self { metadata, points }
    }

    /// Appends a point.
    pub fn add_point(&mut self, point: impl Into<CurvePoint>) -> &mut Self {
        self.points.push(point.into());
        self
    }

    /// Removes and returns the point at `index`.
    pub fn remove_point(&mut self, index: usize) -> Result<CurvePoint, CurveError> {
        self.check_index(index)?;
        Ok(self.points.remove(index))
    }

    /// Replaces every point with the converted elements of `source`.
    ///
    /// The converter receives each element, its index and the whole source
    /// slice. Previous points are discarded in full, so calling this again
    /// with another converter leaves no trace of the first conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use curvesmith::{CurveDocument, PointSpec};
    ///
    /// let samples = [0.0, 0.5, 1.0];
    /// let mut doc = CurveDocument::new();
    /// doc.set_points(&samples, |s, i, all| {
    ///     PointSpec::new(i as f64 / (all.len() - 1) as f64, *s)
    /// });
    ///
    /// assert_eq!(doc.point_count(), 3);
    /// assert_eq!(doc.get(1).unwrap().x, 0.5);
    /// assert_eq!(doc.get(1).unwrap().slope, 0.0);
    /// ```
    pub fn set_points<T, F, P>(&mut self, source: &[T], mut converter: F) -> &mut Self
    where
        F: FnMut(&T, usize, &[T]) -> P,
        P: Into<PointSpec>,
    {
        self.points = source
            .iter()
            .enumerate()
            .map(|(i, element)| {
                let spec: PointSpec = converter(element, i, source).into();
                CurvePoint::from(spec)
            })
            .collect();
        self
    }

    /// Returns the point at `index`.
    pub fn get(&self, index: usize) -> Result<&CurvePoint, CurveError> {
        self.check_index(index)?;
        Ok(&self.points[index])
    }

    /// All points in document order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Whether the document has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Name, authorship, category and tags.
    pub fn metadata(&self) -> &CurveMetadata {
        &self.metadata
    }

    /// Mutable access to all metadata fields at once.
    pub fn metadata_mut(&mut self) -> &mut CurveMetadata {
        &mut self.metadata
    }

    /// Display name, carried in the trailer.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.metadata.name = name.into();
        self
    }

    /// Author credited in the host's browser.
    pub fn creator(&self) -> &str {
        &self.metadata.creator
    }

    pub fn set_creator(&mut self, creator: impl Into<String>) -> &mut Self {
        self.metadata.creator = creator.into();
        self
    }

    /// Free-form comment. The host caps it at
    /// [`TEXT_SOFT_LIMIT`](crate::metadata::TEXT_SOFT_LIMIT) characters.
    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.metadata.description = description.into();
        self
    }

    /// Category, which also selects the encoded curve kind.
    pub fn category(&self) -> CurveCategory {
        self.metadata.category
    }

    pub fn set_category(&mut self, category: CurveCategory) -> &mut Self {
        self.metadata.category = category;
        self
    }

    /// Tags in insertion order, duplicates included.
    pub fn tags(&self) -> &[String] {
        &self.metadata.tags
    }

    /// Replaces all tags.
    pub fn set_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a tag. Duplicates are accepted as-is.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.metadata.tags.push(tag.into());
        self
    }

    /// Removes every occurrence of `tag`. Removing an absent tag does nothing.
    pub fn remove_tag(&mut self, tag: &str) -> &mut Self {
        self.metadata.tags.retain(|t| t != tag);
        self
    }

    fn check_index(&self, index: usize) -> Result<(), CurveError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(CurveError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> CurveDocument {
        let mut doc = CurveDocument::new();
        doc.add_point((0.0, 0.0)).add_point((1.0, 1.0));
        doc
    }

    #[test]
    fn test_new_document_is_empty() {
        let doc = CurveDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.point_count(), 0);
        assert_eq!(doc.name(), "Untitled");
    }

    #[test]
    fn test_add_and_get() {
        let doc = ramp();
        assert_eq!(doc.point_count(), 2);
        assert_eq!(doc.get(0), Ok(&CurvePoint::at(0.0, 0.0)));
        assert_eq!(
            doc.get(5),
            Err(CurveError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_remove_point() {
        let mut doc = ramp();
        assert_eq!(doc.remove_point(0), Ok(CurvePoint::at(0.0, 0.0)));
        assert_eq!(doc.points(), &[CurvePoint::at(1.0, 1.0)]);
    }

    #[test]
    fn test_remove_point_out_of_range_fails_and_leaves_points() {
        let mut doc = ramp();
        assert_eq!(
            doc.remove_point(2),
            Err(CurveError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(doc.point_count(), 2);

        let mut empty = CurveDocument::new();
        assert!(empty.remove_point(0).is_err());
    }

    #[test]
    fn test_set_points_replaces_previous() {
        let mut doc = ramp();
        let source = ["a", "bb", "ccc"];
        doc.set_points(&source, |s, i, _| (i as f64, s.len() as f64, 0.5));
        assert_eq!(doc.point_count(), 3);
        assert_eq!(doc.get(2).unwrap(), &CurvePoint::new(2.0, 3.0, 0.5));

        doc.set_points(&source[..1], |_, i, all| (i as f64, all.len() as f64));
        assert_eq!(doc.points(), &[CurvePoint::at(0.0, 1.0)]);
    }

    #[test]
    fn test_set_points_sees_whole_source() {
        let mut doc = CurveDocument::new();
        let samples = [2.0, 4.0];
        doc.set_points(&samples, |s, _, all| {
            let total: f64 = all.iter().sum();
            PointSpec::new(*s, s / total)
        });
        assert_eq!(doc.get(0).unwrap().y, 2.0 / 6.0);
    }

    #[test]
    fn test_metadata_setters_chain() {
        let mut doc = CurveDocument::new();
        doc.set_name("Swell")
            .set_creator("me")
            .set_description("slow rise")
            .set_category(CurveCategory::Periodic);

        assert_eq!(doc.name(), "Swell");
        assert_eq!(doc.creator(), "me");
        assert_eq!(doc.description(), "slow rise");
        assert_eq!(doc.category(), CurveCategory::Periodic);
    }

    #[test]
    fn test_tags() {
        let mut doc = CurveDocument::new();
        doc.add_tag("pad").add_tag("slow").add_tag("pad");
        assert_eq!(doc.tags(), &["pad", "slow", "pad"]);

        doc.remove_tag("missing");
        assert_eq!(doc.tags().len(), 3);

        doc.remove_tag("pad");
        assert_eq!(doc.tags(), &["slow"]);

        doc.set_tags(["a", "b"]);
        assert_eq!(doc.tags(), &["a", "b"]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = ramp();
        let mut copy = original.clone();
        copy.add_point((2.0, 0.0)).set_name("copy").add_tag("x");
        copy.points[0].y = 0.75;

        assert_eq!(original.point_count(), 2);
        assert_eq!(original.get(0).unwrap().y, 0.0);
        assert_eq!(original.name(), "Untitled");
        assert!(original.tags().is_empty());
    }
}
