//! Curve document encoder.

use super::error::EncodeError;
use super::format::{
    CONTINUE, FormatRevision, META_CLOSE, META_OPEN, POINT_END, POINT_RECORD_LEN, POINTS_CLOSE,
    POINTS_OPEN, SLOPE_TAG, SPACER, TAG_SEPARATOR, TRAILER_CLOSE, TRAILER_OPEN, X_TAG, Y_TAG,
    curve_kind, field, kind, trailer_key,
};
use super::writer::Writer;
use crate::document::CurveDocument;

/// Writes [`CurveDocument`]s in the host's tagged binary format.
///
/// Encoding is deterministic: the same document state always yields the
/// same bytes. On error nothing is returned and the encoder is left ready
/// for the next document.
///
/// # Examples
///
/// ```
/// use curvesmith::CurveDocument;
/// use curvesmith::codec::{CurveEncoder, MAGIC};
///
/// let mut doc = CurveDocument::new();
/// doc.add_point((0.0, 0.0)).add_point((1.0, 1.0));
///
/// let mut encoder = CurveEncoder::default();
/// let bytes = encoder.encode(&doc).unwrap();
/// assert!(bytes.starts_with(&MAGIC));
/// assert_eq!(bytes, encoder.encode(&doc).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct CurveEncoder {
    revision: FormatRevision,
    writer: Writer,
}

impl CurveEncoder {
    /// Encoder for documents targeting `revision`.
    pub fn new(revision: FormatRevision) -> Self {
        Self {
            revision,
            writer: Writer::new(),
        }
    }

    pub fn revision(&self) -> &FormatRevision {
        &self.revision
    }

    /// Encodes `doc` into a single contiguous buffer.
    pub fn encode(&mut self, doc: &CurveDocument) -> Result<Vec<u8>, EncodeError> {
        self.writer
            .reserve(doc.point_count() * POINT_RECORD_LEN + 512);
        let result = self.write_document(doc);
        let bytes = self.writer.flush();
        result?;

        tracing::debug!(
            points = doc.point_count(),
            bytes = bytes.len(),
            "encoded curve document"
        );
        Ok(bytes)
    }

    fn write_document(&mut self, doc: &CurveDocument) -> Result<(), EncodeError> {
        self.writer.buf(&self.revision.header());
        self.write_metadata(doc)?;
        self.write_points(doc)?;
        self.write_trailer(doc)
    }

    fn write_metadata(&mut self, doc: &CurveDocument) -> Result<(), EncodeError> {
        let revision = self.revision;
        let category = doc.category();

        self.writer.buf(&META_OPEN);
        self.write_string_field(field::APPLICATION, "application", revision.application)?;
        self.write_string_field(field::BRANCH, "branch", revision.branch)?;
        self.write_string_field(field::DESCRIPTION, "description", doc.description())?;
        self.write_string_field(field::CREATOR, "creator", doc.creator())?;
        self.write_string_field(field::CATEGORY, "category", category.label())?;

        self.writer.buf(&field::CURVE_KIND);
        self.writer.u8(kind::CODE);
        self.writer.buf(curve_kind(category));
        self.end_field();

        self.write_string_field(field::REVISION_ID, "revision id", revision.revision_id)?;

        self.writer.buf(&field::REVISION_NUMBER);
        self.writer.u8(kind::U32);
        self.writer.u32(revision.revision_number);
        self.end_field();

        self.write_tags(doc.tags())?;
        self.write_string_field(field::MIME_TYPE, "mime type", revision.mime_type)?;
        self.writer.buf(&META_CLOSE);
        Ok(())
    }

    fn write_tags(&mut self, tags: &[String]) -> Result<(), EncodeError> {
        let count = u8::try_from(tags.len()).map_err(|_| EncodeError::TooManyTags(tags.len()))?;

        self.writer.buf(&field::TAGS);
        self.writer.u8(kind::LIST);
        self.writer.u8(count);
        for tag in tags {
            self.write_len_prefixed("tag", tag)?;
        }
        self.end_field();
        Ok(())
    }

    fn write_points(&mut self, doc: &CurveDocument) -> Result<(), EncodeError> {
        let count = u32::try_from(doc.point_count())
            .map_err(|_| EncodeError::TooManyPoints(doc.point_count()))?;

        self.writer.buf(&POINTS_OPEN);
        self.writer.u32(count);
        for point in doc.points() {
            self.writer.buf(&Y_TAG);
            self.writer.f64(point.y);
            self.writer.buf(&X_TAG);
            self.writer.f64(point.x);
            self.writer.buf(&SLOPE_TAG);
            self.writer.f64(point.slope);
            self.writer.buf(&POINT_END);
        }
        self.writer.buf(&POINTS_CLOSE);
        self.writer.u32(count);
        Ok(())
    }

    fn write_trailer(&mut self, doc: &CurveDocument) -> Result<(), EncodeError> {
        let tags = join_tags(doc.tags());

        self.writer.buf(&TRAILER_OPEN);
        self.write_trailer_field(trailer_key::NAME, "name", doc.name())?;
        self.write_trailer_field(trailer_key::CREATOR, "creator", doc.creator())?;
        self.write_trailer_field(trailer_key::DESCRIPTION, "description", doc.description())?;
        self.write_trailer_field(trailer_key::CATEGORY, "category", doc.category().label())?;
        self.write_trailer_field(trailer_key::TAGS, "tags", &tags)?;
        self.writer.buf(&TRAILER_CLOSE);
        Ok(())
    }

    fn write_string_field(
        &mut self,
        tag: [u8; 4],
        name: &'static str,
        value: &str,
    ) -> Result<(), EncodeError> {
        self.writer.buf(&tag);
        self.writer.u8(kind::STRING);
        self.write_len_prefixed(name, value)?;
        self.end_field();
        Ok(())
    }

    fn write_len_prefixed(&mut self, name: &'static str, value: &str) -> Result<(), EncodeError> {
        let bytes = value.as_bytes();
        let len = u8::try_from(bytes.len()).map_err(|_| EncodeError::FieldTooLong {
            field: name,
            len: bytes.len(),
        })?;
        self.writer.u8(len);
        self.writer.buf(bytes);
        Ok(())
    }

    fn write_trailer_field(
        &mut self,
        key: &[u8],
        name: &'static str,
        value: &str,
    ) -> Result<(), EncodeError> {
        if value.as_bytes().contains(&0) {
            return Err(EncodeError::EmbeddedNul { field: name });
        }
        self.writer.cstr(key);
        self.writer.cstr(value.as_bytes());
        Ok(())
    }

    fn end_field(&mut self) {
        self.writer.buf(&SPACER);
        self.writer.u8(CONTINUE);
    }
}

/// Tags as they appear in the trailer.
pub(crate) fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}
