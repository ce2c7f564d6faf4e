//! Curve document decoder.

use super::encoder::join_tags;
use super::error::FormatError;
use super::format::{
    CONTINUE, FormatRevision, META_CLOSE, META_OPEN, POINT_END, POINT_RECORD_LEN, POINTS_CLOSE,
    POINTS_OPEN, SLOPE_TAG, SPACER, TRAILER_CLOSE, TRAILER_OPEN, X_TAG, Y_TAG, curve_kind, field,
    kind, trailer_key,
};
use super::reader::Reader;
use crate::document::CurveDocument;
use crate::metadata::{CurveCategory, CurveMetadata};
use crate::point::CurvePoint;

/// Reads [`CurveDocument`]s from the host's tagged binary format.
///
/// The whole buffer must be one well-formed document written for the
/// decoder's [`FormatRevision`]. Header, every fixed tag, both point counts
/// and the trailer are checked; the document is only assembled once all of
/// them agree.
///
/// # Examples
///
/// ```
/// use curvesmith::CurveDocument;
/// use curvesmith::codec::{CurveDecoder, CurveEncoder, FormatError};
///
/// let mut doc = CurveDocument::new();
/// doc.set_name("Ramp").add_point((0.0, 0.0)).add_point((1.0, 1.0));
/// let bytes = CurveEncoder::default().encode(&doc).unwrap();
///
/// let decoder = CurveDecoder::default();
/// assert_eq!(decoder.decode(&bytes), Ok(doc));
/// assert_eq!(decoder.decode(b"not a curve"), Err(FormatError::HeaderMismatch));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveDecoder {
    revision: FormatRevision,
}

/// Metadata block contents before they are checked against the trailer.
struct MetadataBlock {
    description: String,
    creator: String,
    category: CurveCategory,
    tags: Vec<String>,
}

impl CurveDecoder {
    /// Decoder accepting only documents written for `revision`.
    pub fn new(revision: FormatRevision) -> Self {
        Self { revision }
    }

    pub fn revision(&self) -> &FormatRevision {
        &self.revision
    }

    /// Decodes a complete document from `data`.
    pub fn decode(&self, data: &[u8]) -> Result<CurveDocument, FormatError> {
        let mut reader = Reader::new(data);

        self.read_header(&mut reader)?;
        let meta = self.read_metadata(&mut reader)?;
        tracing::trace!(offset = reader.position(), "read metadata block");
        let points = read_points(&mut reader)?;
        tracing::trace!(offset = reader.position(), "read points block");
        let name = read_trailer(&mut reader, &meta)?;

        if reader.remaining() > 0 {
            return Err(FormatError::TrailingBytes(reader.remaining()));
        }

        tracing::debug!(
            points = points.len(),
            bytes = data.len(),
            "decoded curve document"
        );

        let metadata = CurveMetadata {
            name,
            creator: meta.creator,
            description: meta.description,
            tags: meta.tags,
            category: meta.category,
        };
        Ok(CurveDocument::from_parts(metadata, points))
    }

    fn read_header(&self, reader: &mut Reader<'_>) -> Result<(), FormatError> {
        let header = self.revision.header();
        if !reader.starts_with(&header) {
            return Err(FormatError::HeaderMismatch);
        }
        reader.buf(header.len())?;
        Ok(())
    }

    fn read_metadata(&self, reader: &mut Reader<'_>) -> Result<MetadataBlock, FormatError> {
        let revision = &self.revision;
        reader.expect(&META_OPEN, "metadata block")?;

        expect_revision(
            read_string_field(reader, field::APPLICATION, "application")?,
            revision.application,
            "application",
        )?;
        expect_revision(
            read_string_field(reader, field::BRANCH, "branch")?,
            revision.branch,
            "branch",
        )?;
        let description = read_string_field(reader, field::DESCRIPTION, "description")?;
        let creator = read_string_field(reader, field::CREATOR, "creator")?;
        let label = read_string_field(reader, field::CATEGORY, "category")?;
        let category =
            CurveCategory::from_label(&label).ok_or(FormatError::UnknownCategory(label))?;

        reader.expect(&field::CURVE_KIND, "curve kind")?;
        reader.expect(&[kind::CODE], "curve kind")?;
        if reader.buf(4)? != curve_kind(category) {
            return Err(FormatError::CurveKindMismatch);
        }
        end_field(reader, "curve kind")?;

        expect_revision(
            read_string_field(reader, field::REVISION_ID, "revision id")?,
            revision.revision_id,
            "revision id",
        )?;

        reader.expect(&field::REVISION_NUMBER, "revision number")?;
        reader.expect(&[kind::U32], "revision number")?;
        if reader.u32()? != revision.revision_number {
            return Err(FormatError::RevisionMismatch {
                field: "revision number",
            });
        }
        end_field(reader, "revision number")?;

        let tags = read_tags(reader)?;

        expect_revision(
            read_string_field(reader, field::MIME_TYPE, "mime type")?,
            revision.mime_type,
            "mime type",
        )?;
        reader.expect(&META_CLOSE, "metadata block end")?;

        Ok(MetadataBlock {
            description,
            creator,
            category,
            tags,
        })
    }
}

fn expect_revision(found: String, expected: &str, field: &'static str) -> Result<(), FormatError> {
    if found == expected {
        Ok(())
    } else {
        Err(FormatError::RevisionMismatch { field })
    }
}

fn read_len_prefixed(reader: &mut Reader<'_>, field: &'static str) -> Result<String, FormatError> {
    let declared = reader.u8()? as usize;
    if declared > reader.remaining() {
        return Err(FormatError::LengthOverflow {
            field,
            declared,
            remaining: reader.remaining(),
        });
    }
    utf8(reader.buf(declared)?, field)
}

fn read_string_field(
    reader: &mut Reader<'_>,
    tag: [u8; 4],
    field: &'static str,
) -> Result<String, FormatError> {
    reader.expect(&tag, field)?;
    reader.expect(&[kind::STRING], field)?;
    let value = read_len_prefixed(reader, field)?;
    end_field(reader, field)?;
    Ok(value)
}

fn read_tags(reader: &mut Reader<'_>) -> Result<Vec<String>, FormatError> {
    reader.expect(&field::TAGS, "tags")?;
    reader.expect(&[kind::LIST], "tags")?;
    let count = reader.u8()?;
    let tags = (0..count)
        .map(|_| read_len_prefixed(reader, "tag"))
        .collect::<Result<Vec<_>, _>>()?;
    end_field(reader, "tags")?;
    Ok(tags)
}

fn end_field(reader: &mut Reader<'_>, field: &'static str) -> Result<(), FormatError> {
    reader.expect(&SPACER, field)?;
    reader.expect(&[CONTINUE], field)
}

fn read_points(reader: &mut Reader<'_>) -> Result<Vec<CurvePoint>, FormatError> {
    reader.expect(&POINTS_OPEN, "points block")?;
    let declared = reader.u32()?;

    let capacity = (declared as usize).min(reader.remaining() / POINT_RECORD_LEN);
    let mut points = Vec::with_capacity(capacity);
    while reader.starts_with(&Y_TAG) {
        reader.buf(Y_TAG.len())?;
        let y = reader.f64()?;
        reader.expect(&X_TAG, "point x tag")?;
        let x = reader.f64()?;
        reader.expect(&SLOPE_TAG, "point slope tag")?;
        let slope = reader.f64()?;
        reader.expect(&POINT_END, "point end")?;
        points.push(CurvePoint::new(x, y, slope));
    }

    if points.len() < declared as usize && !reader.starts_with(&POINTS_CLOSE) {
        // a damaged record rather than a short count
        reader.expect(&Y_TAG, "point y tag")?;
    }
    reader.expect(&POINTS_CLOSE, "points block end")?;
    let trailer = reader.u32()?;

    if declared as usize != points.len() || trailer != declared {
        return Err(FormatError::PointCountMismatch {
            declared,
            parsed: points.len(),
            trailer,
        });
    }
    Ok(points)
}

/// Checks the trailer against the metadata block and returns the name,
/// which only the trailer carries.
fn read_trailer(reader: &mut Reader<'_>, meta: &MetadataBlock) -> Result<String, FormatError> {
    reader.expect(&TRAILER_OPEN, "trailer")?;

    let name = read_trailer_field(reader, trailer_key::NAME, "name")?;
    let checks = [
        (trailer_key::CREATOR, "creator", meta.creator.clone()),
        (
            trailer_key::DESCRIPTION,
            "description",
            meta.description.clone(),
        ),
        (
            trailer_key::CATEGORY,
            "category",
            meta.category.label().to_string(),
        ),
        (trailer_key::TAGS, "tags", join_tags(&meta.tags)),
    ];
    for (key, field, expected) in checks {
        if read_trailer_field(reader, key, field)? != expected {
            return Err(FormatError::TrailerMismatch { field });
        }
    }

    reader.expect(&TRAILER_CLOSE, "trailer end")?;
    Ok(name)
}

fn read_trailer_field(
    reader: &mut Reader<'_>,
    key: &[u8],
    field: &'static str,
) -> Result<String, FormatError> {
    let offset = reader.position();
    if reader.cstr()? != key {
        return Err(FormatError::TagMismatch {
            context: field,
            offset,
        });
    }
    utf8(reader.cstr()?, field)
}

fn utf8(bytes: &[u8], field: &'static str) -> Result<String, FormatError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| FormatError::InvalidUtf8 { field })
}
