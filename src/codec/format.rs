//! Binary constant table and format revision parameters.
//!
//! Every fixed byte sequence of the curve document format lives here. The
//! values are format constants of the host application, not computed
//! framing, and must be reproduced exactly.
//!
//! # Layout
//! ```text
//! header    MAGIC, revision signature
//! metadata  META_OPEN
//!           per field: tag[4] kind[1] payload SPACER CONTINUE
//!           META_CLOSE
//! points    POINTS_OPEN count:u32
//!           per point: Y_TAG y:f64 X_TAG x:f64 SLOPE_TAG slope:f64 POINT_END
//!           POINTS_CLOSE count:u32
//! trailer   TRAILER_OPEN
//!           per field: key NUL value NUL
//!           TRAILER_CLOSE
//! ```
//! All numbers are big-endian.

use curvesmith_macros::bytes;

use crate::metadata::CurveCategory;

/// File magic, `"CrvD"`.
pub const MAGIC: [u8; 4] = bytes!("43 72 76 44");

pub const META_OPEN: [u8; 12] = bytes!("00 00 00 04 00 00 00 04 6d 65 74 61");
pub const META_CLOSE: [u8; 4] = bytes!("00 00 00 00");
/// Zero padding after each metadata field payload.
pub const SPACER: [u8; 3] = bytes!("00 00 00");
/// Marks that another metadata field follows or the block closes.
pub const CONTINUE: u8 = 0x01;

/// Field identifiers of the metadata block, in the order they are written.
pub mod field {
    use curvesmith_macros::bytes;

    pub const APPLICATION: [u8; 4] = bytes!("00 00 01 91");
    pub const BRANCH: [u8; 4] = bytes!("00 00 01 92");
    pub const DESCRIPTION: [u8; 4] = bytes!("00 00 01 93");
    pub const CREATOR: [u8; 4] = bytes!("00 00 01 94");
    pub const CATEGORY: [u8; 4] = bytes!("00 00 01 95");
    pub const CURVE_KIND: [u8; 4] = bytes!("00 00 01 96");
    pub const REVISION_ID: [u8; 4] = bytes!("00 00 01 97");
    pub const REVISION_NUMBER: [u8; 4] = bytes!("00 00 01 98");
    pub const TAGS: [u8; 4] = bytes!("00 00 01 99");
    pub const MIME_TYPE: [u8; 4] = bytes!("00 00 01 9a");
}

/// Payload kinds following a metadata field tag.
pub mod kind {
    /// u8 length + bytes
    pub const STRING: u8 = 0x08;
    /// big-endian u32
    pub const U32: u8 = 0x03;
    /// fixed 4-byte code, no length
    pub const CODE: u8 = 0x0f;
    /// u8 count, then u8 length + bytes per entry
    pub const LIST: u8 = 0x19;
}

pub const POINTS_OPEN: [u8; 10] = bytes!("00 00 00 05 70 6f 69 6e 74 73");
pub const Y_TAG: [u8; 7] = bytes!("0a 01 00 00 02 a1 07");
pub const X_TAG: [u8; 5] = bytes!("00 00 02 a2 07");
pub const SLOPE_TAG: [u8; 5] = bytes!("00 00 02 a3 07");
pub const POINT_END: [u8; 5] = bytes!("00 00 00 00 01");
pub const POINTS_CLOSE: [u8; 6] = bytes!("0a 00 00 00 02 a0");

/// Size of one encoded point record.
pub const POINT_RECORD_LEN: usize =
    Y_TAG.len() + 8 + X_TAG.len() + 8 + SLOPE_TAG.len() + 8 + POINT_END.len();

pub const TRAILER_OPEN: [u8; 10] = bytes!("00 00 00 07 69 6e 64 65 78 00");
pub const TRAILER_CLOSE: [u8; 4] = bytes!("00 00 00 00");

/// Keys of the null-terminated trailer fields, in the order they are written.
pub mod trailer_key {
    pub const NAME: &[u8] = b"name";
    pub const CREATOR: &[u8] = b"creator";
    pub const DESCRIPTION: &[u8] = b"comment";
    pub const CATEGORY: &[u8] = b"category";
    pub const TAGS: &[u8] = b"tags";
}

/// Separator joining tags in the trailer.
pub const TAG_SEPARATOR: &str = ",";

/// Four-byte curve kind code written verbatim for each category.
pub const fn curve_kind(category: CurveCategory) -> &'static [u8; 4] {
    match category {
        CurveCategory::Envelope => b"envl",
        CurveCategory::Lookup => b"lkup",
        CurveCategory::Periodic => b"perd",
        CurveCategory::Sequence => b"sequ",
    }
}

/// Identity of the host application revision a document is written for.
///
/// The header signature and the application fields of the metadata block
/// depend on the revision; everything else in the layout is shared.
///
/// # Example
///
/// ```
/// use curvesmith::codec::{FormatRevision, MAGIC};
///
/// let revision = FormatRevision::DEFAULT;
/// assert_eq!(revision.header().len(), MAGIC.len() + revision.signature.len());
/// assert_eq!(revision.revision_number, 183);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRevision {
    /// Bytes following [`MAGIC`] in the header
    pub signature: &'static [u8],
    pub application: &'static str,
    pub branch: &'static str,
    /// Source revision of the host build
    pub revision_id: &'static str,
    pub revision_number: u32,
    pub mime_type: &'static str,
}

impl FormatRevision {
    /// The revision this crate targets unless told otherwise.
    pub const DEFAULT: FormatRevision = FormatRevision {
        signature: &bytes!(
            "30 30 30 31 30 30 38 66 30 30 30 34 30 30 30 30 30 30 30 30 30 30 30 30"
        ),
        application: "Studio",
        branch: "release",
        revision_id: "7c4f0b29e8d1a36b5f90c2e4d7a8b1f3e6c05d92",
        revision_number: 183,
        mime_type: "application/x-curve-document",
    };

    /// Full header: magic followed by the revision signature.
    pub fn header(&self) -> Vec<u8> {
        let mut header = Vec::with_capacity(MAGIC.len() + self.signature.len());
        header.extend_from_slice(&MAGIC);
        header.extend_from_slice(self.signature);
        header
    }
}

impl Default for FormatRevision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic() {
        assert_eq!(&MAGIC, b"CrvD");
    }

    #[test]
    fn test_default_header() {
        let header = FormatRevision::DEFAULT.header();
        assert_eq!(&header[..4], b"CrvD");
        assert_eq!(&header[4..], b"0001008f0004000000000000");
    }

    #[test]
    fn test_point_record_len() {
        assert_eq!(POINT_RECORD_LEN, 46);
    }

    #[test]
    fn test_curve_kinds_are_distinct() {
        let kinds: Vec<_> = CurveCategory::ALL.iter().map(|c| curve_kind(*c)).collect();
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_field_tags_are_distinct() {
        let tags = [
            field::APPLICATION,
            field::BRANCH,
            field::DESCRIPTION,
            field::CREATOR,
            field::CATEGORY,
            field::CURVE_KIND,
            field::REVISION_ID,
            field::REVISION_NUMBER,
            field::TAGS,
            field::MIME_TYPE,
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
