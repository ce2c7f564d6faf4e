//! Tagged binary codec for curve documents.
//!
//! [`encode`] and [`decode`] use [`FormatRevision::DEFAULT`]; construct a
//! [`CurveEncoder`] or [`CurveDecoder`] to target another host revision.
//!
//! # Examples
//!
//! ```
//! use curvesmith::{CurveDocument, CurvePoint, codec};
//!
//! let mut doc = CurveDocument::new();
//! doc.set_name("Gate")
//!     .add_tag("rhythm")
//!     .push_points([CurvePoint::at(0.0, 1.0), CurvePoint::new(0.5, 0.0, 0.3)]);
//!
//! let bytes = codec::encode(&doc)?;
//! let back = codec::decode(&bytes)?;
//! assert_eq!(back, doc);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decoder;
mod encoder;
pub mod error;
mod format;
mod reader;
mod writer;

pub use decoder::CurveDecoder;
pub use encoder::CurveEncoder;
pub use error::{EncodeError, FormatError};
pub use format::{
    CONTINUE, FormatRevision, MAGIC, META_CLOSE, META_OPEN, POINT_END, POINT_RECORD_LEN,
    POINTS_CLOSE, POINTS_OPEN, SLOPE_TAG, SPACER, TAG_SEPARATOR, TRAILER_CLOSE, TRAILER_OPEN,
    X_TAG, Y_TAG, curve_kind, field, kind, trailer_key,
};

use crate::document::CurveDocument;

/// Encodes `doc` for the default format revision.
pub fn encode(doc: &CurveDocument) -> Result<Vec<u8>, EncodeError> {
    CurveEncoder::default().encode(doc)
}

/// Decodes a document written for the default format revision.
pub fn decode(data: &[u8]) -> Result<CurveDocument, FormatError> {
    CurveDecoder::default().decode(data)
}

impl CurveDocument {
    /// Shorthand for [`encode`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        encode(self)
    }

    /// Shorthand for [`decode`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, FormatError> {
        decode(data)
    }
}
