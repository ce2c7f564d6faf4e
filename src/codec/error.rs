//! Codec error types.

use thiserror::Error;

/// A byte stream that does not conform to the curve document format.
///
/// Decoding never yields a partially populated document: any of these
/// aborts the whole decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("header signature does not match the expected format revision")]
    HeaderMismatch,

    #[error("unexpected end of input at offset {offset} ({needed} more bytes needed)")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error("unexpected bytes for {context} at offset {offset}")]
    TagMismatch {
        context: &'static str,
        offset: usize,
    },

    #[error("{field} declares {declared} bytes but only {remaining} remain")]
    LengthOverflow {
        field: &'static str,
        declared: usize,
        remaining: usize,
    },

    #[error("point count mismatch: declared {declared}, found {parsed}, trailer says {trailer}")]
    PointCountMismatch {
        declared: u32,
        parsed: usize,
        trailer: u32,
    },

    #[error("unknown curve category '{0}'")]
    UnknownCategory(String),

    #[error("curve kind does not match the declared category")]
    CurveKindMismatch,

    #[error("{field} does not match the expected format revision")]
    RevisionMismatch { field: &'static str },

    #[error("trailer {field} disagrees with the metadata block")]
    TrailerMismatch { field: &'static str },

    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    #[error("{0} unexpected bytes after the trailer")]
    TrailingBytes(usize),
}

/// A document that cannot be represented in the wire format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Length prefixes are a single byte.
    #[error("{field} is {len} bytes long, the format allows at most 255")]
    FieldTooLong { field: &'static str, len: usize },

    #[error("{0} tags exceed the format limit of 255")]
    TooManyTags(usize),

    #[error("{0} points exceed the format limit")]
    TooManyPoints(usize),

    /// Trailer fields are NUL-terminated.
    #[error("{field} contains a NUL byte")]
    EmbeddedNul { field: &'static str },
}
