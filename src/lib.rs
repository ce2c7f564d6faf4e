//! Curvesmith - curve documents for a host audio workstation
//!
//! This library models curves as ordered `(x, y, slope)` control points with
//! descriptive metadata, offers chainable transforms over them, and reads and
//! writes the host's tagged binary curve format.

pub mod codec;
pub mod document;
pub mod error;
pub mod metadata;
pub mod point;
pub mod transform;

// Re-export commonly used types at the crate root
pub use codec::{CurveDecoder, CurveEncoder, EncodeError, FormatError, FormatRevision};
pub use document::CurveDocument;
pub use error::CurveError;
pub use metadata::{CurveCategory, CurveMetadata};
pub use point::{CurvePoint, PointSpec};
pub use transform::{ClipAlgorithm, UnknownClipAlgorithm, interpolate};
