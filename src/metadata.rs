//! Descriptive metadata carried alongside a curve's points.

use std::fmt;

/// Soft limit the host application imposes on `name`, `creator` and
/// `description`. Not enforced here.
pub const TEXT_SOFT_LIMIT: usize = 256;

/// Kind of curve as presented by the host's browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveCategory {
    #[default]
    Envelope,
    Lookup,
    Periodic,
    Sequence,
}

impl CurveCategory {
    pub const ALL: [CurveCategory; 4] = [
        CurveCategory::Envelope,
        CurveCategory::Lookup,
        CurveCategory::Periodic,
        CurveCategory::Sequence,
    ];

    /// Label written into the document's category fields.
    pub const fn label(self) -> &'static str {
        match self {
            CurveCategory::Envelope => "envelope",
            CurveCategory::Lookup => "lookup",
            CurveCategory::Periodic => "periodic",
            CurveCategory::Sequence => "sequence",
        }
    }

    /// Inverse of [`label`](Self::label).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for CurveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name, authorship and classification of a curve.
///
/// Every field has a default so a fresh document encodes without further setup.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveMetadata {
    pub name: String,
    pub creator: String,
    pub description: String,
    /// Ordered; duplicates are kept.
    pub tags: Vec<String>,
    pub category: CurveCategory,
}

impl Default for CurveMetadata {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            creator: "curvesmith".to_string(),
            description: String::new(),
            tags: Vec::new(),
            category: CurveCategory::default(),
        }
    }
}
