//! Document encodings.
//!
//! The binary format is the native one. The text format is an older
//! line-oriented encoding of the same fields, kept so legacy files open.

pub mod binary;
pub mod text;

use std::path::Path;

use crate::error::{DesignError, DesignResult};
use crate::pline::{Pline, PlineKind};

/// Which encoding a document file uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Binary,
    Text,
}

impl DocumentFormat {
    /// Picks the format from the file extension. Anything but `.txt` is binary.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => Self::Text,
            _ => Self::Binary,
        }
    }

    pub fn encode(self, plines: &[Pline]) -> DesignResult<Vec<u8>> {
        match self {
            Self::Binary => binary::encode(plines),
            Self::Text => Ok(text::encode(plines).into_bytes()),
        }
    }

    pub fn decode(self, bytes: &[u8]) -> DesignResult<Vec<Pline>> {
        match self {
            Self::Binary => binary::decode(bytes),
            Self::Text => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| DesignError::CorruptDocument(format!("not UTF-8 text: {e}")))?;
                text::decode(text)
            }
        }
    }
}

/// Checks a decoded entity against the shape its tag promises and builds it
pub(crate) fn build_pline(tag: i32, points: Vec<kurbo::Point>) -> DesignResult<Pline> {
    let kind = PlineKind::from_tag(tag)
        .ok_or_else(|| DesignError::CorruptDocument(format!("unknown shape type {tag}")))?;
    if let Some(bad) = points.iter().find(|pt| !pt.x.is_finite() || !pt.y.is_finite()) {
        return Err(DesignError::CorruptDocument(format!("non-finite coordinate {bad:?}")));
    }
    let expected = match kind {
        PlineKind::Line => Some(2),
        PlineKind::Rectangle => Some(5),
        PlineKind::Connected | PlineKind::Ellipse => None,
    };
    match expected {
        Some(n) if points.len() != n => Err(DesignError::CorruptDocument(format!(
            "{} with {} points, expected {n}",
            kind.name(),
            points.len()
        ))),
        _ if points.is_empty() => Err(DesignError::CorruptDocument(format!(
            "{} without points",
            kind.name()
        ))),
        _ => Pline::new(kind, points),
    }
}
