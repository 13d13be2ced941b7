//! Byte-offset source spans and text edits.
//!
//! All positions in sift are byte offsets into a file's text, matching the
//! offsets the underlying engine reports. Line/column conversion is the
//! host's concern.

use serde::{Deserialize, Serialize};

/// A half-open byte range in a source file, expressed as a start offset plus
/// a length (the shape used on the wire by tsserver-style protocols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    /// Byte offset of the first character covered by the span.
    pub start: u32,
    /// Number of bytes covered. Zero-length spans mark insertion points.
    pub length: u32,
}

impl TextSpan {
    /// Create a span from a start offset and length.
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// Create a span covering `[start, end)`.
    pub fn from_bounds(start: u32, end: u32) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// Create a zero-length span at `offset`.
    pub fn empty(offset: u32) -> Self {
        Self {
            start: offset,
            length: 0,
        }
    }

    /// The offset one past the last covered byte.
    pub fn end(&self) -> u32 {
        self.start + self.length
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether `offset` falls inside the span (start inclusive, end exclusive).
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end()
    }
}

/// A single text edit: replace the bytes covered by `span` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    /// The range being replaced. Zero-length for pure insertions.
    pub span: TextSpan,
    /// The replacement text.
    pub new_text: String,
}

impl TextChange {
    /// Create a replacement edit.
    pub fn new(span: TextSpan, new_text: impl Into<String>) -> Self {
        Self {
            span,
            new_text: new_text.into(),
        }
    }

    /// Create a pure insertion at `offset`.
    pub fn insert(offset: u32, new_text: impl Into<String>) -> Self {
        Self {
            span: TextSpan::empty(offset),
            new_text: new_text.into(),
        }
    }
}
