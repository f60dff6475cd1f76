//! Source file spans and locations

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A unique identifier for a source file
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize, Display)]
#[display("file{_0}")]
pub struct FileId(pub u32);

impl FileId {
    /// Wrap a raw file index
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A byte offset span in a source file
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize, Display)]
#[display("{start}..{end}")]
pub struct Span {
    /// Start byte offset
    pub start: u32,
    /// End byte offset (exclusive)
    pub end: u32,
}

impl Span {
    /// Span from `start` to `end`
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Byte range for slicing source text
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Length in bytes
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span covers no text
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`
    #[must_use]
    pub fn to(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A span with associated file
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize, Display)]
#[display("{file}:{span}")]
pub struct FileSpan {
    /// Containing file
    pub file: FileId,
    /// Span inside the file
    pub span: Span,
}

impl FileSpan {
    /// Span `span` within `file`
    pub fn new(file: FileId, span: Span) -> Self {
        Self { file, span }
    }

    /// Span used for synthesized nodes that have no source text
    pub fn dummy() -> Self {
        Self::new(FileId(0), Span::new(0, 0))
    }

    /// Byte range inside the file
    pub fn range(&self) -> Range<usize> {
        self.span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_join() {
        let joined = Span::new(4, 9).to(Span::new(1, 6));
        assert_eq!(joined, Span::new(1, 9));
        assert_eq!(joined.len(), 8);
        assert!(!joined.is_empty());
    }

    #[test]
    fn test_file_span_display() {
        let span = FileSpan::new(FileId::new(2), Span::new(10, 14));
        assert_eq!(span.to_string(), "file2:10..14");
        assert_eq!(span.range(), 10..14);
    }

    #[test]
    fn test_file_span_serializes_as_plain_fields() {
        let span = FileSpan::new(FileId(1), Span::new(3, 5));
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"file":1,"span":{"start":3,"end":5}}"#);
    }
}
