// file: src/models/span.rs
// description: byte span of the abstract within raw document text
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// Byte range of the abstract in the raw text. Absence is expressed as
/// `Option<AbstractSpan>` at the API; when present, `start < end` and both
/// offsets lie on char boundaries of the text the span was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractSpan {
    pub start: usize,
    pub end: usize,
}

impl AbstractSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Slice the originating text. Callers must pass the same text the span
    /// was computed from.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end.min(text.len())]
    }
}
