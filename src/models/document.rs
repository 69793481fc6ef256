// file: src/models/document.rs
// description: raw and structured document models
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A table recovered from the PDF, in extraction order. `page` and
/// `index_on_page` are 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    pub page: u32,
    pub index_on_page: u32,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(page: u32, index_on_page: u32, rows: Vec<Vec<String>>) -> Self {
        Self {
            page,
            index_on_page,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Everything the PdfSource recovered from one input file. Read-only to every
/// pipeline component; page breaks in `text` are marked by double newlines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub text: String,
    pub tables: Vec<RawTable>,
}

impl RawDocument {
    pub fn new(text: String, tables: Vec<RawTable>) -> Self {
        Self { text, tables }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.tables.is_empty()
    }
}

/// One (heading, content) pair in source-position order. Duplicate headings
/// across a paper are legal and preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub content: String,
}

impl Section {
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
        }
    }
}

/// Pipeline output: constructed once per input document, consumed once by a
/// DocumentWriter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredDocument {
    pub title: String,
    pub sections: Vec<Section>,
}

impl StructuredDocument {
    pub fn new(title: String, sections: Vec<Section>) -> Self {
        Self { title, sections }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
