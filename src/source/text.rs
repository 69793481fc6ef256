// file: src/source/text.rs
// description: plain-text extraction backend for degraded input and tests
// reference: internal capability interfaces

use crate::error::{ProcessorError, Result};
use crate::models::RawTable;
use crate::source::PdfSource;
use std::fs;
use std::path::Path;

/// Reads the input as UTF-8 text directly. Serves as the degraded fallback
/// when PDF parsing fails and as the deterministic backend for tests.
pub struct PlainTextSource;

impl PlainTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSource for PlainTextSource {
    fn name(&self) -> &str {
        "plain-text"
    }

    fn extract(&self, path: &Path) -> Result<(String, Vec<RawTable>)> {
        let text = fs::read_to_string(path).map_err(|source| ProcessorError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        Ok((text, Vec::new()))
    }
}
