// file: src/source/pdf.rs
// description: PDF text extraction backend built on pdf-extract
// reference: https://docs.rs/pdf-extract

use crate::error::{ProcessorError, Result};
use crate::models::RawTable;
use crate::source::PdfSource;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extracts per-page text with the pure-Rust `pdf-extract` crate. Table
/// geometry is not recoverable by this backend, so the table list is always
/// empty; scanned (image-only) pages yield no text.
pub struct PdfExtractSource;

impl PdfExtractSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSource for PdfExtractSource {
    fn name(&self) -> &str {
        "pdf-extract"
    }

    fn extract(&self, path: &Path) -> Result<(String, Vec<RawTable>)> {
        let bytes = fs::read(path).map_err(|source| ProcessorError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| ProcessorError::Extraction(format!("pdf text extraction: {}", e)))?;

        debug!("Extracted {} pages from {}", pages.len(), path.display());

        // Page breaks are marked by double newlines downstream
        Ok((pages.join("\n\n"), Vec::new()))
    }
}
