// file: src/source/mod.rs
// description: text and table extraction backends with degraded-mode cascade
// reference: internal capability interfaces

pub mod pdf;
pub mod text;

pub use pdf::PdfExtractSource;
pub use text::PlainTextSource;

use crate::error::Result;
use crate::models::{RawDocument, RawTable};
use std::path::Path;
use tracing::warn;

/// A backend that recovers raw text (page breaks as double newlines) and
/// tables from an input file.
pub trait PdfSource: Send + Sync {
    /// Canonical name of this backend, for logging.
    fn name(&self) -> &str;

    fn extract(&self, path: &Path) -> Result<(String, Vec<RawTable>)>;
}

/// Tries backends in order and returns the first non-empty extraction. When
/// every backend fails, yields an empty document so the pipeline can still
/// run to completion.
pub struct CascadingSource {
    backends: Vec<Box<dyn PdfSource>>,
}

impl CascadingSource {
    pub fn new() -> Self {
        Self {
            backends: vec![
                Box::new(PdfExtractSource::new()),
                Box::new(PlainTextSource::new()),
            ],
        }
    }

    pub fn with_backends(backends: Vec<Box<dyn PdfSource>>) -> Self {
        Self { backends }
    }

    pub fn extract(&self, path: &Path) -> RawDocument {
        for backend in &self.backends {
            match backend.extract(path) {
                Ok((text, tables)) if !text.trim().is_empty() => {
                    return RawDocument::new(text, tables);
                }
                Ok(_) => {
                    warn!("{} extracted no text from {}", backend.name(), path.display());
                }
                Err(e) => {
                    warn!("{} failed on {}: {}", backend.name(), path.display(), e);
                }
            }
        }

        warn!(
            "All extraction backends failed for {}, continuing with an empty document",
            path.display()
        );
        RawDocument::new(String::new(), Vec::new())
    }
}

impl Default for CascadingSource {
    fn default() -> Self {
        Self::new()
    }
}
