// file: src/writer/mod.rs
// description: document rendering module exports and format selection
// reference: internal module structure

pub mod html;
pub mod json;
pub mod markdown;

pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;

use crate::error::{ProcessorError, Result};
use crate::models::StructuredDocument;
use std::path::Path;

/// Renders a structured document to an output location. Rendering is the only
/// pipeline stage whose failure is fatal: there is no fallback for "cannot
/// produce output".
pub trait DocumentWriter {
    fn write(&self, document: &StructuredDocument, output: &Path) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ProcessorError::Config(format!(
                "Unknown output format: {}",
                other
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    pub fn writer(&self) -> Box<dyn DocumentWriter> {
        match self {
            Self::Html => Box::new(HtmlWriter::new()),
            Self::Markdown => Box::new(MarkdownWriter::new()),
            Self::Json => Box::new(JsonWriter::new(true)),
        }
    }
}
