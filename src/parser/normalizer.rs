// file: src/parser/normalizer.rs
// description: lossy text normalization: metadata removal and whitespace collapsing
// reference: internal text cleanup rules

use crate::extractor::patterns::{DOI, EMAIL, HTTP_URL, WHITESPACE_RUN, WWW_URL};

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Remove URLs, DOIs, and email addresses while preserving line structure.
    /// Removal order: http/https URLs, www URLs, DOI identifiers, emails.
    pub fn strip_metadata(&self, text: &str) -> String {
        let stripped = HTTP_URL.replace_all(text, "");
        let stripped = WWW_URL.replace_all(&stripped, "");
        let stripped = DOI.replace_all(&stripped, "");
        let stripped = EMAIL.replace_all(&stripped, "");
        stripped.into_owned()
    }

    /// Full normalization: metadata removal, then every whitespace run
    /// (including newlines) collapsed to a single space. Not invertible.
    pub fn normalize(&self, text: &str) -> String {
        let stripped = self.strip_metadata(text);
        WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
    }

    /// Collapse whitespace runs without removing metadata. Used by writers on
    /// individual paragraphs.
    pub fn collapse_whitespace(text: &str) -> String {
        WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
