// file: src/extractor/boundary.rs
// description: locates the abstract's start and end offsets in raw text
// reference: internal structure inference rules

use crate::extractor::patterns::{
    ABSTRACT_HEAD, ABSTRACT_MARKER, INTRODUCTION_HEAD, KEYWORDS_HEAD,
    NUMBERED_INTRODUCTION_HEAD, SUMMARY_HEAD,
};
use crate::models::AbstractSpan;
use regex::Regex;

pub struct AbstractBoundary;

impl AbstractBoundary {
    pub fn new() -> Self {
        Self
    }

    /// Locate the abstract. Both phases use pattern-list priority: the first
    /// pattern in the list that matches anywhere wins, even when a
    /// lower-priority pattern matches earlier in the text. The end search runs
    /// only over the text after the found start; if no end pattern matches,
    /// the span runs to the end of the text.
    pub fn find(&self, text: &str) -> Option<AbstractSpan> {
        let start_patterns: [&Regex; 2] = [&ABSTRACT_HEAD, &SUMMARY_HEAD];
        let start = start_patterns
            .iter()
            .find_map(|pattern| pattern.find(text))
            .map(|m| m.start())?;

        let tail = &text[start..];
        let end_patterns: [&Regex; 3] = [
            &INTRODUCTION_HEAD,
            &NUMBERED_INTRODUCTION_HEAD,
            &KEYWORDS_HEAD,
        ];
        let end = end_patterns
            .iter()
            .find_map(|pattern| pattern.find(tail))
            .map(|m| start + m.start())
            .unwrap_or(text.len());

        Some(AbstractSpan::new(start, end))
    }

    /// The abstract's own text with the leading "Abstract" marker stripped,
    /// or None when no abstract-like heading exists.
    pub fn extract_abstract(&self, text: &str) -> Option<String> {
        let span = self.find(text)?;
        let body = ABSTRACT_MARKER.replace(span.slice(text), "");
        Some(body.trim().to_string())
    }
}

impl Default for AbstractBoundary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_abstract_to_introduction() {
        let boundary = AbstractBoundary::new();
        let text = "Header\nAbstract\nThis is the abstract.\nIntroduction\nBody.";
        let span = boundary.find(text).unwrap();

        assert_eq!(span.slice(text), "Abstract\nThis is the abstract.\n");
    }

    #[test]
    fn test_pattern_order_beats_textual_order() {
        let boundary = AbstractBoundary::new();
        // "summary" appears first in the text, but "abstract" is the
        // higher-priority pattern and wins
        let text = "Summary of contents\nlater the Abstract begins here";
        let span = boundary.find(text).unwrap();

        assert_eq!(&text[span.start..span.start + 8], "Abstract");
    }

    #[test]
    fn test_summary_accepted_when_no_abstract() {
        let boundary = AbstractBoundary::new();
        let text = "Paper Summary\ncontent follows\nKeywords: a, b";
        let span = boundary.find(text).unwrap();

        assert_eq!(span.start, 6);
        assert!(span.slice(text).starts_with("Summary"));
        assert!(!span.slice(text).contains("Keywords"));
    }

    #[test]
    fn test_no_end_pattern_runs_to_text_end() {
        let boundary = AbstractBoundary::new();
        let text = "Abstract\nall of this is abstract text";
        let span = boundary.find(text).unwrap();

        assert_eq!(span.end, text.len());
    }

    #[test]
    fn test_absent_abstract() {
        let boundary = AbstractBoundary::new();
        assert!(boundary.find("no markers at all in this text").is_none());
        assert!(boundary.find("").is_none());
    }

    #[test]
    fn test_extract_abstract_strips_marker() {
        let boundary = AbstractBoundary::new();
        let text = "Abstract: This paper examines things.\nIntroduction\nBody";
        let extracted = boundary.extract_abstract(text).unwrap();

        assert_eq!(extracted, "This paper examines things.");
    }
}
