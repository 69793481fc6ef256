// file: src/writer/html.rs
// description: html rendering with centered title, bold headings, justified paragraphs
// reference: internal rendering rules

use crate::error::{ProcessorError, Result};
use crate::models::StructuredDocument;
use crate::parser::TextNormalizer;
use crate::writer::DocumentWriter;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct HtmlWriter;

impl HtmlWriter {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, document: &StructuredDocument) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", clean_text(&document.title)));
        html.push_str(
            "<style>\n\
             body { max-width: 46em; margin: 2em auto; font-family: Georgia, serif; }\n\
             h1 { text-align: center; }\n\
             h2 { text-align: left; font-weight: bold; }\n\
             p { text-align: justify; }\n\
             </style>\n</head>\n<body>\n",
        );

        html.push_str(&format!("<h1>{}</h1>\n", clean_text(&document.title)));

        for section in &document.sections {
            html.push_str(&format!("<h2>{}</h2>\n", clean_text(&section.heading)));
            for paragraph in paragraphs(&section.content) {
                html.push_str(&format!("<p>{}</p>\n", paragraph));
            }
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWriter for HtmlWriter {
    fn write(&self, document: &StructuredDocument, output: &Path) -> Result<()> {
        let html = self.render(document);
        fs::write(output, html).map_err(|e| {
            ProcessorError::Render(format!("cannot write {}: {}", output.display(), e))
        })?;

        info!(
            "HTML output written with {} sections: {}",
            document.section_count(),
            output.display()
        );
        Ok(())
    }
}

/// Escape markup-significant characters and collapse whitespace runs, so a
/// rendered paragraph is a single clean line of flowing text.
fn clean_text(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    TextNormalizer::collapse_whitespace(&escaped)
}

/// Split content on blank-line boundaries into non-empty paragraphs.
fn paragraphs(content: &str) -> Vec<String> {
    content
        .split("\n\n")
        .map(clean_text)
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn document() -> StructuredDocument {
        StructuredDocument::new(
            "A Study of <Things> & Stuff".to_string(),
            vec![Section::new(
                "Introduction",
                "First paragraph\nsame paragraph.\n\nSecond paragraph.",
            )],
        )
    }

    #[test]
    fn test_markup_escaped() {
        assert_eq!(clean_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_paragraph_split() {
        let paras = paragraphs("one\ntwo\n\nthree");
        assert_eq!(paras, vec!["one two".to_string(), "three".to_string()]);
    }

    #[test]
    fn test_render_layout() {
        let html = HtmlWriter::new().render(&document());

        assert!(html.contains("<h1>A Study of &lt;Things&gt; &amp; Stuff</h1>"));
        assert!(html.contains("<h2>Introduction</h2>"));
        assert!(html.contains("<p>First paragraph same paragraph.</p>"));
        assert!(html.contains("<p>Second paragraph.</p>"));
        assert!(html.contains("text-align: center"));
        assert!(html.contains("text-align: justify"));
    }

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.html");

        HtmlWriter::new().write(&document(), &output).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();

        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_unwritable_path_is_render_failure() {
        let result = HtmlWriter::new().write(&document(), Path::new("/nonexistent/dir/out.html"));

        assert!(matches!(result, Err(ProcessorError::Render(_))));
    }
}
