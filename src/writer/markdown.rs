// file: src/writer/markdown.rs
// description: markdown rendering of structured documents
// reference: internal rendering rules

use crate::error::{ProcessorError, Result};
use crate::models::StructuredDocument;
use crate::parser::TextNormalizer;
use crate::writer::DocumentWriter;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct MarkdownWriter;

impl MarkdownWriter {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, document: &StructuredDocument) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "# {}\n",
            TextNormalizer::collapse_whitespace(&document.title)
        ));

        for section in &document.sections {
            output.push_str(&format!(
                "\n## {}\n",
                TextNormalizer::collapse_whitespace(&section.heading)
            ));

            for paragraph in section.content.split("\n\n") {
                let paragraph = TextNormalizer::collapse_whitespace(paragraph);
                if !paragraph.is_empty() {
                    output.push_str(&format!("\n{}\n", paragraph));
                }
            }
        }

        output
    }
}

impl Default for MarkdownWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWriter for MarkdownWriter {
    fn write(&self, document: &StructuredDocument, output: &Path) -> Result<()> {
        let markdown = self.render(document);
        fs::write(output, markdown).map_err(|e| {
            ProcessorError::Render(format!("cannot write {}: {}", output.display(), e))
        })?;

        info!(
            "Markdown output written with {} sections: {}",
            document.section_count(),
            output.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_structure() {
        let document = StructuredDocument::new(
            "Sample Title".to_string(),
            vec![
                Section::new("Introduction", "First para.\n\nSecond para."),
                Section::new("Conclusion", "Closing words."),
            ],
        );

        let markdown = MarkdownWriter::new().render(&document);

        assert_eq!(
            markdown,
            "# Sample Title\n\n\
             ## Introduction\n\n\
             First para.\n\n\
             Second para.\n\n\
             ## Conclusion\n\n\
             Closing words.\n"
        );
    }

    #[test]
    fn test_internal_line_breaks_collapsed() {
        let document = StructuredDocument::new(
            "T".to_string(),
            vec![Section::new("H", "wrapped\nline")],
        );

        let markdown = MarkdownWriter::new().render(&document);
        assert!(markdown.contains("wrapped line"));
    }
}
