// file: src/pipeline/orchestrator.rs
// description: coordinates extraction, structure inference, substitution, and rendering
// reference: orchestrates the document processing workflow

use crate::config::Config;
use crate::describer::{Describer, select_describer};
use crate::error::Result;
use crate::extractor::patterns::INTRODUCTION_FALLBACK;
use crate::extractor::{AbstractBoundary, SectionSegmenter, TitleExtractor};
use crate::models::StructuredDocument;
use crate::pipeline::progress::{ProcessStats, StepTracker};
use crate::source::CascadingSource;
use crate::substitutor::ContentSubstitutor;
use crate::writer::OutputFormat;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

const PIPELINE_STEPS: u64 = 6;

// Papers with neither an abstract nor an introduction heading still carry
// header metadata up front; skip a fixed prefix as the last resort.
const HEAD_SKIP_OFFSET: usize = 500;

pub struct DocumentPipeline {
    source: CascadingSource,
    title_extractor: TitleExtractor,
    boundary: AbstractBoundary,
    segmenter: SectionSegmenter,
    substitutor: ContentSubstitutor,
}

impl DocumentPipeline {
    pub fn new(config: &Config) -> Self {
        let describer = select_describer(&config.describer);
        Self::with_components(config, CascadingSource::new(), describer)
    }

    /// Construction with injected capabilities, for deterministic tests.
    pub fn with_components(
        config: &Config,
        source: CascadingSource,
        describer: Arc<dyn Describer>,
    ) -> Self {
        Self {
            source,
            title_extractor: TitleExtractor::new(),
            boundary: AbstractBoundary::new(),
            segmenter: SectionSegmenter::with_min_content_len(
                config.extraction.min_section_content_len,
            ),
            substitutor: ContentSubstitutor::new(describer),
        }
    }

    /// Process one input file end to end. Best-effort throughout: extraction
    /// and structure failures degrade the output, only rendering failures
    /// propagate.
    pub async fn run(
        &self,
        input: &Path,
        output: &Path,
        format: OutputFormat,
    ) -> Result<ProcessStats> {
        let mut tracker = StepTracker::new(PIPELINE_STEPS);
        info!("Processing {}", input.display());

        tracker.step("Extracting text and tables");
        let raw = self.source.extract(input);
        if raw.text.trim().is_empty() {
            warn!("No text recovered from {}, output will be minimal", input.display());
        }
        info!("Extracted {} chars, {} tables", raw.text.len(), raw.tables.len());

        tracker.step("Extracting title");
        let title = self.title_extractor.extract(&raw.text);
        info!("Title: {}", title);

        tracker.step("Locating abstract");
        if let Some(abstract_text) = self.boundary.extract_abstract(&raw.text) {
            debug!("Abstract located ({} chars)", abstract_text.len());
        }
        let body = self.body_slice(&raw.text);

        tracker.step("Describing equations and tables");
        let outcome = self.substitutor.substitute(body, &raw.tables).await?;

        tracker.step("Segmenting sections");
        let sections = self.segmenter.segment(&outcome.text);
        info!("Found {} sections", sections.len());

        tracker.step("Rendering output");
        let document = StructuredDocument::new(title, sections);
        format.writer().write(&document, output)?;

        let stats = ProcessStats {
            sections_found: document.section_count(),
            equations_replaced: outcome.equations_replaced,
            tables_described: outcome.tables_described,
            tables_dropped: outcome.tables_dropped,
            duration_secs: tracker.elapsed_secs(),
        };
        tracker.finish();
        self.log_final_stats(&stats);

        Ok(stats)
    }

    /// Body selection cascade: text from the abstract onward; else from an
    /// introduction heading; else past a fixed header-sized prefix. A missing
    /// abstract never aborts processing.
    fn body_slice<'a>(&self, text: &'a str) -> &'a str {
        if let Some(span) = self.boundary.find(text) {
            if span.start > 0 {
                return &text[span.start..];
            }
        }

        if let Some(m) = INTRODUCTION_FALLBACK.find(text) {
            return &text[m.start()..];
        }

        if text.len() > HEAD_SKIP_OFFSET {
            return &text[floor_char_boundary(text, HEAD_SKIP_OFFSET)..];
        }

        text
    }

    fn log_final_stats(&self, stats: &ProcessStats) {
        info!("=== Processing Summary ===");
        info!("Duration: {:.2} seconds", stats.duration_secs);
        info!("Sections: {}", stats.sections_found);
        info!("Equations replaced: {}", stats.equations_replaced);
        info!("Tables described: {}", stats.tables_described);
        info!("Tables dropped (no reference): {}", stats.tables_dropped);
        info!("==========================");
    }
}

fn floor_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describer::RuleBasedDescriber;
    use crate::source::PlainTextSource;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn test_pipeline() -> DocumentPipeline {
        let config = Config::default_config();
        DocumentPipeline::with_components(
            &config,
            CascadingSource::with_backends(vec![Box::new(PlainTextSource::new())]),
            Arc::new(RuleBasedDescriber::new()),
        )
    }

    fn sample_paper() -> String {
        let abstract_para = "this paper examines the transformative impact of machine \
                             learning on contemporary research methodologies today.";
        let intro_para = "machine learning has changed the way researchers approach \
                          complex problems, and traditional methods often struggled with \
                          large datasets while modern algorithms do not.";
        let conclusion_para = "this study demonstrates a pervasive influence across \
                               academic disciplines everywhere.";

        format!(
            "A Study of Something Interesting\n\
             Abstract\n{abstract_para}\n\
             Introduction\n{intro_para}\n\
             Conclusion\n{conclusion_para}\n"
        )
    }

    #[tokio::test]
    async fn test_end_to_end_structure() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "{}", sample_paper()).unwrap();
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");

        let stats = test_pipeline()
            .run(input.path(), &output, OutputFormat::Json)
            .await
            .unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();

        assert_eq!(parsed["title"], "A Study of Something Interesting");
        let headings: Vec<&str> = parsed["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["heading"].as_str().unwrap())
            .collect();
        assert!(headings.len() >= 2);
        assert_eq!(headings, vec!["Introduction", "Conclusion"]);
        assert_eq!(stats.sections_found, headings.len());
    }

    #[tokio::test]
    async fn test_empty_input_still_completes() {
        let input = NamedTempFile::new().unwrap();
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.html");

        let stats = test_pipeline()
            .run(input.path(), &output, OutputFormat::Html)
            .await
            .unwrap();

        assert!(output.exists());
        assert_eq!(stats.sections_found, 1);
    }

    #[test]
    fn test_body_starts_at_abstract() {
        let pipeline = test_pipeline();
        let text = "Title line\nAuthors here\nAbstract\nthe body";

        assert_eq!(pipeline.body_slice(text), "Abstract\nthe body");
    }

    #[test]
    fn test_body_falls_back_to_introduction() {
        let pipeline = test_pipeline();
        let text = "Title line\nAuthors here\n1. Introduction\nthe body";

        assert!(pipeline.body_slice(text).starts_with("1"));
    }

    #[test]
    fn test_body_falls_back_to_fixed_offset() {
        let pipeline = test_pipeline();
        let text = "x".repeat(600);

        assert_eq!(pipeline.body_slice(&text).len(), 100);
    }

    #[test]
    fn test_short_text_used_whole() {
        let pipeline = test_pipeline();
        let text = "just a short note with no structure";

        assert_eq!(pipeline.body_slice(text), text);
    }

    #[test]
    fn test_floor_char_boundary() {
        let text = "aé"; // 'é' spans bytes 1..3
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 10), 3);
    }
}
