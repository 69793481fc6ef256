// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod describer;
pub mod error;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod source;
pub mod substitutor;
pub mod utils;
pub mod writer;

pub use config::{Config, DescriberConfig, ExtractionConfig, OutputConfig};
pub use describer::{Describer, RemoteDescriber, RuleBasedDescriber, select_describer};
pub use error::{ProcessorError, Result};
pub use extractor::{AbstractBoundary, SectionSegmenter, TitleExtractor};
pub use models::{AbstractSpan, RawDocument, RawTable, Section, StructuredDocument};
pub use parser::TextNormalizer;
pub use pipeline::{DocumentPipeline, ProcessStats};
pub use source::{CascadingSource, PdfExtractSource, PdfSource, PlainTextSource};
pub use substitutor::{ContentSubstitutor, SubstitutionOutcome};
pub use utils::Validator;
pub use writer::{DocumentWriter, HtmlWriter, JsonWriter, MarkdownWriter, OutputFormat};
