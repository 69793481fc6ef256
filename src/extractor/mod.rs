// file: src/extractor/mod.rs
// description: structure inference module exports
// reference: internal module structure

pub mod boundary;
pub mod patterns;
pub mod sections;
pub mod title;

pub use boundary::AbstractBoundary;
pub use sections::{HeadingCandidate, SectionSegmenter, dedupe_candidates};
pub use title::TitleExtractor;
