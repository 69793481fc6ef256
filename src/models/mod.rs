// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod span;

pub use document::{RawDocument, RawTable, Section, StructuredDocument};
pub use span::AbstractSpan;
