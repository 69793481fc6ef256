// file: src/parser/mod.rs
// description: text parsing module exports
// reference: internal module structure

pub mod normalizer;

pub use normalizer::TextNormalizer;
