// file: src/extractor/patterns.rs
// description: compiled regex patterns for metadata removal and structure inference
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Metadata removal. Character classes stop at whitespace so a deletion
    // never eats adjacent prose.
    pub static ref HTTP_URL: Regex = Regex::new(
        r"https?://[^\s]+"
    ).expect("HTTP_URL regex is valid");

    pub static ref WWW_URL: Regex = Regex::new(
        r"www\.[^\s]+"
    ).expect("WWW_URL regex is valid");

    pub static ref DOI: Regex = Regex::new(
        r"(?i)doi:\s*[^\s]+"
    ).expect("DOI regex is valid");

    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b"
    ).expect("EMAIL regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");

    // Title rejection: years, page markers, volume markers
    pub static ref TITLE_NOISE: Regex = Regex::new(
        r"\d{4}|\bpage\b|\bvol\b"
    ).expect("TITLE_NOISE regex is valid");

    // Abstract boundary, in priority order: start patterns then end patterns
    pub static ref ABSTRACT_HEAD: Regex = Regex::new(
        r"(?i)\babstract\b"
    ).expect("ABSTRACT_HEAD regex is valid");

    pub static ref SUMMARY_HEAD: Regex = Regex::new(
        r"(?i)\bsummary\b"
    ).expect("SUMMARY_HEAD regex is valid");

    pub static ref INTRODUCTION_HEAD: Regex = Regex::new(
        r"(?i)\bintroduction\b"
    ).expect("INTRODUCTION_HEAD regex is valid");

    pub static ref NUMBERED_INTRODUCTION_HEAD: Regex = Regex::new(
        r"(?i)\b1\s*\.?\s*introduction\b"
    ).expect("NUMBERED_INTRODUCTION_HEAD regex is valid");

    pub static ref KEYWORDS_HEAD: Regex = Regex::new(
        r"(?i)\bkeywords\b"
    ).expect("KEYWORDS_HEAD regex is valid");

    // Leading "abstract" marker when extracting the abstract's own text
    pub static ref ABSTRACT_MARKER: Regex = Regex::new(
        r"(?i)^\s*abstract\s*:?\s*"
    ).expect("ABSTRACT_MARKER regex is valid");

    // Heading families, evaluated independently over the whole body.
    // Family order is the dedup priority.
    pub static ref NUMBERED_HEADING: Regex = Regex::new(
        r"\n\s*(\d+\.?\d*\.?\s+[A-Z][^\n]{3,60})\s*\n"
    ).expect("NUMBERED_HEADING regex is valid");

    pub static ref ALL_CAPS_HEADING: Regex = Regex::new(
        r"\n\s*([A-Z][A-Z\s]{3,50})\s*\n"
    ).expect("ALL_CAPS_HEADING regex is valid");

    pub static ref TITLE_CASE_HEADING: Regex = Regex::new(
        r"\n\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,4})\s*\n"
    ).expect("TITLE_CASE_HEADING regex is valid");

    pub static ref COMMON_SECTION_HEADING: Regex = Regex::new(
        r"(?i)\n\s*(Abstract|Introduction|Related Work|Background|Methodology|Methods|Results|Discussion|Conclusion|References|Acknowledgments)\s*\n"
    ).expect("COMMON_SECTION_HEADING regex is valid");

    // Equation spans: display math, inline math, explicit equation environment
    pub static ref EQUATION: Regex = Regex::new(
        r"(?s)\$\$.*?\$\$|\$.*?\$|\\begin\{equation\}.*?\\end\{equation\}"
    ).expect("EQUATION regex is valid");

    // Introduction fallback used when no abstract is found
    pub static ref INTRODUCTION_FALLBACK: Regex = Regex::new(
        r"(?i)\b(introduction|1\s*\.?\s*introduction)\b"
    ).expect("INTRODUCTION_FALLBACK regex is valid");
}

/// Matcher for a textual "Table N" reference, 1-based.
pub fn table_reference(index: usize) -> Regex {
    Regex::new(&format!(r"(?i)\bTable\s+{}\b", index))
        .expect("table reference regex is valid")
}
