// file: src/extractor/title.rs
// description: heuristic title extraction from the head of raw paper text
// reference: internal structure inference rules

use crate::extractor::patterns::TITLE_NOISE;

const SCAN_LINES: usize = 15;
const MIN_TITLE_LEN: usize = 10;
const MAX_TITLE_LEN: usize = 300;
const FALLBACK_SCAN_LINES: usize = 5;
const FALLBACK_MIN_LEN: usize = 15;
const UNTITLED: &str = "Untitled Document";

// Lines carrying any of these markers are header/footer metadata, not titles
const METADATA_MARKERS: [&str; 15] = [
    "http",
    "www.",
    "@",
    "arxiv",
    "volume",
    "journal",
    "issn",
    "doi:",
    "page",
    "abstract",
    "author",
    "university",
    "department",
    "published",
    "received",
];

pub struct TitleExtractor;

impl TitleExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Return the paper title, verbatim from the source, or the sentinel
    /// "Untitled Document". Titles are reliably the first substantial
    /// non-metadata line of extracted academic PDFs, so the first surviving
    /// line wins outright; no scoring.
    pub fn extract(&self, text: &str) -> String {
        for line in text.lines().take(SCAN_LINES) {
            let line = line.trim();
            if self.is_candidate(line) {
                return line.to_string();
            }
        }

        self.longest_head_line(text)
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    fn is_candidate(&self, line: &str) -> bool {
        if line.len() < MIN_TITLE_LEN || line.len() > MAX_TITLE_LEN {
            return false;
        }

        let lowered = line.to_lowercase();
        if METADATA_MARKERS.iter().any(|m| lowered.contains(m)) {
            return false;
        }

        !TITLE_NOISE.is_match(&lowered)
    }

    fn longest_head_line(&self, text: &str) -> Option<String> {
        text.lines()
            .take(FALLBACK_SCAN_LINES)
            .map(str::trim)
            .filter(|line| line.len() > FALLBACK_MIN_LEN)
            .max_by_key(|line| line.len())
            .map(str::to_string)
    }
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self::new()
    }
}
