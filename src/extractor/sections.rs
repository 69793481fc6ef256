// file: src/extractor/sections.rs
// description: partitions body text into (heading, content) sections with offset dedup
// reference: internal structure inference rules

use crate::extractor::patterns::{
    ALL_CAPS_HEADING, COMMON_SECTION_HEADING, NUMBERED_HEADING, TITLE_CASE_HEADING,
};
use crate::models::Section;
use regex::Regex;
use tracing::debug;

const DEFAULT_MIN_CONTENT_LEN: usize = 50;
const DISALLOWED_HEADING_CHARS: [char; 5] = [':', '(', ')', '[', ']'];
const FALLBACK_HEADING: &str = "Content";

/// One heading match before dedup. `offset` is where the match begins (the
/// newline preceding the heading), `heading_end` is where the captured heading
/// text ends, `family` is the index of the pattern family that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCandidate {
    pub offset: usize,
    pub heading_end: usize,
    pub heading: String,
    pub family: usize,
}

/// Deduplicate candidates by exact starting offset: at most one heading
/// survives per offset, lowest family index winning ties. Result is sorted by
/// offset.
pub fn dedupe_candidates(mut candidates: Vec<HeadingCandidate>) -> Vec<HeadingCandidate> {
    candidates.sort_by(|a, b| a.offset.cmp(&b.offset).then(a.family.cmp(&b.family)));

    let mut unique: Vec<HeadingCandidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if unique.last().map(|c| c.offset) != Some(candidate.offset) {
            unique.push(candidate);
        }
    }
    unique
}

pub struct SectionSegmenter {
    min_content_len: usize,
}

impl SectionSegmenter {
    pub fn new() -> Self {
        Self {
            min_content_len: DEFAULT_MIN_CONTENT_LEN,
        }
    }

    pub fn with_min_content_len(min_content_len: usize) -> Self {
        Self { min_content_len }
    }

    /// Segment body text into ordered sections. Guaranteed non-empty: when no
    /// heading survives filtering, a single "Content" section carrying the
    /// whole input is returned.
    pub fn segment(&self, text: &str) -> Vec<Section> {
        let candidates = dedupe_candidates(self.collect_candidates(text));
        let mut sections = Vec::with_capacity(candidates.len());

        for (i, candidate) in candidates.iter().enumerate() {
            let end = candidates
                .get(i + 1)
                .map(|next| next.offset)
                .unwrap_or(text.len());

            // A multiline heading match can reach past the next candidate's
            // offset; clamp so the slice stays ordered
            let content_start = candidate.heading_end.min(end);
            let content = text[content_start..end].trim();
            if content.len() < self.min_content_len {
                debug!(
                    "rejecting heading candidate {:?}: content below {} chars",
                    candidate.heading, self.min_content_len
                );
                continue;
            }

            sections.push(Section::new(candidate.heading.clone(), content));
        }

        if sections.is_empty() {
            sections.push(Section::new(FALLBACK_HEADING, text));
        }

        sections
    }

    fn collect_candidates(&self, text: &str) -> Vec<HeadingCandidate> {
        let families: [&Regex; 4] = [
            &NUMBERED_HEADING,
            &ALL_CAPS_HEADING,
            &TITLE_CASE_HEADING,
            &COMMON_SECTION_HEADING,
        ];

        let mut candidates = Vec::new();
        for (family, pattern) in families.iter().enumerate() {
            for captures in pattern.captures_iter(text) {
                let whole = captures.get(0).expect("match has a whole group");
                let group = captures.get(1).expect("heading families capture group 1");
                let heading = group.as_str().trim();

                if heading.len() < 3
                    || heading.contains(DISALLOWED_HEADING_CHARS)
                {
                    continue;
                }

                candidates.push(HeadingCandidate {
                    offset: whole.start(),
                    heading_end: group.end(),
                    heading: heading.to_string(),
                    family,
                });
            }
        }
        candidates
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn para(len: usize) -> String {
        "lorem ipsum dolor sit amet "
            .chars()
            .cycle()
            .take(len)
            .collect()
    }

    #[test]
    fn test_dedupe_keeps_lowest_family_per_offset() {
        let candidates = vec![
            HeadingCandidate {
                offset: 10,
                heading_end: 22,
                heading: "Introduction".to_string(),
                family: 3,
            },
            HeadingCandidate {
                offset: 10,
                heading_end: 22,
                heading: "Introduction".to_string(),
                family: 2,
            },
            HeadingCandidate {
                offset: 0,
                heading_end: 8,
                heading: "Abstract".to_string(),
                family: 3,
            },
        ];

        let unique = dedupe_candidates(candidates);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].offset, 0);
        assert_eq!(unique[1].offset, 10);
        assert_eq!(unique[1].family, 2);
    }

    #[test]
    fn test_numbered_sections() {
        let segmenter = SectionSegmenter::new();
        let text = format!(
            "preamble\n1. Introduction\n{}\n2. Methods\n{}",
            para(80),
            para(80)
        );
        let sections = segmenter.segment(&text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "1. Introduction");
        assert_eq!(sections[1].heading, "2. Methods");
    }

    #[test]
    fn test_heading_stripped_from_content() {
        let segmenter = SectionSegmenter::new();
        let text = format!("x\nIntroduction\n{}", para(100));
        let sections = segmenter.segment(&text);

        assert_eq!(sections.len(), 1);
        assert!(!sections[0].content.starts_with("Introduction"));
        assert!(sections[0].content.starts_with("lorem"));
    }

    #[test]
    fn test_short_content_rejected() {
        let segmenter = SectionSegmenter::new();
        // "Results" matches mid-document but its content is too short to be a
        // real section
        let text = format!("x\nIntroduction\n{}\nResults\ntiny", para(90));
        let sections = segmenter.segment(&text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Introduction");
    }

    #[test]
    fn test_punctuated_matches_discarded() {
        let segmenter = SectionSegmenter::new();
        let text = format!("x\n1. Results (preliminary)\n{}", para(90));
        let sections = segmenter.segment(&text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, FALLBACK_HEADING);
    }

    #[test]
    fn test_duplicate_headings_preserved() {
        let segmenter = SectionSegmenter::new();
        let text = format!("x\nResults\n{}\nResults\n{}", para(80), para(80));
        let sections = segmenter.segment(&text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "Results");
        assert_eq!(sections[1].heading, "Results");
    }

    #[test]
    fn test_all_caps_headings() {
        let segmenter = SectionSegmenter::new();
        let text = format!("x\nRELATED WORK\n{}", para(90));
        let sections = segmenter.segment(&text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "RELATED WORK");
    }

    #[test]
    fn test_multiline_caps_match_clamped() {
        let segmenter = SectionSegmenter::new();
        // The all-caps family greedily spans consecutive heading lines; the
        // engulfed candidates must not invert the content slice
        let text = format!("x\nABSTRACT\nMETHODS\nRESULTS\n{}", para(90));
        let sections = segmenter.segment(&text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "RESULTS");
    }

    #[test]
    fn test_fallback_single_section() {
        let segmenter = SectionSegmenter::new();
        let text = "no recognizable headings anywhere in this text at all";
        let sections = segmenter.segment(text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, FALLBACK_HEADING);
        assert_eq!(sections[0].content, text);
    }

    #[test]
    fn test_fallback_on_empty_input() {
        let segmenter = SectionSegmenter::new();
        let sections = segmenter.segment("");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, FALLBACK_HEADING);
    }

    #[test]
    fn test_content_coverage() {
        let segmenter = SectionSegmenter::new();
        let body_a = para(70);
        let body_b = para(60);
        let text = format!("x\nIntroduction\n{body_a}\nConclusion\n{body_b}");
        let sections = segmenter.segment(&text);

        // Every surviving section's body text is carried through intact
        assert_eq!(sections.len(), 2);
        assert!(sections[0].content.contains(body_a.trim()));
        assert!(sections[1].content.contains(body_b.trim()));
    }
}
