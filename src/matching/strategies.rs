//! The individual matching strategies.
//!
//! Each strategy is a pure function from a prepared fragment and document to
//! a list of candidates. The locator runs them in order and keeps the first
//! non-empty result.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::{normalize, word_count};
use super::similarity::similarity;
use crate::config::MatchSettings;
use crate::model::MatchCandidate;

/// Identifier following a declaration keyword.
static KEYWORD_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:class|function|def|const|let|var|public|private|protected)\s+(\w+)")
        .expect("keyword pattern is valid")
});

/// Common signature shared by all strategies.
pub type Strategy = fn(&Fragment, &Document, &MatchSettings) -> Vec<MatchCandidate>;

/// The strategies in the order they are tried.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("exact", exact_match as Strategy),
    ("multiline", multiline_match as Strategy),
    ("fuzzy", fuzzy_line_match as Strategy),
    ("keyword", keyword_match as Strategy),
];

/// A fragment split and normalized once for all strategies.
#[derive(Debug, Clone)]
pub struct Fragment<'a> {
    /// The fragment as supplied.
    pub raw: &'a str,
    /// Whole-fragment normalized form.
    pub normalized: String,
    /// Per-line normalized forms, split on `\n`.
    pub lines: Vec<String>,
}

impl<'a> Fragment<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: normalize(raw),
            lines: raw.split('\n').map(normalize).collect(),
        }
    }
}

/// A document split on `\n`, with each line's normalized form.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    /// Raw lines, empty lines preserved.
    pub lines: Vec<&'a str>,
    /// Normalized form of each line.
    pub normalized: Vec<String>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let normalized = lines.iter().map(|line| normalize(line)).collect();
        Self { lines, normalized }
    }
}

/// Lines whose normalized form contains the normalized fragment.
pub fn exact_match(
    fragment: &Fragment,
    document: &Document,
    _settings: &MatchSettings,
) -> Vec<MatchCandidate> {
    document
        .normalized
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(fragment.normalized.as_str()))
        .map(|(i, _)| MatchCandidate::at_index(i, document.lines[i], 1.0))
        .collect()
}

/// Anchors the first fragment line by containment, then walks forward
/// while each following line stays similar enough.
///
/// A candidate needs at least half the fragment lines accepted, compared
/// as real numbers: two of three lines pass, two of five do not.
pub fn multiline_match(
    fragment: &Fragment,
    document: &Document,
    settings: &MatchSettings,
) -> Vec<MatchCandidate> {
    let total = fragment.lines.len();
    if total <= 1 {
        return Vec::new();
    }

    let first = fragment.lines[0].as_str();
    let mut candidates = Vec::new();

    for (i, anchor) in document.normalized.iter().enumerate() {
        if !(anchor.contains(first) || first.contains(anchor.as_str())) {
            continue;
        }

        let mut accepted = 1usize;
        let mut confidence = 1.0f64;
        for (j, frag_line) in fragment.lines.iter().enumerate().skip(1) {
            let Some(doc_line) = document.normalized.get(i + j) else {
                break;
            };
            let score = similarity(frag_line, doc_line);
            if score > settings.multiline_threshold {
                accepted += 1;
                confidence = confidence.min(score);
            } else {
                break;
            }
        }

        if accepted as f64 >= total as f64 / 2.0 {
            candidates.push(MatchCandidate::at_index(i, document.lines[i], confidence));
        }
    }

    candidates
}

/// Similarity against every line for single-line fragments with enough words.
pub fn fuzzy_line_match(
    fragment: &Fragment,
    document: &Document,
    settings: &MatchSettings,
) -> Vec<MatchCandidate> {
    if fragment.lines.len() != 1 || word_count(&fragment.normalized) < settings.min_fuzzy_words {
        return Vec::new();
    }

    document
        .normalized
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let score = similarity(&fragment.normalized, line);
            (score > settings.fuzzy_threshold)
                .then(|| MatchCandidate::at_index(i, document.lines[i], score))
        })
        .collect()
}

/// Lines containing every identifier declared in the fragment.
pub fn keyword_match(
    fragment: &Fragment,
    document: &Document,
    settings: &MatchSettings,
) -> Vec<MatchCandidate> {
    let terms = keyword_terms(fragment.raw);
    if terms.is_empty() {
        return Vec::new();
    }

    document
        .lines
        .iter()
        .enumerate()
        .filter(|(_, line)| terms.iter().all(|term| line.contains(term.as_str())))
        .map(|(i, line)| MatchCandidate::at_index(i, line, settings.keyword_confidence))
        .collect()
}

/// Identifiers that follow a declaration keyword such as `def` or `class`.
///
/// Case-sensitive; terms are returned in order of appearance.
pub fn keyword_terms(text: &str) -> Vec<String> {
    KEYWORD_TERM
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(strategy: Strategy, fragment: &str, text: &str) -> Vec<MatchCandidate> {
        strategy(
            &Fragment::new(fragment),
            &Document::new(text),
            &MatchSettings::default(),
        )
    }

    fn lines_of(candidates: &[MatchCandidate]) -> Vec<usize> {
        candidates.iter().map(|c| c.line).collect()
    }

    #[test]
    fn test_document_preserves_empty_lines() {
        let doc = Document::new("a\n\n  b  \n");
        assert_eq!(doc.lines, vec!["a", "", "  b  ", ""]);
        assert_eq!(doc.normalized, vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_exact_match_normalizes_whitespace() {
        let found = run(exact_match, "bar   baz", "foo\nbar baz\nqux");
        assert_eq!(found, vec![MatchCandidate::new(2, "bar baz", 1.0)]);
    }

    #[test]
    fn test_exact_match_substring_of_line() {
        let found = run(exact_match, "compute(x)", "let a = compute(x);\nlet b = compute(y);");
        assert_eq!(lines_of(&found), vec![1]);
        assert_eq!(found[0].text, "let a = compute(x);");
    }

    #[test]
    fn test_exact_match_multiline_fragment_collapses_to_one_line() {
        let found = run(exact_match, "if x {\n  y\n}", "if x { y }\nz");
        assert_eq!(lines_of(&found), vec![1]);
    }

    #[test]
    fn test_multiline_single_line_fragment_skipped() {
        assert!(run(multiline_match, "foo", "foo\nbar").is_empty());
    }

    #[test]
    fn test_multiline_full_match() {
        let text = "fn main() {\n    let total = compute(a, b);\n    println!(\"{}\", total);\n}";
        let fragment = "fn main() {\nlet total = compute(a, c);\nprintln!(\"{}\", total);";
        let found = run(multiline_match, fragment, text);
        assert_eq!(lines_of(&found), vec![1]);
        let expected = 50.0 / 52.0;
        assert!((found[0].confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_multiline_reverse_containment_anchor() {
        // The document line is contained in the fragment's first line.
        let text = "start\nalpha beta gamma\nend";
        let fragment = "prefix start suffix\nalpha beta gamma";
        let found = run(multiline_match, fragment, text);
        assert_eq!(lines_of(&found), vec![1]);
        assert_eq!(found[0].confidence, 1.0);
    }

    #[test]
    fn test_multiline_half_boundary_four_lines() {
        // Anchor plus one similar line out of four: 2 >= 2, accepted.
        let text = "anchor line\nsecond line here\nunrelated\nnothing";
        let fragment = "anchor line\nsecond line here\nzzzzzzzz\nqqqqqqqq";
        let found = run(multiline_match, fragment, text);
        assert_eq!(lines_of(&found), vec![1]);
        assert_eq!(found[0].confidence, 1.0);
    }

    #[test]
    fn test_multiline_half_boundary_five_lines() {
        // Two of five accepted: 2 < 2.5, rejected.
        let text = "anchor line\nsecond line here\nunrelated\nnothing\nmore";
        let fragment = "anchor line\nsecond line here\nzzzzzzzz\nqqqqqqqq\nwwwwwwww";
        assert!(run(multiline_match, fragment, text).is_empty());
    }

    #[test]
    fn test_multiline_three_lines_two_accepted() {
        let text = "anchor line\nsecond line here\nunrelated";
        let fragment = "anchor line\nsecond line here\nzzzzzzzz";
        assert_eq!(lines_of(&run(multiline_match, fragment, text)), vec![1]);
    }

    #[test]
    fn test_multiline_stops_at_document_end() {
        let text = "x\nanchor line";
        let fragment = "anchor line\nfollowing line\nanother one";
        // Only the anchor is accepted: 1 < 1.5.
        assert!(run(multiline_match, fragment, text).is_empty());
    }

    #[test]
    fn test_multiline_blank_line_anchors() {
        // A blank line is contained in any first line, so it anchors too.
        let text = "alpha\n\nomega";
        let found = run(multiline_match, "first line\nzzzz", text);
        assert_eq!(lines_of(&found), vec![2]);
        assert_eq!(found[0].confidence, 1.0);
    }

    #[test]
    fn test_fuzzy_requires_three_words() {
        // Two-word near miss never fuzzily matches.
        assert!(run(fuzzy_line_match, "return value", "return values").is_empty());
    }

    #[test]
    fn test_fuzzy_matches_near_line() {
        let text = "let total = compute(a, c);\nother";
        let found = run(fuzzy_line_match, "let total = compute(a, b);", text);
        assert_eq!(lines_of(&found), vec![1]);
        assert!(found[0].confidence > 0.8 && found[0].confidence < 1.0);
    }

    #[test]
    fn test_fuzzy_skips_multiline_fragment() {
        assert!(run(fuzzy_line_match, "let a = 1;\nlet b = 2;", "let a = 1;").is_empty());
    }

    #[test]
    fn test_keyword_terms() {
        assert_eq!(keyword_terms("def process_data(x):"), vec!["process_data"]);
        assert_eq!(
            keyword_terms("public class Foo {\n  private int count;"),
            vec!["class", "int"]
        );
        assert_eq!(keyword_terms("class Foo:\n    def bar(self):"), vec!["Foo", "bar"]);
        assert!(keyword_terms("Def upper(x)").is_empty());
        assert!(keyword_terms("x = y + z").is_empty());
    }

    #[test]
    fn test_keyword_match_requires_all_terms() {
        let text = "def process_data(x, y):\n    return process_data_inner(x)\nprocess";
        let found = run(keyword_match, "def process_data(x):", text);
        assert_eq!(lines_of(&found), vec![1, 2]);
        assert!(found.iter().all(|c| c.confidence == 0.6));
    }

    #[test]
    fn test_keyword_match_no_terms() {
        assert!(run(keyword_match, "x + y", "x + y").is_empty());
    }

    #[test]
    fn test_strategy_order() {
        let names: Vec<&str> = STRATEGIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["exact", "multiline", "fuzzy", "keyword"]);
    }
}
