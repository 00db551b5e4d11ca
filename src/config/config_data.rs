//! Configuration data structures.

use serde::{Deserialize, Serialize};

use crate::errors::{LocatorError, Result};

/// Main configuration structure for the fragment locator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Thresholds used by the matching strategies.
    #[serde(default)]
    pub matching: MatchSettings,

    /// Limits and tiers used when rendering the report.
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that every threshold lies in `[0, 1]` and every limit is non-zero.
    pub fn validate(&self) -> Result<()> {
        let m = &self.matching;
        let d = &self.display;
        let ratios = [
            ("matching.multiline_threshold", m.multiline_threshold),
            ("matching.fuzzy_threshold", m.fuzzy_threshold),
            ("matching.keyword_confidence", m.keyword_confidence),
            ("display.high_tier", d.high_tier),
            ("display.mid_tier", d.mid_tier),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(LocatorError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        let limits = [
            ("display.max_candidates", d.max_candidates),
            ("display.max_highlights", d.max_highlights),
            ("display.fragment_preview_len", d.fragment_preview_len),
            ("display.line_preview_len", d.line_preview_len),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(LocatorError::Config(format!("{} must be non-zero", name)));
            }
        }

        Ok(())
    }
}

/// Matching-strategy thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Similarity a follow-on line must exceed in a multi-line match.
    #[serde(default = "default_multiline_threshold")]
    pub multiline_threshold: f64,

    /// Similarity a line must exceed in the single-line fuzzy match.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Fixed confidence of keyword matches.
    #[serde(default = "default_keyword_confidence")]
    pub keyword_confidence: f64,

    /// Minimum word count before a single line is fuzzily matched.
    #[serde(default = "default_min_fuzzy_words")]
    pub min_fuzzy_words: usize,
}

fn default_multiline_threshold() -> f64 {
    0.7
}

fn default_fuzzy_threshold() -> f64 {
    0.8
}

fn default_keyword_confidence() -> f64 {
    0.6
}

fn default_min_fuzzy_words() -> usize {
    3
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            multiline_threshold: default_multiline_threshold(),
            fuzzy_threshold: default_fuzzy_threshold(),
            keyword_confidence: default_keyword_confidence(),
            min_fuzzy_words: default_min_fuzzy_words(),
        }
    }
}

/// Report rendering limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Candidates shown per fragment.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Highlights shown per fragment.
    #[serde(default = "default_max_highlights")]
    pub max_highlights: usize,

    /// Characters of a fragment shown before the ellipsis.
    #[serde(default = "default_fragment_preview_len")]
    pub fragment_preview_len: usize,

    /// Characters of a matched line shown before the ellipsis.
    #[serde(default = "default_line_preview_len")]
    pub line_preview_len: usize,

    /// Confidence above which a candidate is in the top tier.
    #[serde(default = "default_high_tier")]
    pub high_tier: f64,

    /// Confidence above which a candidate is in the middle tier.
    #[serde(default = "default_mid_tier")]
    pub mid_tier: f64,
}

fn default_max_candidates() -> usize {
    3
}

fn default_max_highlights() -> usize {
    3
}

fn default_fragment_preview_len() -> usize {
    100
}

fn default_line_preview_len() -> usize {
    80
}

fn default_high_tier() -> f64 {
    0.9
}

fn default_mid_tier() -> f64 {
    0.7
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_candidates: default_max_candidates(),
            max_highlights: default_max_highlights(),
            fragment_preview_len: default_fragment_preview_len(),
            line_preview_len: default_line_preview_len(),
            high_tier: default_high_tier(),
            mid_tier: default_mid_tier(),
        }
    }
}
