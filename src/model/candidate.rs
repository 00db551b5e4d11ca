//! Line candidates produced by the fragment locator.

use std::fmt;

/// A document line hypothesized to hold a fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    /// Line number (1-indexed).
    pub line: usize,
    /// The raw document line, as it appears in the file.
    pub text: String,
    /// Match quality in `[0.0, 1.0]`. Not a probability.
    pub confidence: f64,
}

impl MatchCandidate {
    /// Creates a new candidate.
    pub fn new(line: usize, text: impl Into<String>, confidence: f64) -> Self {
        Self {
            line,
            text: text.into(),
            confidence,
        }
    }

    /// Creates a candidate from a 0-based line index.
    pub fn at_index(index: usize, text: &str, confidence: f64) -> Self {
        Self::new(index + 1, text, confidence)
    }

    /// Display tier for this candidate's confidence.
    pub fn tier(&self, high: f64, mid: f64) -> ConfidenceTier {
        ConfidenceTier::classify(self.confidence, high, mid)
    }
}

impl fmt::Display for MatchCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ({:.2})", self.line, self.confidence)
    }
}

/// Visual bucket for a confidence score. Affects display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Buckets `confidence`: above `high` is High, above `mid` is Medium.
    pub fn classify(confidence: f64, high: f64, mid: f64) -> Self {
        if confidence > high {
            ConfidenceTier::High
        } else if confidence > mid {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    /// The check-mark indicator printed in reports.
    pub fn indicator(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "✓✓✓",
            ConfidenceTier::Medium => "✓✓",
            ConfidenceTier::Low => "✓",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.indicator())
    }
}
