//! Fragment locator: runs the strategy cascade and ranks the result.

use super::strategies::{Document, Fragment, STRATEGIES};
use crate::config::MatchSettings;
use crate::model::MatchCandidate;

/// Locates fragments within a document using a fixed set of thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Locator {
    settings: MatchSettings,
}

impl Locator {
    /// Creates a locator with the given thresholds.
    pub fn new(settings: MatchSettings) -> Self {
        Self { settings }
    }

    /// Returns the thresholds in use.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Returns candidate lines for `fragment` in `text`, best first.
    ///
    /// Strategies are tried in order and the first one that produces any
    /// candidate wins. An empty list means the fragment was not found.
    pub fn locate(&self, fragment: &str, text: &str) -> Vec<MatchCandidate> {
        let fragment = Fragment::new(fragment);
        let document = Document::new(text);

        for (name, strategy) in STRATEGIES {
            let mut candidates = strategy(&fragment, &document, &self.settings);
            if candidates.is_empty() {
                continue;
            }
            tracing::debug!(
                "Strategy {} produced {} candidate(s)",
                name,
                candidates.len()
            );
            sort_by_confidence(&mut candidates);
            return candidates;
        }

        tracing::debug!("No strategy located fragment of {} line(s)", fragment.lines.len());
        Vec::new()
    }
}

/// Locates `fragment` in `text` with the default thresholds.
pub fn locate_fragment(fragment: &str, text: &str) -> Vec<MatchCandidate> {
    Locator::default().locate(fragment, text)
}

/// Sorts by confidence, highest first. Ties keep document order.
fn sort_by_confidence(candidates: &mut [MatchCandidate]) {
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}
