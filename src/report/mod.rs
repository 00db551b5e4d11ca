//! Human-readable report rendering.
//!
//! The writer is append-only: each method prints one section of the report
//! and nothing is buffered between calls.

mod preview;

use std::io::Write;

pub use preview::{fragment_preview, line_preview, truncate_chars, ELLIPSIS};

use crate::config::DisplaySettings;
use crate::errors::Result;
use crate::model::{MatchCandidate, SearchRecord};

/// Width of the `=` rule between records.
const RULE_WIDTH: usize = 60;

/// Printed when the input holds no search results.
pub const NO_RESULTS: &str = "No search results to process";

/// Printed for a record that lacks its full text.
pub const MISSING_TEXT_WARNING: &str =
    "⚠️  Warning: Full text not available for line number detection";

/// Printed for a fragment with no candidates.
pub const NOT_LOCATED: &str = "   ❌ Could not locate exact line numbers";

/// Writes report sections to an output stream.
pub struct ReportWriter<W: Write> {
    out: W,
    display: DisplaySettings,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a writer with the given display limits.
    pub fn new(out: W, display: DisplaySettings) -> Self {
        Self { out, display }
    }

    /// Returns the display limits in use.
    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    /// Consumes the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn no_results(&mut self) -> Result<()> {
        writeln!(self.out, "{}", NO_RESULTS)?;
        Ok(())
    }

    /// Rule followed by repository, file and URL lines.
    pub fn record_header(&mut self, record: &SearchRecord) -> Result<()> {
        writeln!(self.out, "\n{}", rule())?;
        writeln!(self.out, "Repository: {}", record.repository)?;
        writeln!(self.out, "File: {}", record.path)?;
        writeln!(self.out, "URL: {}", record.url)?;
        Ok(())
    }

    pub fn missing_text(&mut self) -> Result<()> {
        writeln!(self.out, "{}", MISSING_TEXT_WARNING)?;
        Ok(())
    }

    /// Fragment preview line, plus highlights when there are any.
    pub fn fragment(&mut self, index: usize, fragment: &str, highlights: &[String]) -> Result<()> {
        let preview = fragment_preview(fragment, self.display.fragment_preview_len);
        writeln!(self.out, "\n📝 Fragment {}: {}", index, preview)?;

        if !highlights.is_empty() {
            let shown: Vec<&str> = highlights
                .iter()
                .take(self.display.max_highlights)
                .map(String::as_str)
                .collect();
            writeln!(self.out, "   Highlights: {}", shown.join(", "))?;
        }
        Ok(())
    }

    /// Top candidates with tier indicators and deep links.
    pub fn candidates(&mut self, record: &SearchRecord, candidates: &[MatchCandidate]) -> Result<()> {
        if candidates.is_empty() {
            writeln!(self.out, "{}", NOT_LOCATED)?;
            return Ok(());
        }

        writeln!(self.out, "📍 Located at:")?;
        for candidate in candidates.iter().take(self.display.max_candidates) {
            let tier = candidate.tier(self.display.high_tier, self.display.mid_tier);
            let preview = line_preview(&candidate.text, self.display.line_preview_len);
            writeln!(self.out, "   Line {} {}: {}", candidate.line, tier, preview)?;
            writeln!(self.out, "   → {}", record.line_url(candidate.line))?;
        }
        Ok(())
    }

    pub fn summary(&mut self, located: usize, total: usize) -> Result<()> {
        writeln!(self.out, "\n{}", rule())?;
        writeln!(
            self.out,
            "Summary: Located line numbers for {}/{} files",
            located, total
        )?;
        Ok(())
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
