//! Locate command implementation.
//!
//! Walks the search results in input order, locates every fragment in its
//! file's text and writes the report.

use std::io::Write;

use crate::config::Config;
use crate::errors::Result;
use crate::matching::Locator;
use crate::model::SearchRecord;
use crate::readers::SearchResponse;
use crate::report::ReportWriter;

/// Counts reported in the final summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocateSummary {
    /// Records with at least one located fragment.
    pub located: usize,
    /// All records, including skipped ones.
    pub total: usize,
}

/// Outcome of processing a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The record had no fragments and was not printed.
    NoFragments,
    /// The record had no file text; fragments were not located.
    MissingText,
    /// Fragments were processed; `located` tells whether any was found.
    Processed { located: bool },
}

/// Executes the locate command over a parsed response.
pub fn locate<W: Write>(response: &SearchResponse, config: &Config, out: W) -> Result<LocateSummary> {
    let records = response.records();
    let mut report = ReportWriter::new(out, config.display);

    if records.is_empty() {
        report.no_results()?;
        return Ok(LocateSummary::default());
    }

    let locator = Locator::new(config.matching);
    locate_records(&records, &locator, &mut report)
}

/// Processes `records` in order and writes the summary.
pub fn locate_records<W: Write>(
    records: &[SearchRecord],
    locator: &Locator,
    report: &mut ReportWriter<W>,
) -> Result<LocateSummary> {
    let mut summary = LocateSummary {
        located: 0,
        total: records.len(),
    };

    for record in records {
        let outcome = locate_record(record, locator, report)?;
        if outcome == (RecordOutcome::Processed { located: true }) {
            summary.located += 1;
        }
    }

    report.summary(summary.located, summary.total)?;
    tracing::info!(
        "Located line numbers for {}/{} files",
        summary.located,
        summary.total
    );
    Ok(summary)
}

/// Writes the report section for one record.
pub fn locate_record<W: Write>(
    record: &SearchRecord,
    locator: &Locator,
    report: &mut ReportWriter<W>,
) -> Result<RecordOutcome> {
    if record.matches.is_empty() {
        tracing::debug!("Skipping {} with no text matches", record.path);
        return Ok(RecordOutcome::NoFragments);
    }

    report.record_header(record)?;

    let Some(text) = record.text.as_deref() else {
        tracing::warn!("No file text for {}/{}", record.repository, record.path);
        report.missing_text()?;
        return Ok(RecordOutcome::MissingText);
    };

    let mut located = false;
    for (index, fragment_match) in record.matches.iter().enumerate() {
        if fragment_match.fragment.is_empty() {
            continue;
        }

        report.fragment(index + 1, &fragment_match.fragment, &fragment_match.highlights)?;

        let candidates = locator.locate(&fragment_match.fragment, text);
        located |= !candidates.is_empty();
        report.candidates(record, &candidates)?;
    }

    Ok(RecordOutcome::Processed { located })
}
