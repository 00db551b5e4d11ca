//! Command implementations.

pub mod locate;

pub use locate::{locate, locate_record, locate_records, LocateSummary, RecordOutcome};
