//! Core data model.

mod candidate;
mod record;

pub use candidate::{ConfidenceTier, MatchCandidate};
pub use record::{FragmentMatch, SearchRecord};
