//! Fragment Locator - maps code-search fragments back to line numbers
//!
//! Code-search APIs return short fragments that are often whitespace-normalized,
//! truncated or reflowed, so they no longer appear verbatim in the file. This
//! library finds the lines they came from by trying a cascade of strategies:
//!
//! - **Exact**: whitespace-normalized substring of a single line
//! - **Multi-line**: first line anchored by containment, following lines by similarity
//! - **Fuzzy**: similarity of a single-line fragment against every line
//! - **Keyword**: lines containing every declared identifier in the fragment
//!
//! Code is treated as plain text; nothing is parsed.
//!
//! # Example
//!
//! ```
//! use fragment_locator::matching::locate_fragment;
//!
//! let candidates = locate_fragment("bar   baz", "foo\nbar baz\nqux");
//! assert_eq!(candidates[0].line, 2);
//! assert_eq!(candidates[0].confidence, 1.0);
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod matching;
pub mod model;
pub mod readers;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use errors::{LocatorError, Result};
pub use matching::{locate_fragment, Locator};
pub use model::{MatchCandidate, SearchRecord};

pub use commands::LocateSummary;
