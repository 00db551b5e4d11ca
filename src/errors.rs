//! Error types for the fragment locator.
//!
//! Only the input and configuration stages can fail. Locating a fragment
//! never fails: a miss is an empty candidate list.

use thiserror::Error;

/// Main error type for fragment-locator operations.
#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error parsing JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No input data. This tool expects JSON data via stdin.")]
    NoInput,

    #[error("Empty input")]
    EmptyInput,

    #[error("Interrupted by user")]
    Interrupted,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl LocatorError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            LocatorError::Interrupted => 130,
            _ => 1,
        }
    }

    /// Extra guidance printed after the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LocatorError::NoInput => Some(
                "Usage: gh api graphql -f query='...' | fragment-locator",
            ),
            LocatorError::JsonParse(_) => {
                Some("Make sure the input is valid JSON from GitHub GraphQL API")
            }
            _ => None,
        }
    }
}

/// Result type alias for fragment-locator operations.
pub type Result<T> = std::result::Result<T, LocatorError>;
