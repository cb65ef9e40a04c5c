//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// Query is empty after trimming
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Threshold outside of [0, 1]
    #[error("Invalid threshold {0}: expected a value between 0 and 1")]
    InvalidThreshold(f64),

    /// Field name the corpus does not expose
    #[error("Unknown search field: {0}")]
    UnknownField(String),

    /// Matcher could not run
    #[error("Matcher unavailable: {0}")]
    Unavailable(String),
}
