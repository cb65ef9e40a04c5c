//! Approximate text matching for Eat This Way.
//!
//! This crate provides:
//! - The [`FuzzyMatcher`] capability used by the discovery engine
//! - [`ApproximateMatcher`], an edit-distance substring matcher
//! - Field length normalisation and location-aware scoring
//! - Optional parallel scoring (`parallel` feature)

mod error;
pub mod fuzzy;
mod matcher;

pub use error::{Result, SearchError};
pub use fuzzy::{alignments, best_score, field_norm, Alignment};
pub use matcher::{ApproximateMatcher, FuzzyMatcher, Searchable, DEFAULT_DISTANCE, DEFAULT_LOCATION};

/// Default match threshold: permissive enough for typos and partial terms.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// A corpus item returned by a matcher.
#[derive(Debug, Clone)]
pub struct Match<'a, T> {
    /// The matched item
    pub item: &'a T,
    /// Position of the item in the searched corpus
    pub index: usize,
    /// Match score (lower is better, 0.0 is perfect)
    pub score: f64,
}
