//! The fuzzy matcher capability and its default implementation.

use crate::error::{Result, SearchError};
use crate::fuzzy::{best_score, field_norm};
use crate::Match;

/// Default match location (characters from the start of a field).
pub const DEFAULT_LOCATION: usize = 0;

/// Default distance over which a match may drift from the location.
pub const DEFAULT_DISTANCE: usize = 100;

/// Items that expose named text fields to a matcher.
pub trait Searchable {
    /// Values of a named field.
    ///
    /// Multi-valued fields (tags) return one entry per value. Returns `None`
    /// when the item has no field with that name.
    fn field_values(&self, field: &str) -> Option<Vec<&str>>;
}

/// Ranks a corpus against a free-text query.
///
/// Implementations return the matching subset, best match first. A lower
/// `threshold` is stricter; `0.0` only admits perfect matches and `1.0`
/// admits nearly anything.
pub trait FuzzyMatcher: Send + Sync {
    /// Search `corpus` for `query` over `fields`.
    fn search<'a, T>(
        &self,
        corpus: &'a [T],
        query: &str,
        fields: &[String],
        threshold: f64,
    ) -> Result<Vec<Match<'a, T>>>
    where
        T: Searchable + Sync;
}

/// Approximate substring matcher.
///
/// Each field value is scored by the cheapest window that aligns with the
/// query, penalised by how far the window starts from `location`. An item
/// matches when at least one of its field values scores within the
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximateMatcher {
    location: usize,
    distance: usize,
}

impl Default for ApproximateMatcher {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl ApproximateMatcher {
    /// Create a matcher with explicit location settings
    pub fn new(location: usize, distance: usize) -> Self {
        Self { location, distance }
    }

    /// Expected match location
    pub fn location(&self) -> usize {
        self.location
    }

    /// Allowed drift from the location
    pub fn distance(&self) -> usize {
        self.distance
    }

    fn score_item<T: Searchable>(
        &self,
        item: &T,
        pattern: &[char],
        fields: &[String],
        threshold: f64,
    ) -> Option<f64> {
        let weight = 1.0 / fields.len() as f64;
        let mut total = 1.0;
        let mut matched = false;

        for field in fields {
            let Some(values) = item.field_values(field) else {
                continue;
            };
            for value in values {
                let text: Vec<char> = value.to_lowercase().chars().collect();
                let Some(score) = best_score(pattern, &text, self.location, self.distance) else {
                    continue;
                };
                if score <= threshold {
                    matched = true;
                    let score = if score == 0.0 { f64::EPSILON } else { score };
                    total *= score.powf(weight * field_norm(value));
                }
            }
        }

        matched.then_some(total)
    }
}

impl FuzzyMatcher for ApproximateMatcher {
    fn search<'a, T>(
        &self,
        corpus: &'a [T],
        query: &str,
        fields: &[String],
        threshold: f64,
    ) -> Result<Vec<Match<'a, T>>>
    where
        T: Searchable + Sync,
    {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery("query is empty".to_string()));
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SearchError::InvalidThreshold(threshold));
        }
        if fields.is_empty() {
            return Err(SearchError::Unavailable("no search fields configured".to_string()));
        }
        if let Some(first) = corpus.first() {
            if let Some(unknown) = fields.iter().find(|f| first.field_values(f).is_none()) {
                return Err(SearchError::UnknownField(unknown.clone()));
            }
        }

        let pattern: Vec<char> = query.to_lowercase().chars().collect();
        let score = |(index, item): (usize, &'a T)| {
            self.score_item(item, &pattern, fields, threshold)
                .map(|score| Match { item, index, score })
        };

        #[cfg(feature = "parallel")]
        let mut matches: Vec<Match<'a, T>> = {
            use rayon::prelude::*;
            corpus.par_iter().enumerate().filter_map(score).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let mut matches: Vec<Match<'a, T>> = corpus.iter().enumerate().filter_map(score).collect();

        matches.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.index.cmp(&b.index)));
        Ok(matches)
    }
}
