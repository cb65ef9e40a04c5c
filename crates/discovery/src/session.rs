//! A browsing session: filter state plus the results it currently shows.

use crate::engine::{DiscoveryEngine, SearchResult};
use crate::filter::{FacetOptions, FilterError, FilterState};
use eatthisway_core::content::{Difficulty, RecipeIndex};
use eatthisway_search::{ApproximateMatcher, FuzzyMatcher};

/// Keeps the displayed result list in step with the filter state.
///
/// Every accepted mutation triggers exactly one resolution. Rejected
/// mutations leave both the state and the results untouched.
#[derive(Debug)]
pub struct Session<'a, M: FuzzyMatcher = ApproximateMatcher> {
    engine: &'a DiscoveryEngine<M>,
    index: &'a RecipeIndex,
    filter: FilterState,
    results: SearchResult<'a>,
    resolves: u64,
}

impl<'a, M: FuzzyMatcher> Session<'a, M> {
    /// Session with no active filters
    pub fn new(engine: &'a DiscoveryEngine<M>, index: &'a RecipeIndex) -> Self {
        Self::with_filter(engine, index, FilterState::new())
    }

    /// Session starting from an existing filter state
    pub fn with_filter(engine: &'a DiscoveryEngine<M>, index: &'a RecipeIndex, filter: FilterState) -> Self {
        let results = engine.resolve(index, &filter);
        Self {
            engine,
            index,
            filter,
            results,
            resolves: 1,
        }
    }

    /// Session seeded from page parameters.
    ///
    /// A category the index does not declare is dropped.
    pub fn from_navigation(
        engine: &'a DiscoveryEngine<M>,
        index: &'a RecipeIndex,
        search: Option<&str>,
        category: Option<&str>,
    ) -> Self {
        let category = category.filter(|c| {
            let known = c.is_empty() || index.has_category(c);
            if !known {
                tracing::warn!(category = c, "Ignoring unknown category from navigation");
            }
            known
        });
        Self::with_filter(engine, index, FilterState::from_navigation(search, category))
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn results(&self) -> &SearchResult<'a> {
        &self.results
    }

    pub fn index(&self) -> &'a RecipeIndex {
        self.index
    }

    pub fn has_active_filters(&self) -> bool {
        self.filter.has_active_filters()
    }

    /// Number of resolutions performed so far
    pub fn resolve_count(&self) -> u64 {
        self.resolves
    }

    /// Options for the filter controls
    pub fn facet_options(&self) -> FacetOptions<'a> {
        FacetOptions::from_index(self.index)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.refresh();
    }

    pub fn set_category(&mut self, category: Option<&str>) -> Result<(), FilterError> {
        let options = self.facet_options();
        self.filter.set_category(category, &options)?;
        self.refresh();
        Ok(())
    }

    pub fn set_cuisine(&mut self, cuisine: Option<&str>) -> Result<(), FilterError> {
        let options = self.facet_options();
        self.filter.set_cuisine(cuisine, &options)?;
        self.refresh();
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.filter.set_difficulty(difficulty);
        self.refresh();
    }

    pub fn clear_category(&mut self) {
        self.filter.clear_category();
        self.refresh();
    }

    pub fn clear_cuisine(&mut self) {
        self.filter.clear_cuisine();
        self.refresh();
    }

    pub fn clear_difficulty(&mut self) {
        self.set_difficulty(None);
    }

    /// Reset every filter with a single resolution
    pub fn clear_all(&mut self) {
        self.filter.clear_all();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.results = self.engine.resolve(self.index, &self.filter);
        self.resolves += 1;
    }
}
