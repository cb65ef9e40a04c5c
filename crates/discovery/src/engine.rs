//! The discovery engine: fuzzy text stage followed by facet stages.

use crate::filter::FilterState;
use eatthisway_core::config::SearchConfig;
use eatthisway_core::content::{RecipeIndex, RecipeSummary, SEARCH_FIELDS};
use eatthisway_search::{ApproximateMatcher, FuzzyMatcher, DEFAULT_THRESHOLD};

/// Ordered recipes satisfying every active constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    recipes: Vec<&'a RecipeSummary>,
    fell_back: bool,
}

impl<'a> SearchResult<'a> {
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a RecipeSummary> + '_ {
        self.recipes.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a RecipeSummary] {
        &self.recipes
    }

    pub fn into_vec(self) -> Vec<&'a RecipeSummary> {
        self.recipes
    }

    /// Slugs in result order
    pub fn slugs(&self) -> Vec<&'a str> {
        self.recipes.iter().map(|r| r.slug.as_str()).collect()
    }

    /// Whether the text stage fell back to the unfiltered base set
    pub fn matcher_fell_back(&self) -> bool {
        self.fell_back
    }
}

impl<'a> IntoIterator for SearchResult<'a> {
    type Item = &'a RecipeSummary;
    type IntoIter = std::vec::IntoIter<&'a RecipeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.into_iter()
    }
}

/// Combines free-text fuzzy search with exact-match facet filters.
///
/// Resolution is a pure function of the index and the filter state:
///
/// 1. Start from every recipe in index order.
/// 2. A non-blank query replaces that list with the matcher's ranked output.
/// 3. Category, cuisine and difficulty each keep only exact matches.
///
/// Facet stages only remove items, so the order set by step 2 survives.
#[derive(Debug, Clone)]
pub struct DiscoveryEngine<M = ApproximateMatcher> {
    matcher: M,
    threshold: f64,
    fields: Vec<String>,
}

impl DiscoveryEngine<ApproximateMatcher> {
    /// Engine with the default matcher, threshold and field set
    pub fn new() -> Self {
        Self::with_matcher(ApproximateMatcher::default())
    }

    /// Engine tuned from configuration
    pub fn with_search_config(config: &SearchConfig) -> Self {
        Self {
            matcher: ApproximateMatcher::new(config.location, config.distance),
            threshold: config.threshold,
            fields: config.fields.clone(),
        }
    }
}

impl Default for DiscoveryEngine<ApproximateMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FuzzyMatcher> DiscoveryEngine<M> {
    /// Engine backed by any matcher, using the default threshold and fields
    pub fn with_matcher(matcher: M) -> Self {
        Self {
            matcher,
            threshold: DEFAULT_THRESHOLD,
            fields: SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Compute the result list for `filter` over `index`.
    ///
    /// Never fails: a matcher error falls back to the unfiltered base set.
    pub fn resolve<'a>(&self, index: &'a RecipeIndex, filter: &FilterState) -> SearchResult<'a> {
        #[cfg(feature = "metrics")]
        eatthisway_telemetry::timed_span!("discovery.resolve");
        #[cfg(feature = "metrics")]
        eatthisway_telemetry::metrics().increment("discovery.resolve");

        let (candidates, fell_back) = if filter.has_query() {
            self.text_stage(&index.recipes, filter.query())
        } else {
            (index.recipes.iter().collect(), false)
        };
        let after_text = candidates.len();

        let recipes: Vec<&RecipeSummary> = candidates
            .into_iter()
            .filter(|r| filter.category().is_none_or(|c| r.category == c))
            .filter(|r| filter.cuisine().is_none_or(|c| r.cuisine == c))
            .filter(|r| filter.difficulty().is_none_or(|d| r.difficulty == d))
            .collect();

        tracing::debug!(
            query = filter.query(),
            category = ?filter.category(),
            cuisine = ?filter.cuisine(),
            difficulty = ?filter.difficulty(),
            base = index.len(),
            after_text,
            results = recipes.len(),
            "Resolved recipe list"
        );

        SearchResult { recipes, fell_back }
    }

    fn text_stage<'a>(&self, recipes: &'a [RecipeSummary], query: &str) -> (Vec<&'a RecipeSummary>, bool) {
        match self.matcher.search(recipes, query, &self.fields, self.threshold) {
            Ok(matches) => (matches.into_iter().map(|m| m.item).collect(), false),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    query,
                    "Matcher unavailable, showing unfiltered recipes"
                );
                #[cfg(feature = "metrics")]
                eatthisway_telemetry::metrics().increment("discovery.matcher_fallback");
                (recipes.iter().collect(), true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FacetOptions;
    use crate::test_support::{sample_index, BrokenMatcher};
    use eatthisway_core::content::Difficulty;

    #[test]
    fn test_identity_without_filters() {
        let index = sample_index();
        let result = DiscoveryEngine::new().resolve(&index, &FilterState::new());
        let expected: Vec<&str> = index.recipes.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(result.slugs(), expected);
        assert!(!result.matcher_fell_back());
    }

    #[test]
    fn test_category_keeps_original_order() {
        let index = sample_index();
        let options = FacetOptions::from_index(&index);
        let mut filter = FilterState::new();
        filter.set_category(Some("Dessert"), &options).unwrap();

        let result = DiscoveryEngine::new().resolve(&index, &filter);
        assert_eq!(
            result.slugs(),
            vec!["chocolate-lava-cake", "tiramisu", "lemon-tart"]
        );
    }

    #[test]
    fn test_typo_still_finds_recipe() {
        let index = sample_index();
        let mut filter = FilterState::new();
        filter.set_query("chiken parm");

        let result = DiscoveryEngine::new().resolve(&index, &filter);
        assert!(result.slugs().contains(&"chicken-parmesan"));
    }

    #[test]
    fn test_nonsense_query_is_empty_but_active() {
        let index = sample_index();
        let mut filter = FilterState::new();
        filter.set_query("zzz-no-such-term");

        let result = DiscoveryEngine::new().resolve(&index, &filter);
        assert!(result.is_empty());
        assert!(filter.has_active_filters());
    }

    #[test]
    fn test_conjunctive_facets_can_be_empty() {
        let index = sample_index();
        let options = FacetOptions::from_index(&index);
        let mut filter = FilterState::new();
        filter.set_category(Some("Breakfast"), &options).unwrap();
        filter.set_cuisine(Some("Italian"), &options).unwrap();

        assert!(DiscoveryEngine::new().resolve(&index, &filter).is_empty());
    }

    #[test]
    fn test_difficulty_stage() {
        let index = sample_index();
        let mut filter = FilterState::new();
        filter.set_difficulty(Some(Difficulty::Hard));

        let result = DiscoveryEngine::new().resolve(&index, &filter);
        assert!(!result.is_empty());
        assert!(result.iter().all(|r| r.difficulty == Difficulty::Hard));
    }

    #[test]
    fn test_query_order_survives_facets() {
        let index = sample_index();
        let options = FacetOptions::from_index(&index);
        let engine = DiscoveryEngine::new();
        let mut filter = FilterState::new();
        filter.set_query("chocolate");

        let ranked = engine.resolve(&index, &filter).slugs();
        filter.set_category(Some("Dessert"), &options).unwrap();
        let filtered = engine.resolve(&index, &filter).slugs();

        let expected: Vec<&str> = ranked
            .iter()
            .copied()
            .filter(|slug| index.by_slug(slug).is_some_and(|r| r.category == "Dessert"))
            .collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let index = sample_index();
        let mut filter = FilterState::new();
        filter.set_query("   \t");

        let result = DiscoveryEngine::new().resolve(&index, &filter);
        assert_eq!(result.len(), index.len());
    }

    #[test]
    fn test_matcher_failure_falls_back_to_base_set() {
        let index = sample_index();
        let options = FacetOptions::from_index(&index);
        let engine = DiscoveryEngine::with_matcher(BrokenMatcher);
        let mut filter = FilterState::new();
        filter.set_query("chicken");
        filter.set_cuisine(Some("Italian"), &options).unwrap();

        let result = engine.resolve(&index, &filter);
        assert!(result.matcher_fell_back());
        let expected: Vec<&str> = index
            .recipes
            .iter()
            .filter(|r| r.cuisine == "Italian")
            .map(|r| r.slug.as_str())
            .collect();
        assert_eq!(result.slugs(), expected);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let index = sample_index();
        let config = SearchConfig {
            fields: vec!["calories".to_string()],
            ..SearchConfig::default()
        };
        let mut filter = FilterState::new();
        filter.set_query("soup");

        let result = DiscoveryEngine::with_search_config(&config).resolve(&index, &filter);
        assert!(result.matcher_fell_back());
        assert_eq!(result.len(), index.len());
    }

    #[test]
    fn test_stricter_threshold_from_config() {
        let index = sample_index();
        let config = SearchConfig {
            threshold: 0.0,
            ..SearchConfig::default()
        };
        let mut filter = FilterState::new();
        filter.set_query("chiken parm");

        let result = DiscoveryEngine::with_search_config(&config).resolve(&index, &filter);
        assert!(result.is_empty());
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn test_resolve_is_counted() {
        let index = sample_index();
        let before = eatthisway_telemetry::metrics().counter("discovery.resolve");
        DiscoveryEngine::new().resolve(&index, &FilterState::new());
        assert!(eatthisway_telemetry::metrics().counter("discovery.resolve") > before);
    }
}
