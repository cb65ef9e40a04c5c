//! WASM bindings for the discovery crate.
//!
//! The browser listing page holds one [`RecipeFinder`] and calls a setter on
//! every control change, then renders `results_json()`.

use crate::{parse_difficulty, DiscoveryEngine, FacetOptions, FilterError, FilterState};
use eatthisway_core::content::{RecipeIndex, RecipeSummary};
use wasm_bindgen::prelude::*;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Filter state bound to a loaded recipe index.
#[wasm_bindgen]
pub struct RecipeFinder {
    index: RecipeIndex,
    engine: DiscoveryEngine,
    filter: FilterState,
}

impl RecipeFinder {
    fn from_json(index_json: &str, search: Option<&str>, category: Option<&str>) -> serde_json::Result<Self> {
        let index: RecipeIndex = serde_json::from_str(index_json)?;
        let category = category.filter(|c| index.has_category(c));
        let filter = FilterState::from_navigation(search, category);

        Ok(Self {
            index,
            engine: DiscoveryEngine::new(),
            filter,
        })
    }

    fn apply_category(&mut self, category: Option<&str>) -> Result<(), FilterError> {
        let options = FacetOptions::from_index(&self.index);
        self.filter.set_category(category, &options)
    }

    fn apply_cuisine(&mut self, cuisine: Option<&str>) -> Result<(), FilterError> {
        let options = FacetOptions::from_index(&self.index);
        self.filter.set_cuisine(cuisine, &options)
    }

    fn apply_difficulty(&mut self, difficulty: Option<&str>) -> Result<(), FilterError> {
        let difficulty = match difficulty {
            None | Some("") => None,
            Some(value) => Some(parse_difficulty(value)?),
        };
        self.filter.set_difficulty(difficulty);
        Ok(())
    }

    fn results(&self) -> Vec<&RecipeSummary> {
        self.engine.resolve(&self.index, &self.filter).into_vec()
    }
}

#[wasm_bindgen]
impl RecipeFinder {
    /// Build a finder from the index JSON and the page's `search` and
    /// `category` parameters.
    ///
    /// An undeclared category is ignored.
    #[wasm_bindgen(constructor)]
    pub fn new(index_json: &str, search: Option<String>, category: Option<String>) -> Result<RecipeFinder, JsValue> {
        Self::from_json(index_json, search.as_deref(), category.as_deref())
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
    }

    /// `undefined` or `""` clears the category
    #[wasm_bindgen(js_name = setCategory)]
    pub fn set_category(&mut self, category: Option<String>) -> Result<(), JsValue> {
        self.apply_category(category.as_deref()).map_err(to_js)
    }

    /// `undefined` or `""` clears the cuisine
    #[wasm_bindgen(js_name = setCuisine)]
    pub fn set_cuisine(&mut self, cuisine: Option<String>) -> Result<(), JsValue> {
        self.apply_cuisine(cuisine.as_deref()).map_err(to_js)
    }

    /// `undefined` or `""` clears the difficulty
    #[wasm_bindgen(js_name = setDifficulty)]
    pub fn set_difficulty(&mut self, difficulty: Option<String>) -> Result<(), JsValue> {
        self.apply_difficulty(difficulty.as_deref()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.filter.clear_all();
    }

    #[wasm_bindgen(js_name = hasActiveFilters)]
    pub fn has_active_filters(&self) -> bool {
        self.filter.has_active_filters()
    }

    /// Current filter state as JSON
    #[wasm_bindgen(js_name = filterJson)]
    pub fn filter_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.filter).map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
    }

    /// Resolved recipe summaries as a JSON array
    #[wasm_bindgen(js_name = resultsJson)]
    pub fn results_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.results()).map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_index;
    use crate::Facet;
    use eatthisway_core::content::Difficulty;

    fn loaded(search: Option<&str>, category: Option<&str>) -> RecipeFinder {
        let json = serde_json::to_string(&sample_index()).unwrap();
        RecipeFinder::from_json(&json, search, category).unwrap()
    }

    fn slugs(finder: &RecipeFinder) -> Vec<String> {
        finder.results().iter().map(|r| r.slug.clone()).collect()
    }

    #[test]
    fn test_navigation_parameters() {
        let finder = loaded(Some("chocolate"), Some("Dessert"));
        assert!(finder.has_active_filters());
        assert_eq!(slugs(&finder), vec!["chocolate-lava-cake"]);

        let unknown = loaded(None, Some("Snacks"));
        assert!(!unknown.has_active_filters());
        assert_eq!(unknown.results().len(), 10);
    }

    #[test]
    fn test_setters_and_clear_all() {
        let mut finder = loaded(None, None);
        finder.apply_category(Some("Breakfast")).unwrap();
        finder.apply_difficulty(Some("Easy")).unwrap();
        finder.apply_cuisine(Some("Mexican")).unwrap();
        assert_eq!(slugs(&finder), vec!["huevos-rancheros"]);

        finder.apply_cuisine(Some("")).unwrap();
        assert_eq!(finder.results().len(), 3);

        finder.set_query("pancakes");
        finder.clear_all();
        assert!(!finder.has_active_filters());
        assert_eq!(finder.results().len(), 10);
    }

    #[test]
    fn test_rejected_values_leave_state() {
        let mut finder = loaded(None, None);
        finder.apply_difficulty(Some("Hard")).unwrap();

        let err = finder.apply_difficulty(Some("Extreme")).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidFacetValue {
                facet: Facet::Difficulty,
                value: "Extreme".to_string()
            }
        );
        assert!(finder.apply_category(Some("Brunch")).is_err());
        assert_eq!(finder.filter.difficulty(), Some(Difficulty::Hard));
        assert_eq!(finder.filter.category(), None);
    }

    #[test]
    fn test_filter_and_results_serialize() {
        let mut finder = loaded(Some("tiramisu"), None);
        finder.apply_cuisine(Some("Italian")).unwrap();

        let filter: FilterState = serde_json::from_str(&finder.filter_json().unwrap()).unwrap();
        assert_eq!(filter.cuisine(), Some("Italian"));

        let results: serde_json::Value = serde_json::from_str(&finder.results_json().unwrap()).unwrap();
        assert_eq!(results[0]["slug"], "tiramisu");
        assert_eq!(results[0]["reviewCount"], 10);
    }

    #[test]
    fn test_bad_index_json_is_rejected() {
        assert!(RecipeFinder::from_json("{not json", None, None).is_err());
    }
}
