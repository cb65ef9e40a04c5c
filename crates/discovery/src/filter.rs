//! Filter state owned by the presentation layer.

use eatthisway_core::content::{Difficulty, RecipeIndex};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single exact-match filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Category,
    Cuisine,
    Difficulty,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Facet::Category => "category",
            Facet::Cuisine => "cuisine",
            Facet::Difficulty => "difficulty",
        })
    }
}

/// Rejected filter mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Value is not part of the facet's declared enumeration
    #[error("{value:?} is not a valid {facet}")]
    InvalidFacetValue { facet: Facet, value: String },
}

/// Parse a difficulty name, reporting failures as a facet error.
pub fn parse_difficulty(value: &str) -> Result<Difficulty, FilterError> {
    value.parse().map_err(|_| FilterError::InvalidFacetValue {
        facet: Facet::Difficulty,
        value: value.to_string(),
    })
}

/// Values a filter control may offer.
///
/// Drawn from the index's declared enumerations, never from the current
/// result set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacetOptions<'a> {
    pub categories: &'a [String],
    pub cuisines: &'a [String],
}

impl<'a> FacetOptions<'a> {
    /// Options declared by `index`
    pub fn from_index(index: &'a RecipeIndex) -> Self {
        Self {
            categories: &index.categories,
            cuisines: &index.cuisines,
        }
    }

    /// Difficulty options, in display order
    pub fn difficulties(&self) -> [Difficulty; 3] {
        Difficulty::ALL
    }

    fn check(&self, facet: Facet, value: &str) -> Result<(), FilterError> {
        let allowed = match facet {
            Facet::Category => self.categories.iter().any(|c| c == value),
            Facet::Cuisine => self.cuisines.iter().any(|c| c == value),
            Facet::Difficulty => value.parse::<Difficulty>().is_ok(),
        };

        if allowed {
            Ok(())
        } else {
            Err(FilterError::InvalidFacetValue {
                facet,
                value: value.to_string(),
            })
        }
    }
}

/// Current query and facet selections.
///
/// Each facet is either unset or holds exactly one value. Mutators touch only
/// their own field. An empty string passed to a facet setter clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    query: String,
    category: Option<String>,
    cuisine: Option<String>,
    difficulty: Option<Difficulty>,
}

impl FilterState {
    /// Unfiltered state
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state from incoming page parameters.
    ///
    /// Missing and empty parameters both mean "unset".
    pub fn from_navigation(search: Option<&str>, category: Option<&str>) -> Self {
        Self {
            query: search.unwrap_or_default().to_string(),
            category: category.filter(|c| !c.is_empty()).map(String::from),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Whether the query should run through the text stage
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// True when the query is non-empty or any facet is selected
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty()
            || self.category.is_some()
            || self.cuisine.is_some()
            || self.difficulty.is_some()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select a category; rejected values leave the state unchanged
    pub fn set_category(&mut self, category: Option<&str>, options: &FacetOptions<'_>) -> Result<(), FilterError> {
        self.category = checked(Facet::Category, category, options)?;
        Ok(())
    }

    /// Select a cuisine; rejected values leave the state unchanged
    pub fn set_cuisine(&mut self, cuisine: Option<&str>, options: &FacetOptions<'_>) -> Result<(), FilterError> {
        self.cuisine = checked(Facet::Cuisine, cuisine, options)?;
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    pub fn clear_cuisine(&mut self) {
        self.cuisine = None;
    }

    /// Reset the query and every facet at once
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}

fn checked(facet: Facet, value: Option<&str>, options: &FacetOptions<'_>) -> Result<Option<String>, FilterError> {
    match value {
        None | Some("") => Ok(None),
        Some(value) => {
            options.check(facet, value)?;
            Ok(Some(value.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> RecipeIndex {
        RecipeIndex {
            categories: vec!["Dessert".to_string(), "Breakfast".to_string()],
            cuisines: vec!["Italian".to_string(), "Mexican".to_string()],
            ..RecipeIndex::default()
        }
    }

    #[test]
    fn test_default_is_inactive() {
        let state = FilterState::new();
        assert!(!state.has_active_filters());
        assert!(!state.has_query());
    }

    #[test]
    fn test_from_navigation() {
        let state = FilterState::from_navigation(Some("soup"), Some("Dessert"));
        assert_eq!(state.query(), "soup");
        assert_eq!(state.category(), Some("Dessert"));
        assert_eq!(state.cuisine(), None);

        let empty = FilterState::from_navigation(Some(""), Some(""));
        assert_eq!(empty, FilterState::new());
        assert_eq!(FilterState::from_navigation(None, None), FilterState::new());
    }

    #[test]
    fn test_setters_are_independent() {
        let index = index();
        let options = FacetOptions::from_index(&index);
        let mut state = FilterState::new();

        state.set_query("pasta");
        state.set_category(Some("Dessert"), &options).unwrap();
        state.set_cuisine(Some("Italian"), &options).unwrap();
        state.set_difficulty(Some(Difficulty::Easy));

        state.set_cuisine(None, &options).unwrap();
        assert_eq!(state.query(), "pasta");
        assert_eq!(state.category(), Some("Dessert"));
        assert_eq!(state.cuisine(), None);
        assert_eq!(state.difficulty(), Some(Difficulty::Easy));
    }

    #[test]
    fn test_invalid_category_is_rejected() {
        let index = index();
        let options = FacetOptions::from_index(&index);
        let mut state = FilterState::new();
        state.set_category(Some("Dessert"), &options).unwrap();

        let err = state.set_category(Some("dessert"), &options).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidFacetValue {
                facet: Facet::Category,
                value: "dessert".to_string()
            }
        );
        assert_eq!(state.category(), Some("Dessert"));
    }

    #[test]
    fn test_invalid_cuisine_is_rejected() {
        let index = index();
        let options = FacetOptions::from_index(&index);
        let mut state = FilterState::new();
        assert!(state.set_cuisine(Some("Martian"), &options).is_err());
        assert_eq!(state.cuisine(), None);
    }

    #[test]
    fn test_empty_value_clears() {
        let index = index();
        let options = FacetOptions::from_index(&index);
        let mut state = FilterState::new();
        state.set_category(Some("Breakfast"), &options).unwrap();
        state.set_category(Some(""), &options).unwrap();
        assert_eq!(state.category(), None);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty("Medium"), Ok(Difficulty::Medium));
        let err = parse_difficulty("Extreme").unwrap_err();
        assert_eq!(err.to_string(), "\"Extreme\" is not a valid difficulty");
    }

    #[test]
    fn test_whitespace_query_is_active_but_not_searched() {
        let mut state = FilterState::new();
        state.set_query("   ");
        assert!(state.has_active_filters());
        assert!(!state.has_query());
    }

    #[test]
    fn test_clear_all() {
        let index = index();
        let options = FacetOptions::from_index(&index);
        let mut state = FilterState::from_navigation(Some("cake"), Some("Dessert"));
        state.set_cuisine(Some("Mexican"), &options).unwrap();
        state.set_difficulty(Some(Difficulty::Hard));

        state.clear_all();
        assert_eq!(state, FilterState::new());
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_deserialize_partial_state() {
        let state: FilterState = serde_json::from_str(r#"{"query":"soup","difficulty":"Easy"}"#).unwrap();
        assert_eq!(state.query(), "soup");
        assert_eq!(state.difficulty(), Some(Difficulty::Easy));
        assert_eq!(state.category(), None);
    }
}
