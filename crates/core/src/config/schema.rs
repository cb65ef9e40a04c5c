//! Configuration schema definitions

use crate::content::{SEARCHABLE_FIELDS, SEARCH_FIELDS};
use crate::error::{Error, ErrorCode, Result};
use crate::validation::Validator;
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub home: HomeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where content lives on disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Directory holding the index and recipe files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Index file name, relative to `data_dir`
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Recipe detail directory, relative to `data_dir`
    #[serde(default = "default_recipes_dir")]
    pub recipes_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            index_file: default_index_file(),
            recipes_dir: default_recipes_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_index_file() -> String {
    "index.json".to_string()
}

fn default_recipes_dir() -> String {
    "recipes".to_string()
}

/// Fuzzy search tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Match threshold in [0, 1]; lower is stricter
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Expected match position within a field
    #[serde(default = "default_location")]
    pub location: usize,

    /// How far a match may drift from `location`
    #[serde(default = "default_distance")]
    pub distance: usize,

    /// Fields searched by free-text queries
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            location: default_location(),
            distance: default_distance(),
            fields: default_fields(),
        }
    }
}

impl SearchConfig {
    /// Check values the matcher would reject at query time
    pub fn validate(&self) -> Result<()> {
        let unknown: Vec<&str> = self
            .fields
            .iter()
            .map(String::as_str)
            .filter(|f| !SEARCHABLE_FIELDS.contains(f))
            .collect();

        Validator::new()
            .range("search.threshold", self.threshold, 0.0, 1.0)
            .range("search.distance", self.distance, 1, usize::MAX)
            .custom("search.fields", || {
                self.fields.is_empty().then(|| "At least one field is required".to_string())
            })
            .custom("search.fields", || {
                (!unknown.is_empty()).then(|| format!("Unknown fields: {}", unknown.join(", ")))
            })
            .validate()
            .to_result()
            .map_err(|e| Error::new(ErrorCode::ConfigValidationError, e.message))
    }
}

fn default_threshold() -> f64 {
    eatthisway_search::DEFAULT_THRESHOLD
}

fn default_location() -> usize {
    eatthisway_search::DEFAULT_LOCATION
}

fn default_distance() -> usize {
    eatthisway_search::DEFAULT_DISTANCE
}

fn default_fields() -> Vec<String> {
    SEARCH_FIELDS.iter().map(|f| f.to_string()).collect()
}

/// Home page selections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeConfig {
    /// Maximum featured recipes to show; all when unset
    #[serde(default)]
    pub featured_limit: Option<usize>,

    /// Number of categories to show
    #[serde(default = "default_category_limit")]
    pub category_limit: usize,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            featured_limit: None,
            category_limit: default_category_limit(),
        }
    }
}

fn default_category_limit() -> usize {
    6
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_defaults() {
        let search = SearchConfig::default();
        assert_eq!(search.threshold, 0.3);
        assert_eq!(search.distance, 100);
        assert_eq!(search.fields, vec!["title", "description", "tags", "cuisine", "category"]);
        assert!(search.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let schema: ConfigSchema = toml::from_str("[search]\nthreshold = 0.1\n").unwrap();
        assert_eq!(schema.search.threshold, 0.1);
        assert_eq!(schema.search.fields.len(), 5);
        assert_eq!(schema.content.data_dir, "data");
        assert_eq!(schema.home.category_limit, 6);
    }

    #[test]
    fn test_threshold_out_of_range() {
        let search = SearchConfig {
            threshold: 1.5,
            ..SearchConfig::default()
        };
        let err = search.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert!(err.message.contains("search.threshold"));
    }

    #[test]
    fn test_unknown_field() {
        let search = SearchConfig {
            fields: vec!["title".to_string(), "calories".to_string()],
            ..SearchConfig::default()
        };
        let err = search.validate().unwrap_err();
        assert!(err.message.contains("calories"));
    }

    #[test]
    fn test_empty_fields() {
        let search = SearchConfig {
            fields: Vec::new(),
            ..SearchConfig::default()
        };
        assert!(search.validate().is_err());
    }

    #[test]
    fn test_zero_distance() {
        let search = SearchConfig {
            distance: 0,
            ..SearchConfig::default()
        };
        assert!(search.validate().is_err());
    }
}
