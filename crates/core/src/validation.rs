//! Content and configuration validation
//!
//! Provides validation for:
//! - Recipe index invariants (unique slugs, declared categories/cuisines)
//! - Configuration values
//! - Slugs used to address recipe files
//!
//! # Example
//!
//! ```rust,ignore
//! use eatthisway_core::validation::validate_index;
//!
//! let result = validate_index(store.index());
//! if !result.is_valid() {
//!     for error in result.errors() {
//!         eprintln!("Validation error: {}", error);
//!     }
//! }
//! ```

use crate::content::RecipeIndex;
use crate::error::{Error, ErrorCode, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

static SLUG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid")
});

/// Whether `slug` is URL-safe: lowercase alphanumerics joined by single hyphens
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::new(
                ErrorCode::ValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    /// Validate that a field is not empty
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Field is required".to_string(),
                code: "REQUIRED".to_string(),
                expected: Some("non-empty value".to_string()),
                actual: Some("empty".to_string()),
            });
        }
        self
    }

    /// Validate that a slug is URL-safe
    pub fn slug(mut self, field: &str, value: &str) -> Self {
        if !is_valid_slug(value) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Must be a URL-safe slug".to_string(),
                code: "SLUG".to_string(),
                expected: Some("lowercase-words-joined-by-hyphens".to_string()),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate that a value is in a list of allowed values
    pub fn one_of<S: AsRef<str>>(mut self, field: &str, value: &str, allowed: &[S]) -> Self {
        if !allowed.iter().any(|a| a.as_ref() == value) {
            let allowed: Vec<&str> = allowed.iter().map(AsRef::as_ref).collect();
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be one of: {}", allowed.join(", ")),
                code: "ONE_OF".to_string(),
                expected: Some(allowed.join(", ")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate a numeric range
    pub fn range<T: PartialOrd + std::fmt::Display>(
        mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        // Written as a negated containment so NaN fails
        if !(value >= min && value <= max) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be between {} and {}", min, max),
                code: "RANGE".to_string(),
                expected: Some(format!("{} - {}", min, max)),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Add a custom validation
    pub fn custom<F>(mut self, field: &str, f: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        if let Some(message) = f() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message,
                code: "CUSTOM".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Add a warning (non-blocking)
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result.add_warning(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code: "WARNING".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

/// Validate the invariants of a recipe index.
///
/// Errors: missing identity fields, malformed or duplicate slugs, categories
/// and cuisines outside the declared sets, ratings outside 0 to 5.
/// Warnings: undeclared tags, duplicate ids, repeated enumeration entries.
pub fn validate_index(index: &RecipeIndex) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut slugs: HashMap<&str, usize> = HashMap::new();
    let mut ids: HashSet<&str> = HashSet::new();
    let declared_tags: HashSet<&str> = index.tags.iter().map(String::as_str).collect();

    for (i, recipe) in index.recipes.iter().enumerate() {
        let field = |name: &str| format!("recipes[{}].{}", i, name);

        let checked = Validator::new()
            .required(&field("id"), &recipe.id)
            .required(&field("title"), &recipe.title)
            .slug(&field("slug"), &recipe.slug)
            .one_of(&field("category"), &recipe.category, &index.categories)
            .one_of(&field("cuisine"), &recipe.cuisine, &index.cuisines)
            .range(&field("rating"), recipe.rating, 0.0, 5.0)
            .warn_if(
                &field("id"),
                !ids.insert(recipe.id.as_str()),
                &format!("Duplicate id {:?}", recipe.id),
            )
            .validate();
        result.merge(checked);

        if let Some(first) = slugs.insert(recipe.slug.as_str(), i) {
            result.add_error(ValidationError {
                field: field("slug"),
                message: format!("Duplicate slug {:?} (first used by recipes[{}])", recipe.slug, first),
                code: "DUPLICATE".to_string(),
                expected: Some("unique slug".to_string()),
                actual: Some(recipe.slug.clone()),
            });
        }

        for tag in &recipe.tags {
            if !declared_tags.contains(tag.as_str()) {
                result.add_warning(ValidationError {
                    field: field("tags"),
                    message: format!("Tag {:?} is not declared in the index", tag),
                    code: "UNDECLARED_TAG".to_string(),
                    expected: None,
                    actual: Some(tag.clone()),
                });
            }
        }
    }

    for (name, values) in [
        ("categories", &index.categories),
        ("cuisines", &index.cuisines),
        ("tags", &index.tags),
    ] {
        let mut seen = HashSet::new();
        for value in values {
            if !seen.insert(value.as_str()) {
                result.add_warning(ValidationError {
                    field: name.to_string(),
                    message: format!("{:?} is listed more than once", value),
                    code: "DUPLICATE_ENTRY".to_string(),
                    expected: None,
                    actual: Some(value.clone()),
                });
            }
        }
    }

    result
}
