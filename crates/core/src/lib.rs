//! Core building blocks for Eat This Way
//!
//! This crate provides the shared foundation used by the discovery engine and
//! the command-line tools:
//!
//! - **Error handling**: structured errors with codes, context and recovery suggestions
//! - **Content**: recipe summaries, the recipe index and full recipe records
//! - **Content store**: load-once JSON store with per-slug recipe lookup
//! - **Configuration**: TOML-based configuration with validation
//! - **Validation**: recipe index invariant checks
//!
//! # Example
//!
//! ```rust,no_run
//! use eatthisway_core::{content::ContentStore, validation::validate_index};
//!
//! let store = ContentStore::open_dir("data").expect("content directory");
//! let report = validate_index(store.index());
//!
//! if !report.is_valid() {
//!     eprintln!("Index has {} problems", report.errors().len());
//! }
//!
//! for recipe in store.index().featured() {
//!     println!("{}", recipe.title);
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod content;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, SearchConfig};
    pub use crate::content::{ContentStore, Difficulty, Recipe, RecipeIndex, RecipeSummary};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{validate_index, ValidationResult, Validator};
}
