//! Recipe discovery for Eat This Way.
//!
//! This crate provides:
//! - [`FilterState`], the query and facet selections a user has made
//! - [`DiscoveryEngine`], which turns an index and a filter state into an
//!   ordered result list
//! - [`Session`], which keeps results in step with filter changes
//! - WASM bindings for the browser (`wasm` feature)
//!
//! # Example
//!
//! ```
//! use eatthisway_core::content::RecipeIndex;
//! use eatthisway_discovery::{resolve, FilterState};
//!
//! let index = RecipeIndex::default();
//! let mut filter = FilterState::new();
//! filter.set_query("soup");
//!
//! assert!(resolve(&index, &filter).is_empty());
//! assert!(filter.has_active_filters());
//! ```

mod engine;
mod filter;
mod session;

#[cfg(test)]
mod test_support;

#[cfg(feature = "wasm")]
mod wasm;

pub use eatthisway_core::content::Difficulty;
pub use engine::{DiscoveryEngine, SearchResult};
pub use filter::{parse_difficulty, Facet, FacetOptions, FilterError, FilterState};
pub use session::Session;

use eatthisway_core::content::RecipeIndex;

/// Resolve `filter` over `index` with the default engine.
pub fn resolve<'a>(index: &'a RecipeIndex, filter: &FilterState) -> SearchResult<'a> {
    DiscoveryEngine::new().resolve(index, filter)
}
