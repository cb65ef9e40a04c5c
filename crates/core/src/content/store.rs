//! Load-once content store backed by JSON files
//!
//! Layout on disk:
//!
//! ```text
//! <data_dir>/index.json            recipe index
//! <data_dir>/recipes/<slug>.json   one detail record per recipe
//! ```

use super::model::{Recipe, RecipeIndex};
use crate::config::ContentConfig;
use crate::error::{Error, Result, ResultExt};
use crate::validation::is_valid_slug;
use std::path::{Path, PathBuf};

/// Read-only recipe content
#[derive(Debug, Clone)]
pub struct ContentStore {
    index: RecipeIndex,
    recipes_dir: PathBuf,
}

impl ContentStore {
    /// Open a store using the configured layout
    pub fn open(config: &ContentConfig) -> Result<Self> {
        let data_dir = Path::new(&config.data_dir);
        let index_path = data_dir.join(&config.index_file);
        let recipes_dir = data_dir.join(&config.recipes_dir);

        if !index_path.is_file() {
            return Err(Error::index_not_found(&index_path));
        }

        let raw = std::fs::read_to_string(&index_path)
            .map_err(Error::from)
            .context(format!("Reading {}", index_path.display()))?;
        let index = RecipeIndex::from_json(&raw).context(format!("Parsing {}", index_path.display()))?;

        tracing::info!(
            path = %index_path.display(),
            recipes = index.len(),
            categories = index.categories.len(),
            cuisines = index.cuisines.len(),
            "Loaded recipe index"
        );

        Ok(Self { index, recipes_dir })
    }

    /// Open a store rooted at `data_dir` with the default file names
    pub fn open_dir(data_dir: impl AsRef<Path>) -> Result<Self> {
        let config = ContentConfig {
            data_dir: data_dir.as_ref().to_string_lossy().into_owned(),
            ..ContentConfig::default()
        };
        Self::open(&config)
    }

    /// Build a store around an index already in memory
    pub fn from_index(index: RecipeIndex, recipes_dir: impl Into<PathBuf>) -> Self {
        Self {
            index,
            recipes_dir: recipes_dir.into(),
        }
    }

    /// The loaded index
    pub fn index(&self) -> &RecipeIndex {
        &self.index
    }

    /// Load the full record for `slug`.
    ///
    /// Returns `Ok(None)` when no record exists for a well-formed slug.
    pub fn recipe(&self, slug: &str) -> Result<Option<Recipe>> {
        if !is_valid_slug(slug) {
            return Err(Error::invalid_slug(slug));
        }

        let path = self.recipes_dir.join(format!("{slug}.json"));
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(slug, path = %path.display(), "Recipe file not found");
                return Ok(None);
            }
            Err(e) => return Err(Error::from(e).with_context(format!("Reading {}", path.display()))),
        };

        let recipe: Recipe = serde_json::from_str(&raw)
            .map_err(Error::from)
            .context(format!("Parsing {}", path.display()))?;
        Ok(Some(recipe))
    }
}
