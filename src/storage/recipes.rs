//! Recipe repository
//!
//! Recipes are reference data in recipes.csv. The table must exist; new
//! recipes are appended and existing rows are never edited.

use std::path::PathBuf;

use tracing::debug;

use crate::error::KitchenResult;
use crate::models::{Recipe, RecipeId};

use super::csv_io::{append_row, read_table_required, write_table_atomic};

/// Column order of recipes.csv
pub const RECIPE_HEADERS: [&str; 3] = ["recipe_id", "recipe_name", "ingredients"];

/// Repository for recipe persistence
pub struct RecipeRepository {
    path: PathBuf,
}

impl RecipeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load every recipe in file order
    ///
    /// # Errors
    ///
    /// `DataFileMissing` when recipes.csv does not exist.
    pub fn load_all(&self) -> KitchenResult<Vec<Recipe>> {
        let rows: Vec<Recipe> = read_table_required(&self.path)?;
        debug!(count = rows.len(), "loaded recipes");
        Ok(rows)
    }

    /// Get a recipe by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> KitchenResult<Option<Recipe>> {
        let name = name.trim();
        Ok(self
            .load_all()?
            .into_iter()
            .find(|r| r.recipe_name.eq_ignore_ascii_case(name)))
    }

    /// Check if a recipe name is already taken
    pub fn name_exists(&self, name: &str) -> KitchenResult<bool> {
        Ok(self.get_by_name(name)?.is_some())
    }

    pub fn next_id(&self) -> KitchenResult<RecipeId> {
        Ok(RecipeId::next_after(
            self.load_all()?.iter().map(|r| r.recipe_id),
        ))
    }

    /// Append one recipe row
    pub fn append(&self, recipe: &Recipe) -> KitchenResult<()> {
        append_row(&self.path, &RECIPE_HEADERS, recipe)
    }

    /// Write the starter table
    pub(crate) fn seed(&self, recipes: &[Recipe]) -> KitchenResult<()> {
        write_table_atomic(&self.path, &RECIPE_HEADERS, recipes)
    }
}
