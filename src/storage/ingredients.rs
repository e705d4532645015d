//! Ingredient repository for CSV storage
//!
//! Manages loading and saving the ingredient store in ingredients.csv. Each
//! call reads the table from disk; mutations rewrite the whole table.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{KitchenError, KitchenResult};
use crate::models::{Ingredient, IngredientId};

use super::csv_io::{read_table, write_table_atomic};

/// Column order of ingredients.csv
pub const INGREDIENT_HEADERS: [&str; 8] = [
    "id",
    "name",
    "quantity",
    "unit",
    "expiry_date",
    "storage_type",
    "date_added",
    "cost",
];

/// Repository for ingredient persistence
pub struct IngredientRepository {
    path: PathBuf,
}

impl IngredientRepository {
    /// Create a new ingredient repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load every ingredient, in table order
    pub fn load_all(&self) -> KitchenResult<Vec<Ingredient>> {
        let rows: Vec<Ingredient> = read_table(&self.path)?;
        debug!(count = rows.len(), path = %self.path.display(), "loaded ingredients");
        Ok(rows)
    }

    /// Replace the whole table
    pub fn save_all(&self, ingredients: &[Ingredient]) -> KitchenResult<()> {
        write_table_atomic(&self.path, &INGREDIENT_HEADERS, ingredients)
    }

    /// Get an ingredient by ID
    pub fn get(&self, id: IngredientId) -> KitchenResult<Option<Ingredient>> {
        Ok(self.load_all()?.into_iter().find(|i| i.id == id))
    }

    /// Get every ingredient with this name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> KitchenResult<Vec<Ingredient>> {
        let name = name.trim();
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|i| i.name.eq_ignore_ascii_case(name))
            .collect())
    }

    /// The id the next inserted ingredient should receive
    pub fn next_id(&self) -> KitchenResult<IngredientId> {
        Ok(IngredientId::next_after(
            self.load_all()?.iter().map(|i| i.id),
        ))
    }

    /// Insert a new ingredient, rejecting an id that is already taken
    pub fn insert(&self, ingredient: Ingredient) -> KitchenResult<()> {
        let mut rows = self.load_all()?;

        if rows.iter().any(|i| i.id == ingredient.id) {
            return Err(KitchenError::Duplicate {
                entity_type: "Ingredient",
                identifier: ingredient.id.to_string(),
            });
        }

        rows.push(ingredient);
        self.save_all(&rows)
    }

    /// Replace the stored ingredient that has the same id
    pub fn update(&self, ingredient: Ingredient) -> KitchenResult<()> {
        let mut rows = self.load_all()?;

        let slot = rows
            .iter_mut()
            .find(|i| i.id == ingredient.id)
            .ok_or_else(|| KitchenError::ingredient_not_found(ingredient.id.to_string()))?;
        *slot = ingredient;

        self.save_all(&rows)
    }

    /// Delete an ingredient, returning the removed record
    pub fn delete(&self, id: IngredientId) -> KitchenResult<Ingredient> {
        let mut rows = self.load_all()?;

        let position = rows
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| KitchenError::ingredient_not_found(id.to_string()))?;
        let removed = rows.remove(position);

        self.save_all(&rows)?;
        Ok(removed)
    }

    /// Delete every ingredient matching `predicate`, returning the removed records
    ///
    /// The table is left untouched when nothing matches.
    pub fn delete_where<F>(&self, predicate: F) -> KitchenResult<Vec<Ingredient>>
    where
        F: Fn(&Ingredient) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) = self.load_all()?.into_iter().partition(predicate);

        if !removed.is_empty() {
            self.save_all(&kept)?;
        }

        Ok(removed)
    }

    /// Count ingredients
    pub fn count(&self) -> KitchenResult<usize> {
        Ok(self.load_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, StorageType, Unit};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, IngredientRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ingredients.csv");
        let repo = IngredientRepository::new(path);
        (temp_dir, repo)
    }

    fn ingredient(id: u32, name: &str) -> Ingredient {
        Ingredient {
            id: IngredientId::new(id),
            name: name.to_string(),
            quantity: 2.5,
            unit: Unit::Kg,
            expiry_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            storage_type: StorageType::Pantry,
            date_added: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            cost: Money::from_cents(12050),
        }
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.next_id().unwrap(), IngredientId::FIRST);
    }

    #[test]
    fn test_insert_and_reload() {
        let (_temp_dir, repo) = create_test_repo();

        repo.insert(ingredient(1, "Rice")).unwrap();

        let loaded = repo.get(IngredientId::new(1)).unwrap().unwrap();
        assert_eq!(loaded, ingredient(1, "Rice"));
        assert_eq!(loaded.cost.to_string(), "120.50");
    }

    #[test]
    fn test_insert_duplicate_id_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(ingredient(1, "Rice")).unwrap();

        let err = repo.insert(ingredient(1, "Bread")).unwrap_err();
        assert!(matches!(err, KitchenError::Duplicate { .. }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_next_id_uses_max() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(ingredient(1, "Rice")).unwrap();
        repo.insert(ingredient(5, "Bread")).unwrap();
        repo.delete(IngredientId::new(1)).unwrap();

        assert_eq!(repo.next_id().unwrap(), IngredientId::new(6));
    }

    #[test]
    fn test_update_and_delete_missing() {
        let (_temp_dir, repo) = create_test_repo();

        assert!(repo.update(ingredient(9, "Milk")).unwrap_err().is_not_found());
        assert!(repo.delete(IngredientId::new(9)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_where() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(ingredient(1, "Rice")).unwrap();
        repo.insert(ingredient(2, "Milk")).unwrap();

        let removed = repo.delete_where(|i| i.name == "Milk").unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.find_by_name("rice").unwrap().len(), 1);
    }
}
