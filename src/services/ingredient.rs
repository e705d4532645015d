//! Ingredient service
//!
//! Business logic for the ingredient store: validated adds, quantity
//! changes that can never go negative, removal and filtered listing.

use chrono::{Duration, NaiveDate};
use tracing::{debug, info};

use crate::audit::EntityType;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{normalize_name, Ingredient, IngredientId, Money, StorageType, Unit};
use crate::storage::Storage;

/// Service for ingredient management
pub struct IngredientService<'a> {
    storage: &'a Storage,
}

/// Options for filtering the ingredient list
#[derive(Debug, Clone, Default)]
pub struct IngredientFilter {
    /// Only ingredients kept here
    pub storage_type: Option<StorageType>,
    /// Only ingredients expiring within this many days of today
    pub expiring_within_days: Option<i64>,
    /// Case-insensitive substring of the name
    pub name_contains: Option<String>,
    /// Sort by expiry date (soonest first) instead of id
    pub sort_by_expiry: bool,
}

impl IngredientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn storage(mut self, storage_type: StorageType) -> Self {
        self.storage_type = Some(storage_type);
        self
    }

    pub fn expiring_within(mut self, days: i64) -> Self {
        self.expiring_within_days = Some(days);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.name_contains = Some(text.into());
        self
    }

    pub fn by_expiry(mut self) -> Self {
        self.sort_by_expiry = true;
        self
    }
}

/// Input for adding a new ingredient
#[derive(Debug, Clone)]
pub struct CreateIngredientInput {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub expiry_date: NaiveDate,
    pub storage_type: StorageType,
    pub cost: Money,
}

impl<'a> IngredientService<'a> {
    /// Create a new ingredient service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new ingredient, stamped as added on `today`
    pub fn add(&self, input: CreateIngredientInput, today: NaiveDate) -> KitchenResult<Ingredient> {
        let name = normalize_name(&input.name);
        if name.is_empty() {
            return Err(KitchenError::Validation(
                "Ingredient name cannot be empty".into(),
            ));
        }

        if !input.quantity.is_finite() || input.quantity <= 0.0 {
            return Err(KitchenError::Validation(format!(
                "Quantity must be positive, got {}",
                input.quantity
            )));
        }

        let ingredient = Ingredient {
            id: self.storage.ingredients.next_id()?,
            name,
            quantity: input.quantity,
            unit: input.unit,
            expiry_date: input.expiry_date,
            storage_type: input.storage_type,
            date_added: today,
            cost: input.cost,
        };

        ingredient
            .validate()
            .map_err(|e| KitchenError::Validation(e.to_string()))?;

        self.storage.ingredients.insert(ingredient.clone())?;

        self.storage.log_create(
            EntityType::Ingredient,
            ingredient.id.to_string(),
            Some(ingredient.name.clone()),
            &ingredient,
        )?;

        info!(id = %ingredient.id, name = %ingredient.name, "ingredient added");
        Ok(ingredient)
    }

    /// Get an ingredient by ID
    pub fn get(&self, id: IngredientId) -> KitchenResult<Option<Ingredient>> {
        self.storage.ingredients.get(id)
    }

    /// Find an ingredient by ID string or exact name
    pub fn find(&self, identifier: &str) -> KitchenResult<Option<Ingredient>> {
        if let Ok(id) = identifier.parse::<IngredientId>() {
            return self.get(id);
        }
        Ok(self
            .storage
            .ingredients
            .find_by_name(identifier)?
            .into_iter()
            .next())
    }

    /// Set the quantity of an ingredient
    ///
    /// A negative quantity is rejected and the stored record is left unchanged.
    pub fn update_quantity(&self, id: IngredientId, new_quantity: f64) -> KitchenResult<Ingredient> {
        let mut ingredient = self
            .get(id)?
            .ok_or_else(|| KitchenError::ingredient_not_found(id.to_string()))?;

        if !new_quantity.is_finite() || new_quantity < 0.0 {
            return Err(KitchenError::Validation(format!(
                "Quantity cannot be negative: {}",
                new_quantity
            )));
        }

        let before = ingredient.clone();
        ingredient.quantity = new_quantity;

        self.storage.ingredients.update(ingredient.clone())?;

        self.storage.log_update(
            EntityType::Ingredient,
            ingredient.id.to_string(),
            Some(ingredient.name.clone()),
            &before,
            &ingredient,
            Some(format!(
                "quantity: {} -> {}",
                before.quantity, ingredient.quantity
            )),
        )?;

        debug!(id = %id, from = before.quantity, to = new_quantity, "quantity updated");
        Ok(ingredient)
    }

    /// Change the quantity of an ingredient by `delta` (negative to consume)
    pub fn adjust_quantity(&self, id: IngredientId, delta: f64) -> KitchenResult<Ingredient> {
        let current = self
            .get(id)?
            .ok_or_else(|| KitchenError::ingredient_not_found(id.to_string()))?;

        let new_quantity = current.quantity + delta;
        if new_quantity < 0.0 {
            return Err(KitchenError::Validation(format!(
                "Only {} {} of {} in stock, cannot remove {}",
                current.quantity,
                current.unit,
                current.name,
                -delta
            )));
        }

        self.update_quantity(id, new_quantity)
    }

    /// Remove an ingredient from the store
    pub fn remove(&self, id: IngredientId) -> KitchenResult<Ingredient> {
        let removed = self.storage.ingredients.delete(id)?;

        self.storage.log_delete(
            EntityType::Ingredient,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        )?;

        info!(id = %removed.id, name = %removed.name, "ingredient removed");
        Ok(removed)
    }

    /// List ingredients with optional filtering
    pub fn list(&self, filter: &IngredientFilter, today: NaiveDate) -> KitchenResult<Vec<Ingredient>> {
        let mut ingredients = self.storage.ingredients.load_all()?;

        if let Some(storage_type) = filter.storage_type {
            ingredients.retain(|i| i.storage_type == storage_type);
        }
        if let Some(days) = filter.expiring_within_days {
            let horizon = expiry_horizon(today, days)?;
            ingredients.retain(|i| i.expiry_date <= horizon);
        }
        if let Some(text) = &filter.name_contains {
            let needle = text.trim().to_lowercase();
            ingredients.retain(|i| i.name.to_lowercase().contains(&needle));
        }

        if filter.sort_by_expiry {
            ingredients.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date).then(a.id.cmp(&b.id)));
        }

        Ok(ingredients)
    }

    /// Names of ingredients currently in stock (quantity > 0), deduplicated
    pub fn available_names(&self) -> KitchenResult<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for ingredient in self.storage.ingredients.load_all()? {
            if ingredient.in_stock() && !names.iter().any(|n| n.eq_ignore_ascii_case(&ingredient.name)) {
                names.push(ingredient.name);
            }
        }
        Ok(names)
    }

    pub fn count(&self) -> KitchenResult<usize> {
        self.storage.ingredients.count()
    }
}

/// Last expiry date inside a window of `days` from `today`
///
/// # Errors
///
/// `Validation` for a negative window or one past the calendar's range.
pub fn expiry_horizon(today: NaiveDate, days: i64) -> KitchenResult<NaiveDate> {
    if days < 0 {
        return Err(KitchenError::Validation(format!(
            "Expiry window cannot be negative: {} days",
            days
        )));
    }
    Duration::try_days(days)
        .and_then(|window| today.checked_add_signed(window))
        .ok_or_else(|| {
            KitchenError::Validation(format!("Expiry window of {} days is out of range", days))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KitchenPaths, Settings};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()
    }

    fn input(name: &str, quantity: f64, expires_in: i64, storage_type: StorageType) -> CreateIngredientInput {
        CreateIngredientInput {
            name: name.to_string(),
            quantity,
            unit: Unit::G,
            expiry_date: today() + Duration::days(expires_in),
            storage_type,
            cost: Money::from_cents(4000),
        }
    }

    #[test]
    fn test_add_assigns_ids_and_normalizes() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IngredientService::new(&storage);

        let first = service.add(input("  tomato ", 500.0, 7, StorageType::Fridge), today()).unwrap();
        let second = service.add(input("onion", 2.0, 10, StorageType::Pantry), today()).unwrap();

        assert_eq!(first.id, IngredientId::new(1));
        assert_eq!(first.name, "Tomato");
        assert_eq!(first.date_added, today());
        assert_eq!(second.id, IngredientId::new(2));
        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IngredientService::new(&storage);

        let zero = service.add(input("Tomato", 0.0, 7, StorageType::Fridge), today());
        assert!(zero.unwrap_err().is_validation());

        let mut negative_cost = input("Tomato", 1.0, 7, StorageType::Fridge);
        negative_cost.cost = Money::from_cents(-1);
        assert!(service.add(negative_cost, today()).unwrap_err().is_validation());

        assert!(service.add(input("   ", 1.0, 7, StorageType::Fridge), today()).is_err());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_negative_quantity_rejected_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IngredientService::new(&storage);
        let tomato = service.add(input("Tomato", 500.0, 7, StorageType::Fridge), today()).unwrap();

        assert!(service.update_quantity(tomato.id, -1.0).unwrap_err().is_validation());
        assert!(service.adjust_quantity(tomato.id, -600.0).unwrap_err().is_validation());

        let stored = service.get(tomato.id).unwrap().unwrap();
        assert_eq!(stored.quantity, 500.0);

        let updated = service.adjust_quantity(tomato.id, -500.0).unwrap();
        assert_eq!(updated.quantity, 0.0);
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IngredientService::new(&storage);

        assert!(service.update_quantity(IngredientId::new(3), 1.0).unwrap_err().is_not_found());
        assert!(service.remove(IngredientId::new(3)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IngredientService::new(&storage);
        let tomato = service.add(input("Tomato", 500.0, 7, StorageType::Fridge), today()).unwrap();

        let removed = service.remove(tomato.id).unwrap();

        assert_eq!(removed.name, "Tomato");
        assert!(service.get(tomato.id).unwrap().is_none());
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IngredientService::new(&storage);
        service.add(input("Milk", 1.0, 10, StorageType::Fridge), today()).unwrap();
        service.add(input("Rice", 1.0, 90, StorageType::Pantry), today()).unwrap();
        service.add(input("Spinach", 1.0, 2, StorageType::Fridge), today()).unwrap();

        let fridge = service.list(&IngredientFilter::new().storage(StorageType::Fridge), today()).unwrap();
        assert_eq!(fridge.len(), 2);

        let soon = service.list(&IngredientFilter::new().expiring_within(3), today()).unwrap();
        assert_eq!(soon.len(), 1);
        assert_eq!(soon[0].name, "Spinach");

        let search = service.list(&IngredientFilter::new().search("RIC"), today()).unwrap();
        assert_eq!(search[0].name, "Rice");

        let sorted = service.list(&IngredientFilter::new().by_expiry(), today()).unwrap();
        let names: Vec<_> = sorted.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Spinach", "Milk", "Rice"]);
    }

    #[test]
    fn test_expiry_window_out_of_range() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IngredientService::new(&storage);
        service.add(input("Milk", 1.0, 10, StorageType::Fridge), today()).unwrap();

        for days in [4_000_000_000, i64::MAX, -1] {
            let err = service
                .list(&IngredientFilter::new().expiring_within(days), today())
                .unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(
            expiry_horizon(today(), 0).unwrap(),
            today()
        );
    }

    #[test]
    fn test_available_names_skip_empty_stock() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IngredientService::new(&storage);
        let milk = service.add(input("Milk", 1.0, 10, StorageType::Fridge), today()).unwrap();
        service.add(input("Rice", 1.0, 90, StorageType::Pantry), today()).unwrap();
        service.add(input("rice", 2.0, 90, StorageType::Pantry), today()).unwrap();
        service.update_quantity(milk.id, 0.0).unwrap();

        assert_eq!(service.available_names().unwrap(), vec!["Rice"]);
    }
}
