//! Date-based expiry checks
//!
//! Classifies stocked ingredients purely from their printed expiry date and
//! can purge the ones that have expired.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{KitchenError, KitchenResult};
use crate::models::{status_for, ExpiryStatus, Ingredient};
use crate::storage::Storage;

/// Expiry status of one ingredient on a given day
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryCheck {
    pub ingredient: Ingredient,
    /// Days until the expiry date; zero or negative once expired
    pub days_remaining: i64,
    pub status: ExpiryStatus,
}

impl ExpiryCheck {
    pub fn new(ingredient: Ingredient, today: NaiveDate) -> Self {
        Self {
            days_remaining: ingredient.days_until_expiry(today),
            status: status_for(today, ingredient.expiry_date),
            ingredient,
        }
    }
}

/// Number of checks in each status, in `ExpiryStatus::ALL` order
pub fn status_counts(checks: &[ExpiryCheck]) -> Vec<(ExpiryStatus, usize)> {
    ExpiryStatus::ALL
        .iter()
        .map(|&status| (status, checks.iter().filter(|c| c.status == status).count()))
        .collect()
}

/// Service for date-based expiry checks
pub struct ExpiryService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpiryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Classify every ingredient, soonest to expire first
    pub fn sweep(&self, today: NaiveDate) -> KitchenResult<Vec<ExpiryCheck>> {
        let mut checks: Vec<ExpiryCheck> = self
            .storage
            .ingredients
            .load_all()?
            .into_iter()
            .map(|i| ExpiryCheck::new(i, today))
            .collect();

        checks.sort_by(|a, b| {
            a.days_remaining
                .cmp(&b.days_remaining)
                .then(a.ingredient.id.cmp(&b.ingredient.id))
        });
        Ok(checks)
    }

    /// Ingredients whose expiry date has been reached
    pub fn expired(&self, today: NaiveDate) -> KitchenResult<Vec<ExpiryCheck>> {
        Ok(self
            .sweep(today)?
            .into_iter()
            .filter(|c| c.status == ExpiryStatus::Expired)
            .collect())
    }

    /// Remove every expired ingredient from the store, returning what was removed
    pub fn purge_expired(&self, today: NaiveDate) -> KitchenResult<Vec<Ingredient>> {
        let removed = self
            .storage
            .ingredients
            .delete_where(|i| status_for(today, i.expiry_date) == ExpiryStatus::Expired)?;

        if !removed.is_empty() {
            let entries: Vec<AuditEntry> = removed
                .iter()
                .map(|i| {
                    AuditEntry::delete(
                        EntityType::Ingredient,
                        i.id.to_string(),
                        Some(i.name.clone()),
                        i,
                    )
                })
                .collect();
            self.storage.log_batch(&entries)?;
        }

        info!(count = removed.len(), "expired ingredients purged");
        Ok(removed)
    }

    /// Check every stocked entry of one ingredient by name
    pub fn check(&self, name: &str, today: NaiveDate) -> KitchenResult<Vec<ExpiryCheck>> {
        let matches = self.storage.ingredients.find_by_name(name)?;
        if matches.is_empty() {
            return Err(KitchenError::ingredient_not_found(name.trim()));
        }

        Ok(matches
            .into_iter()
            .map(|i| ExpiryCheck::new(i, today))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KitchenPaths, Settings};
    use crate::models::{IngredientId, Money, StorageType, Unit};
    use chrono::Duration;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()
    }

    fn create_test_storage(expiring_in: &[i64]) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        for (i, days) in expiring_in.iter().enumerate() {
            storage
                .ingredients
                .insert(Ingredient {
                    id: IngredientId::new(i as u32 + 1),
                    name: format!("Item {}", i + 1),
                    quantity: 1.0,
                    unit: Unit::Pieces,
                    expiry_date: today() + Duration::days(*days),
                    storage_type: StorageType::Fridge,
                    date_added: today(),
                    cost: Money::zero(),
                })
                .unwrap();
        }

        (temp_dir, storage)
    }

    #[test]
    fn test_sweep_sorted_by_days_remaining() {
        let (_temp_dir, storage) = create_test_storage(&[10, -1, 3, 0]);
        let checks = ExpiryService::new(&storage).sweep(today()).unwrap();

        let days: Vec<_> = checks.iter().map(|c| c.days_remaining).collect();
        assert_eq!(days, vec![-1, 0, 3, 10]);

        let statuses: Vec<_> = checks.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![
                ExpiryStatus::Expired,
                ExpiryStatus::Expired,
                ExpiryStatus::ExpireSoon,
                ExpiryStatus::Safe
            ]
        );
        assert_eq!(
            status_counts(&checks),
            vec![
                (ExpiryStatus::Safe, 1),
                (ExpiryStatus::ExpireSoon, 1),
                (ExpiryStatus::Expired, 2)
            ]
        );
    }

    #[test]
    fn test_purge_removes_only_expired() {
        let (_temp_dir, storage) = create_test_storage(&[10, -1, 3, 0]);
        let service = ExpiryService::new(&storage);

        let removed = service.purge_expired(today()).unwrap();

        assert_eq!(removed.len(), 2);
        assert_eq!(storage.ingredients.count().unwrap(), 2);
        assert!(service.expired(today()).unwrap().is_empty());
        assert_eq!(storage.audit().read_all().unwrap().len(), 2);

        assert!(service.purge_expired(today()).unwrap().is_empty());
    }

    #[test]
    fn test_check_specific_ingredient() {
        let (_temp_dir, storage) = create_test_storage(&[2]);
        let service = ExpiryService::new(&storage);

        let checks = service.check("item 1", today()).unwrap();
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].status, ExpiryStatus::ExpireSoon);

        assert!(service.check("Saffron", today()).unwrap_err().is_not_found());
    }
}
