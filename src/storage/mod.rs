//! Storage layer for the kitchen manager
//!
//! Every table is a flat CSV file under the data directory. The ingredient
//! store is rewritten atomically on each change; the waste and expense
//! ledgers only ever append a row.

pub mod csv_io;
pub mod expenses;
pub mod expiry_dataset;
pub mod ingredients;
pub mod init;
pub mod recipes;
pub mod waste;

pub use expenses::ExpenseRepository;
pub use expiry_dataset::TrainingRepository;
pub use ingredients::IngredientRepository;
pub use init::initialize_storage;
pub use recipes::RecipeRepository;
pub use waste::WasteRepository;

use serde::Serialize;
use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::KitchenPaths;
use crate::config::settings::Settings;
use crate::error::KitchenResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: KitchenPaths,
    pub ingredients: IngredientRepository,
    pub recipes: RecipeRepository,
    pub waste: WasteRepository,
    pub expenses: ExpenseRepository,
    pub training: TrainingRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KitchenPaths, settings: &Settings) -> KitchenResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            ingredients: IngredientRepository::new(paths.ingredients_file()),
            recipes: RecipeRepository::new(paths.recipes_file()),
            waste: WasteRepository::new(paths.waste_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            training: TrainingRepository::new(paths.expiry_dataset_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: settings.audit_enabled,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &KitchenPaths {
        &self.paths
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// The audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> KitchenResult<()> {
        self.write_audit(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> KitchenResult<()> {
        self.write_audit(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> KitchenResult<()> {
        self.write_audit(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Record several entries at once (bulk purges)
    pub fn log_batch(&self, entries: &[AuditEntry]) -> KitchenResult<()> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log_batch(entries)
    }

    fn write_audit(&self, entry: AuditEntry) -> KitchenResult<()> {
        if !self.audit_enabled {
            return Ok(());
        }

        self.audit.log(&entry).map_err(|e| {
            warn!(error = %e, entity = %entry.entity_type, "failed to write audit entry");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_storage(audit_enabled: bool) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled,
            ..Settings::default()
        };
        let storage = Storage::new(paths, &settings).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage(true);

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_audit_written_when_enabled() {
        let (_temp_dir, storage) = create_storage(true);

        storage
            .log_create(EntityType::Ingredient, "1", Some("Rice".into()), &json!({}))
            .unwrap();

        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_audit_skipped_when_disabled() {
        let (_temp_dir, storage) = create_storage(false);

        storage
            .log_delete(EntityType::Ingredient, "1", None, &json!({}))
            .unwrap();

        assert!(storage.audit().read_all().unwrap().is_empty());
    }
}
