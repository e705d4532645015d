//! Labeled training table for the expiry classifier (expiry_dataset.csv)

use std::path::PathBuf;

use tracing::debug;

use crate::error::{KitchenError, KitchenResult};
use crate::models::TrainingExample;

use super::csv_io::{read_table_required, write_table_atomic};

/// Column order of expiry_dataset.csv
pub const TRAINING_HEADERS: [&str; 4] = [
    "ingredient_type",
    "days_since_purchase",
    "storage_type",
    "status",
];

/// Read-only repository for classifier training data
pub struct TrainingRepository {
    path: PathBuf,
}

impl TrainingRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all training examples
    ///
    /// # Errors
    ///
    /// `DataFileMissing` when the table does not exist, `DataFileCorrupt` when
    /// it has no rows or a row cannot be parsed.
    pub fn load_all(&self) -> KitchenResult<Vec<TrainingExample>> {
        let rows: Vec<TrainingExample> = read_table_required(&self.path)?;

        if rows.is_empty() {
            return Err(KitchenError::DataFileCorrupt(format!(
                "{}: no training examples",
                self.path.display()
            )));
        }

        debug!(count = rows.len(), "loaded expiry training data");
        Ok(rows)
    }

    /// Write the starter table
    pub(crate) fn seed(&self, examples: &[TrainingExample]) -> KitchenResult<()> {
        write_table_atomic(&self.path, &TRAINING_HEADERS, examples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpiryStatus, StorageType};
    use tempfile::TempDir;

    #[test]
    fn test_missing_and_empty_tables() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TrainingRepository::new(temp_dir.path().join("expiry_dataset.csv"));

        assert!(matches!(
            repo.load_all().unwrap_err(),
            KitchenError::DataFileMissing(_)
        ));

        repo.seed(&[]).unwrap();
        assert!(matches!(
            repo.load_all().unwrap_err(),
            KitchenError::DataFileCorrupt(_)
        ));
    }

    #[test]
    fn test_status_labels_with_spaces() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expiry_dataset.csv");
        std::fs::write(
            &path,
            "ingredient_type,days_since_purchase,storage_type,status\n\
             Dairy,6,fridge,Expire Soon\nGrains,2,pantry,Safe\n",
        )
        .unwrap();

        let rows = TrainingRepository::new(path).load_all().unwrap();
        assert_eq!(
            rows[0],
            TrainingExample::new("Dairy", 6, StorageType::Fridge, ExpiryStatus::ExpireSoon)
        );
        assert_eq!(rows[1].status, ExpiryStatus::Safe);
    }
}
