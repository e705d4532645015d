//! Labeled examples for the expiry classifier

use serde::{Deserialize, Serialize};

use super::ingredient::StorageType;
use super::status::ExpiryStatus;

/// One row of `expiry_dataset.csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Food group, e.g. `Vegetables`, `Dairy`, `Grains`
    pub ingredient_type: String,
    pub days_since_purchase: u32,
    pub storage_type: StorageType,
    pub status: ExpiryStatus,
}

impl TrainingExample {
    pub fn new(
        ingredient_type: impl Into<String>,
        days_since_purchase: u32,
        storage_type: StorageType,
        status: ExpiryStatus,
    ) -> Self {
        Self {
            ingredient_type: ingredient_type.into(),
            days_since_purchase,
            storage_type,
            status,
        }
    }
}
