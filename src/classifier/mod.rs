//! Expiry prediction
//!
//! A small CART decision tree trained once per run on the labeled
//! `expiry_dataset.csv` table and reused for every prediction in that run.

mod encoder;
mod food_types;
mod model;
mod tree;

pub use encoder::CategoricalEncoder;
pub use food_types::ingredient_type_for;
pub use model::{ExpiryClassifier, ExpiryQuery, Prediction, FALLBACK_STATUS};
pub use tree::{DecisionTree, LeafVote};

use crate::models::{ExpiryStatus, TrainingExample};

/// Shape of the training table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub rows: usize,
    /// Row count per status, in `ExpiryStatus::ALL` order
    pub by_status: Vec<(ExpiryStatus, usize)>,
    pub ingredient_types: Vec<String>,
    pub storage_types: Vec<String>,
}

impl DatasetSummary {
    pub fn from_examples(examples: &[TrainingExample]) -> Self {
        let by_status = ExpiryStatus::ALL
            .iter()
            .map(|&status| {
                let count = examples.iter().filter(|e| e.status == status).count();
                (status, count)
            })
            .collect();

        Self {
            rows: examples.len(),
            by_status,
            ingredient_types: CategoricalEncoder::fit(
                examples.iter().map(|e| e.ingredient_type.as_str()),
            )
            .categories()
            .to_vec(),
            storage_types: CategoricalEncoder::fit(
                examples.iter().map(|e| e.storage_type.to_string()),
            )
            .categories()
            .to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StorageType;

    #[test]
    fn test_dataset_summary() {
        let examples = vec![
            TrainingExample::new("Dairy", 1, StorageType::Fridge, ExpiryStatus::Safe),
            TrainingExample::new("Dairy", 9, StorageType::Fridge, ExpiryStatus::Expired),
            TrainingExample::new("Grains", 3, StorageType::Pantry, ExpiryStatus::Safe),
        ];

        let summary = DatasetSummary::from_examples(&examples);

        assert_eq!(summary.rows, 3);
        assert_eq!(
            summary.by_status,
            vec![
                (ExpiryStatus::Safe, 2),
                (ExpiryStatus::ExpireSoon, 0),
                (ExpiryStatus::Expired, 1)
            ]
        );
        assert_eq!(summary.ingredient_types, vec!["Dairy", "Grains"]);
        assert_eq!(summary.storage_types, vec!["fridge", "pantry"]);
    }
}
