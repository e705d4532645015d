//! Expiry status classifier
//!
//! Predicts an [`ExpiryStatus`] from (ingredient type, days since purchase,
//! storage type). Both categorical inputs are integer-coded with vocabularies
//! discovered from the training rows, then fed to a [`DecisionTree`].
//!
//! A category never seen in training cannot be coded, so such queries get
//! [`FALLBACK_STATUS`] instead of an error.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ClassifierSettings;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{ExpiryStatus, StorageType, TrainingExample};

use super::encoder::CategoricalEncoder;
use super::tree::DecisionTree;

/// Status returned for inputs the model cannot code
pub const FALLBACK_STATUS: ExpiryStatus = ExpiryStatus::ExpireSoon;

/// One classifier input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryQuery {
    /// Food group; `None` when the ingredient has no known group
    pub ingredient_type: Option<String>,
    pub days_since_purchase: u32,
    pub storage_type: StorageType,
}

impl ExpiryQuery {
    pub fn new(
        ingredient_type: impl Into<String>,
        days_since_purchase: u32,
        storage_type: StorageType,
    ) -> Self {
        Self {
            ingredient_type: Some(ingredient_type.into()),
            days_since_purchase,
            storage_type,
        }
    }
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub status: ExpiryStatus,
    /// Share of training rows in the decisive leaf that carry `status`;
    /// 0 for fallback answers
    pub confidence: f64,
    /// True when an input category was unknown
    pub fallback: bool,
}

impl Prediction {
    fn fallback() -> Self {
        Self {
            status: FALLBACK_STATUS,
            confidence: 0.0,
            fallback: true,
        }
    }
}

/// A fitted expiry classifier
#[derive(Debug, Clone)]
pub struct ExpiryClassifier {
    ingredient_types: CategoricalEncoder,
    storage_types: CategoricalEncoder,
    tree: DecisionTree,
    training_rows: usize,
    training_accuracy: f64,
}

impl ExpiryClassifier {
    /// Fit the classifier to the labeled examples
    ///
    /// # Errors
    ///
    /// `DataFileCorrupt` when `examples` is empty.
    pub fn fit(examples: &[TrainingExample], params: ClassifierSettings) -> KitchenResult<Self> {
        if examples.is_empty() {
            return Err(KitchenError::DataFileCorrupt("no training examples".into()));
        }

        let ingredient_types =
            CategoricalEncoder::fit(examples.iter().map(|e| e.ingredient_type.as_str()));
        let storage_types =
            CategoricalEncoder::fit(examples.iter().map(|e| e.storage_type.to_string()));

        let mut samples = Vec::with_capacity(examples.len());
        let mut labels = Vec::with_capacity(examples.len());
        for example in examples {
            let (Some(type_code), Some(storage_code)) = (
                ingredient_types.encode(&example.ingredient_type),
                storage_types.encode(&example.storage_type.to_string()),
            ) else {
                return Err(KitchenError::Model(format!(
                    "training row for {} could not be encoded",
                    example.ingredient_type
                )));
            };
            samples.push(vec![
                type_code as f64,
                f64::from(example.days_since_purchase),
                storage_code as f64,
            ]);
            labels.push(class_index(example.status));
        }

        let tree = DecisionTree::fit(&samples, &labels, ExpiryStatus::ALL.len(), params)?;

        let correct = samples
            .iter()
            .zip(&labels)
            .filter(|(row, &label)| tree.predict(row).class == label)
            .count();
        let training_accuracy = correct as f64 / examples.len() as f64;

        info!(
            rows = examples.len(),
            depth = tree.depth(),
            leaves = tree.leaf_count(),
            accuracy = training_accuracy,
            "expiry classifier trained"
        );

        Ok(Self {
            ingredient_types,
            storage_types,
            tree,
            training_rows: examples.len(),
            training_accuracy,
        })
    }

    /// Predict the status of one item
    pub fn predict(
        &self,
        ingredient_type: &str,
        days_since_purchase: u32,
        storage_type: StorageType,
    ) -> Prediction {
        let Some(type_code) = self.ingredient_types.encode(ingredient_type) else {
            debug!(ingredient_type, "unknown ingredient type, using fallback");
            return Prediction::fallback();
        };
        let Some(storage_code) = self.storage_types.encode(&storage_type.to_string()) else {
            debug!(%storage_type, "storage type absent from training data, using fallback");
            return Prediction::fallback();
        };

        let vote = self.tree.predict(&[
            type_code as f64,
            f64::from(days_since_purchase),
            storage_code as f64,
        ]);

        Prediction {
            status: ExpiryStatus::ALL[vote.class],
            confidence: vote.confidence,
            fallback: false,
        }
    }

    pub fn predict_query(&self, query: &ExpiryQuery) -> Prediction {
        match &query.ingredient_type {
            Some(ingredient_type) => {
                self.predict(ingredient_type, query.days_since_purchase, query.storage_type)
            }
            None => Prediction::fallback(),
        }
    }

    /// Predict each query independently; output is parallel to input
    pub fn predict_batch(&self, queries: &[ExpiryQuery]) -> Vec<Prediction> {
        queries.iter().map(|q| self.predict_query(q)).collect()
    }

    /// Share of training rows the fitted tree labels correctly
    pub fn training_accuracy(&self) -> f64 {
        self.training_accuracy
    }

    pub fn training_rows(&self) -> usize {
        self.training_rows
    }

    /// Ingredient types known to the model, in vocabulary order
    pub fn ingredient_types(&self) -> &[String] {
        self.ingredient_types.categories()
    }

    pub fn storage_types(&self) -> &[String] {
        self.storage_types.categories()
    }
}

fn class_index(status: ExpiryStatus) -> usize {
    match status {
        ExpiryStatus::Safe => 0,
        ExpiryStatus::ExpireSoon => 1,
        ExpiryStatus::Expired => 2,
    }
}
