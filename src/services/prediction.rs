//! Expiry prediction service
//!
//! Fits the expiry classifier on the training table once and answers every
//! prediction for the rest of the session from that model.

use chrono::NaiveDate;
use tracing::debug;

use crate::classifier::{
    ingredient_type_for, DatasetSummary, ExpiryClassifier, ExpiryQuery, Prediction,
};
use crate::config::ClassifierSettings;
use crate::error::KitchenResult;
use crate::models::{Ingredient, StorageType};
use crate::storage::Storage;

/// Classifier verdict for one stocked ingredient
#[derive(Debug, Clone, PartialEq)]
pub struct StockPrediction {
    pub ingredient: Ingredient,
    /// Food group from the built-in table; `None` for unknown names
    pub ingredient_type: Option<&'static str>,
    pub days_since_purchase: u32,
    pub prediction: Prediction,
}

/// Service holding a trained classifier
pub struct PredictionService<'a> {
    storage: &'a Storage,
    model: ExpiryClassifier,
}

impl<'a> PredictionService<'a> {
    /// Load the training table and fit the classifier
    ///
    /// # Errors
    ///
    /// `DataFileMissing` / `DataFileCorrupt` when the training table is
    /// absent, empty or unreadable.
    pub fn train(storage: &'a Storage, params: ClassifierSettings) -> KitchenResult<Self> {
        let examples = storage.training.load_all()?;
        let model = ExpiryClassifier::fit(&examples, params)?;
        Ok(Self { storage, model })
    }

    pub fn model(&self) -> &ExpiryClassifier {
        &self.model
    }

    pub fn predict(
        &self,
        ingredient_type: &str,
        days_since_purchase: u32,
        storage_type: StorageType,
    ) -> Prediction {
        self.model
            .predict(ingredient_type, days_since_purchase, storage_type)
    }

    /// Predict the status of everything in the store
    pub fn scan_stock(&self, today: NaiveDate) -> KitchenResult<Vec<StockPrediction>> {
        let ingredients = self.storage.ingredients.load_all()?;

        let queries: Vec<ExpiryQuery> = ingredients
            .iter()
            .map(|i| ExpiryQuery {
                ingredient_type: ingredient_type_for(&i.name).map(str::to_string),
                days_since_purchase: days_since(i, today),
                storage_type: i.storage_type,
            })
            .collect();

        let predictions = self.model.predict_batch(&queries);
        debug!(count = predictions.len(), "scanned stock");

        Ok(ingredients
            .into_iter()
            .zip(queries)
            .zip(predictions)
            .map(|((ingredient, query), prediction)| StockPrediction {
                ingredient_type: ingredient_type_for(&ingredient.name),
                days_since_purchase: query.days_since_purchase,
                ingredient,
                prediction,
            })
            .collect())
    }
}

/// Row counts of the training table
pub fn dataset_summary(storage: &Storage) -> KitchenResult<DatasetSummary> {
    Ok(DatasetSummary::from_examples(&storage.training.load_all()?))
}

// An ingredient dated in the future counts as bought today
fn days_since(ingredient: &Ingredient, today: NaiveDate) -> u32 {
    u32::try_from(ingredient.days_since_purchase(today).max(0)).unwrap_or(u32::MAX)
}
