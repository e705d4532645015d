//! Expiry CLI commands
//!
//! Date-based checks against printed expiry dates, and classifier
//! predictions from how long an ingredient has been kept.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_dataset_summary, format_expiry_checks, format_prediction, format_stock_predictions,
};
use crate::error::KitchenResult;
use crate::services::prediction::dataset_summary;
use crate::services::{ExpiryService, PredictionService};
use crate::storage::Storage;

use super::parse::{parse_storage, parse_whole_days};

/// Expiry subcommands
#[derive(Subcommand)]
pub enum ExpiryCommands {
    /// Check expiry dates of the whole store, or of one ingredient
    Check {
        /// Ingredient name
        ingredient: Option<String>,
    },
    /// Remove every expired ingredient from the store
    Purge,
    /// Predict the status of an ingredient with the classifier
    Predict {
        /// Ingredient type (e.g., Vegetables, Dairy, Grains)
        ingredient_type: String,
        /// Days since purchase
        days: String,
        /// Storage type (fridge, pantry, freezer)
        storage: String,
    },
    /// Predict the status of everything in the store
    Scan,
    /// Summarize the classifier's training data
    Dataset,
}

/// Handle an expiry command
pub fn handle_expiry_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpiryCommands,
) -> KitchenResult<()> {
    let service = ExpiryService::new(storage);

    match cmd {
        ExpiryCommands::Check { ingredient } => {
            let checks = match ingredient {
                Some(name) => service.check(&name, today)?,
                None => service.sweep(today)?,
            };
            println!("{}", format_expiry_checks(&checks, &settings.date_format));
        }

        ExpiryCommands::Purge => {
            let removed = service.purge_expired(today)?;
            if removed.is_empty() {
                println!("No expired ingredients.");
            } else {
                println!("Removed {} expired ingredient(s):", removed.len());
                for ingredient in &removed {
                    println!("  - {} (expired {})", ingredient.name, ingredient.expiry_date);
                }
            }
        }

        ExpiryCommands::Predict {
            ingredient_type,
            days,
            storage: storage_type,
        } => {
            let days = parse_whole_days(&days)?;
            let storage_type = parse_storage(&storage_type)?;
            let predictor = PredictionService::train(storage, settings.classifier)?;
            let prediction = predictor.predict(&ingredient_type, days, storage_type);
            println!("{}", format_prediction(&prediction));
            if prediction.fallback {
                println!("'{}' is not in the training data; assuming it may expire soon.", ingredient_type);
            }
        }

        ExpiryCommands::Scan => {
            let predictor = PredictionService::train(storage, settings.classifier)?;
            println!("{}", format_stock_predictions(&predictor.scan_stock(today)?));
        }

        ExpiryCommands::Dataset => {
            print!("{}", format_dataset_summary(&dataset_summary(storage)?));
            let predictor = PredictionService::train(storage, settings.classifier)?;
            println!(
                "Training accuracy: {:.1}%",
                predictor.model().training_accuracy() * 100.0
            );
        }
    }

    Ok(())
}
