//! Expiry display formatting
//!
//! Date-based checks, classifier predictions for stocked ingredients and the
//! training table summary.

use tabled::{settings::Style, Table, Tabled};

use crate::classifier::{DatasetSummary, Prediction};
use crate::services::expiry::status_counts;
use crate::services::{ExpiryCheck, StockPrediction};

use super::report::format_percentage;

#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Ingredient")]
    name: String,
    #[tabled(rename = "Expires")]
    expiry_date: String,
    #[tabled(rename = "Days Left")]
    days_remaining: i64,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "Ingredient")]
    name: String,
    #[tabled(rename = "Type")]
    ingredient_type: String,
    #[tabled(rename = "Days Held")]
    days: u32,
    #[tabled(rename = "Storage")]
    storage: String,
    #[tabled(rename = "Prediction")]
    status: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

/// Format a date-based sweep with a per-status tally
pub fn format_expiry_checks(checks: &[ExpiryCheck], date_format: &str) -> String {
    if checks.is_empty() {
        return "No ingredients in stock.".to_string();
    }

    let rows = checks.iter().map(|c| CheckRow {
        id: c.ingredient.id.value(),
        name: c.ingredient.name.clone(),
        expiry_date: c.ingredient.expiry_date.format(date_format).to_string(),
        days_remaining: c.days_remaining,
        status: c.status.to_string(),
    });

    let tally = status_counts(checks)
        .iter()
        .map(|(status, n)| format!("{}: {}", status, n))
        .collect::<Vec<_>>()
        .join("  ");

    format!("{}\n{}", Table::new(rows).with(Style::psql()), tally)
}

/// Format classifier predictions for the current stock
pub fn format_stock_predictions(predictions: &[StockPrediction]) -> String {
    if predictions.is_empty() {
        return "No ingredients in stock.".to_string();
    }

    let rows = predictions.iter().map(|p| PredictionRow {
        name: p.ingredient.name.clone(),
        ingredient_type: p.ingredient_type.unwrap_or("unknown").to_string(),
        days: p.days_since_purchase,
        storage: p.ingredient.storage_type.to_string(),
        status: p.prediction.status.to_string(),
        confidence: format_confidence(&p.prediction),
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    if predictions.iter().any(|p| p.prediction.fallback) {
        output.push_str("\n* unknown type or storage; reported as Expire Soon to be safe");
    }
    output
}

/// One-line verdict for a single prediction
pub fn format_prediction(prediction: &Prediction) -> String {
    format!(
        "Predicted status: {} (confidence {})",
        prediction.status,
        format_confidence(prediction)
    )
}

pub fn format_dataset_summary(summary: &DatasetSummary) -> String {
    let mut output = format!("Training rows: {}\n", summary.rows);
    for (status, count) in &summary.by_status {
        output.push_str(&format!("  {:<12} {}\n", status.to_string(), count));
    }
    output.push_str(&format!(
        "Ingredient types: {}\n",
        summary.ingredient_types.join(", ")
    ));
    output.push_str(&format!(
        "Storage types:    {}\n",
        summary.storage_types.join(", ")
    ));
    output
}

fn format_confidence(prediction: &Prediction) -> String {
    if prediction.fallback {
        "*".to_string()
    } else {
        format_percentage(prediction.confidence * 100.0)
    }
}
