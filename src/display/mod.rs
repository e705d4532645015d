//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, text bar charts, and status labels.

pub mod expiry;
pub mod ingredient;
pub mod ledger;
pub mod recipe;
pub mod report;

pub use expiry::{
    format_dataset_summary, format_expiry_checks, format_prediction, format_stock_predictions,
};
pub use ingredient::{format_ingredient_details, format_ingredient_list, format_quantity};
pub use ledger::{
    format_expense_list, format_expense_summary, format_groups, format_waste_list,
    format_waste_tip,
};
pub use recipe::{format_match_details, format_matches, format_recipe_list};
