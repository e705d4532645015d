//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod expiry;
pub mod history;
pub mod ingredient;
pub mod parse;
pub mod recipe;
pub mod report;
pub mod waste;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use expiry::{handle_expiry_command, ExpiryCommands};
pub use history::handle_history_command;
pub use ingredient::{handle_ingredient_command, IngredientCommands};
pub use recipe::{handle_recipe_command, RecipeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use waste::{handle_waste_command, WasteCommands};
