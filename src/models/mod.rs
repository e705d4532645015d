//! Core data models
//!
//! This module contains the data structures of the kitchen domain:
//! ingredients, recipes, ledger entries and classifier training rows.

pub mod expense;
pub mod ids;
pub mod ingredient;
pub mod money;
pub mod recipe;
pub mod status;
pub mod training;
pub mod waste;

pub use expense::ExpenseEvent;
pub use ids::{ExpenseId, IngredientId, RecipeId, WasteId};
pub use ingredient::{normalize_name, Ingredient, StorageType, Unit};
pub use money::Money;
pub use recipe::Recipe;
pub use status::{status_for, ExpiryStatus};
pub use training::TrainingExample;
pub use waste::{WasteEvent, WasteReason};
