//! Service layer for the kitchen manager
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, aggregation and audit logging.

pub mod aggregate;
pub mod expense;
pub mod expiry;
pub mod ingredient;
pub mod prediction;
pub mod recipe;
pub mod waste;

pub use aggregate::Group;
pub use expense::{ExpenseService, ExpenseSummary};
pub use expiry::{ExpiryCheck, ExpiryService};
pub use ingredient::{CreateIngredientInput, IngredientFilter, IngredientService};
pub use prediction::{PredictionService, StockPrediction};
pub use recipe::{RecipeMatch, RecipeService};
pub use waste::{RecordWasteInput, WasteService, WasteTip};
