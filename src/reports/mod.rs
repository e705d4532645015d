//! Reports module
//!
//! Derived views over the ingredient store and the waste and expense
//! ledgers. Every report can be printed to the terminal or exported as CSV.

pub mod dashboard;
pub mod expenses;
pub mod inventory;
pub mod waste;

pub use dashboard::Dashboard;
pub use expenses::{ExpenseLine, ExpenseReport};
pub use inventory::{InventoryLine, InventoryReport};
pub use waste::{WasteLine, WasteReport};
