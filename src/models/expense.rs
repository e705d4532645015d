//! Expense ledger entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// Money spent acquiring an ingredient. Field order is the column order of
/// `expenses.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEvent {
    pub id: ExpenseId,
    pub ingredient_name: String,
    pub cost: Money,
    pub date: NaiveDate,
}
