//! Expense ledger repository (expenses.csv)

use std::path::PathBuf;

use tracing::debug;

use crate::error::KitchenResult;
use crate::models::{ExpenseEvent, ExpenseId};

use super::csv_io::{append_row, read_table};

/// Column order of expenses.csv
pub const EXPENSE_HEADERS: [&str; 4] = ["id", "ingredient_name", "cost", "date"];

/// Append-only repository for expense events
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load_all(&self) -> KitchenResult<Vec<ExpenseEvent>> {
        let rows: Vec<ExpenseEvent> = read_table(&self.path)?;
        debug!(count = rows.len(), "loaded expense ledger");
        Ok(rows)
    }

    pub fn next_id(&self) -> KitchenResult<ExpenseId> {
        Ok(ExpenseId::next_after(self.load_all()?.iter().map(|e| e.id)))
    }

    /// Append one event as a single CSV row
    pub fn append(&self, event: &ExpenseEvent) -> KitchenResult<()> {
        append_row(&self.path, &EXPENSE_HEADERS, event)
    }

    pub fn count(&self) -> KitchenResult<usize> {
        Ok(self.load_all()?.len())
    }
}
