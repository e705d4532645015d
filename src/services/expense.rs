//! Expense service
//!
//! Records ingredient purchases in the append-only expense ledger and
//! summarizes spending.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{normalize_name, ExpenseEvent, Money};
use crate::storage::Storage;

use super::aggregate::{group_by, sort_by_cost_desc, Group};

/// Spending statistics over the whole ledger
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub total: Money,
    pub average: Money,
    pub min: Money,
    pub max: Money,
    pub records: usize,
    pub distinct_ingredients: usize,
    /// Ingredient with the highest summed cost
    pub most_expensive: Option<Group>,
    /// Ingredient with the lowest summed cost
    pub least_expensive: Option<Group>,
}

/// Service for the expense ledger
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append an expense to the ledger
    pub fn record(&self, ingredient_name: &str, cost: Money, date: NaiveDate) -> KitchenResult<ExpenseEvent> {
        let ingredient_name = normalize_name(ingredient_name);
        if ingredient_name.is_empty() {
            return Err(KitchenError::Validation(
                "Ingredient name cannot be empty".into(),
            ));
        }
        if cost.is_negative() || cost.is_zero() {
            return Err(KitchenError::Validation(format!(
                "Cost must be positive, got {}",
                cost
            )));
        }

        let event = ExpenseEvent {
            id: self.storage.expenses.next_id()?,
            ingredient_name,
            cost,
            date,
        };

        self.storage.expenses.append(&event)?;

        self.storage.log_create(
            EntityType::ExpenseEvent,
            event.id.to_string(),
            Some(event.ingredient_name.clone()),
            &event,
        )?;

        info!(id = %event.id, ingredient = %event.ingredient_name, cost = %event.cost, "expense recorded");
        Ok(event)
    }

    /// Every expense, oldest first
    pub fn list(&self) -> KitchenResult<Vec<ExpenseEvent>> {
        self.storage.expenses.load_all()
    }

    pub fn total(&self) -> KitchenResult<Money> {
        Ok(self.list()?.iter().map(|e| e.cost).sum())
    }

    /// Spending per ingredient, largest first
    pub fn by_ingredient(&self) -> KitchenResult<Vec<Group>> {
        let mut groups = expense_groups(&self.list()?, |e| e.ingredient_name.clone());
        sort_by_cost_desc(&mut groups);
        Ok(groups)
    }

    /// Spending per `YYYY-MM`
    pub fn by_month(&self) -> KitchenResult<Vec<Group>> {
        Ok(expense_groups(&self.list()?, |e| {
            e.date.format("%Y-%m").to_string()
        }))
    }

    /// Summary statistics; `None` for an empty ledger
    pub fn summary(&self) -> KitchenResult<Option<ExpenseSummary>> {
        Ok(summarize(&self.list()?))
    }
}

/// Group expenses, summing cost (quantity stays 0)
pub fn expense_groups<F>(events: &[ExpenseEvent], key: F) -> Vec<Group>
where
    F: Fn(&ExpenseEvent) -> String,
{
    group_by(events, key, |e| (0.0, e.cost))
}

pub fn summarize(events: &[ExpenseEvent]) -> Option<ExpenseSummary> {
    let min = events.iter().map(|e| e.cost).min()?;
    let max = events.iter().map(|e| e.cost).max()?;
    let total: Money = events.iter().map(|e| e.cost).sum();
    let average = Money::from_cents(total.cents() / events.len() as i64);

    let mut groups = expense_groups(events, |e| e.ingredient_name.clone());
    sort_by_cost_desc(&mut groups);

    Some(ExpenseSummary {
        total,
        average,
        min,
        max,
        records: events.len(),
        distinct_ingredients: groups.len(),
        most_expensive: groups.first().cloned(),
        least_expensive: groups.last().cloned(),
    })
}
