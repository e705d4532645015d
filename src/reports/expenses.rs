//! Expense Report
//!
//! Spending per ingredient with each ingredient's share of the total.

use std::io::Write;

use tabled::{settings::Style, Table, Tabled};

use crate::display::report::{bar_chart, format_percentage, title_block, BAR_WIDTH};
use crate::error::{KitchenError, KitchenResult};
use crate::models::{ExpenseEvent, Money};
use crate::services::aggregate::{percentage, sort_by_cost_desc};
use crate::services::expense::expense_groups;
use crate::storage::Storage;

/// Spending on one ingredient
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLine {
    pub ingredient: String,
    pub cost: Money,
    pub purchases: usize,
    /// Share of total spending, 0 to 100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseReport {
    /// Largest spend first
    pub lines: Vec<ExpenseLine>,
    pub total: Money,
    pub purchases: usize,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Ingredient")]
    ingredient: String,
    #[tabled(rename = "Purchases")]
    purchases: usize,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Share")]
    share: String,
}

impl ExpenseReport {
    /// Generate the report from the expense ledger
    pub fn generate(storage: &Storage) -> KitchenResult<Self> {
        Ok(Self::from_events(&storage.expenses.load_all()?))
    }

    pub fn from_events(events: &[ExpenseEvent]) -> Self {
        let total: Money = events.iter().map(|e| e.cost).sum();

        let mut groups = expense_groups(events, |e| e.ingredient_name.clone());
        sort_by_cost_desc(&mut groups);

        let lines = groups
            .into_iter()
            .map(|g| ExpenseLine {
                percentage: percentage(g.cost, total),
                ingredient: g.key,
                cost: g.cost,
                purchases: g.count,
            })
            .collect();

        Self {
            lines,
            total,
            purchases: events.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = title_block("Expense Report");

        if self.lines.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "Total spent: {} over {} purchase(s)\n\n",
            self.total.format_with_symbol(currency),
            self.purchases
        ));

        let rows = self.lines.iter().map(|l| ExpenseRow {
            ingredient: l.ingredient.clone(),
            purchases: l.purchases,
            cost: l.cost.format_with_symbol(currency),
            share: format_percentage(l.percentage),
        });
        output.push_str(&Table::new(rows).with(Style::psql()).to_string());
        output.push_str("\n\n");

        let chart: Vec<(String, f64, String)> = self
            .lines
            .iter()
            .map(|l| {
                (
                    l.ingredient.clone(),
                    l.cost.as_f64(),
                    format_percentage(l.percentage),
                )
            })
            .collect();
        output.push_str(&bar_chart(&chart, BAR_WIDTH));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> KitchenResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| KitchenError::Export(e.to_string());

        csv.write_record(["Ingredient", "Purchases", "Cost", "Percentage"])
            .map_err(export_err)?;
        for line in &self.lines {
            csv.write_record([
                line.ingredient.clone(),
                line.purchases.to_string(),
                line.cost.to_string(),
                format!("{:.2}", line.percentage),
            ])
            .map_err(export_err)?;
        }
        csv.write_record([
            "TOTAL".to_string(),
            self.purchases.to_string(),
            self.total.to_string(),
            if self.lines.is_empty() { "0.00" } else { "100.00" }.to_string(),
        ])
        .map_err(export_err)?;

        csv.flush().map_err(|e| KitchenError::Export(e.to_string()))
    }
}
