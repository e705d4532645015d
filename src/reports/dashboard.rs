//! Dashboard
//!
//! One-screen overview of the store and both ledgers.

use std::io::Write;

use chrono::NaiveDate;

use crate::display::report::{format_bar, format_percentage, title_block, BAR_WIDTH};
use crate::error::{KitchenError, KitchenResult};
use crate::models::{status_for, ExpenseEvent, ExpiryStatus, Ingredient, Money, WasteEvent};
use crate::services::aggregate::percentage;
use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub total_ingredients: usize,
    pub total_expenses: Money,
    pub total_waste_cost: Money,
    /// Waste cost as a share of spending; 0 when nothing has been spent
    pub waste_percentage: f64,
    pub expire_soon: usize,
    pub expired: usize,
}

impl Dashboard {
    /// Generate the dashboard from the store and ledgers
    pub fn generate(storage: &Storage, today: NaiveDate) -> KitchenResult<Self> {
        Ok(Self::from_data(
            &storage.ingredients.load_all()?,
            &storage.expenses.load_all()?,
            &storage.waste.load_all()?,
            today,
        ))
    }

    pub fn from_data(
        ingredients: &[Ingredient],
        expenses: &[ExpenseEvent],
        waste: &[WasteEvent],
        today: NaiveDate,
    ) -> Self {
        let total_expenses: Money = expenses.iter().map(|e| e.cost).sum();
        let total_waste_cost: Money = waste.iter().map(|e| e.cost).sum();
        let count_status = |status: ExpiryStatus| {
            ingredients
                .iter()
                .filter(|i| status_for(today, i.expiry_date) == status)
                .count()
        };

        Self {
            total_ingredients: ingredients.len(),
            total_expenses,
            total_waste_cost,
            waste_percentage: percentage(total_waste_cost, total_expenses),
            expire_soon: count_status(ExpiryStatus::ExpireSoon),
            expired: count_status(ExpiryStatus::Expired),
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = title_block("Kitchen Dashboard");

        output.push_str(&format!("Ingredients in store: {}\n", self.total_ingredients));
        output.push_str(&format!("  Expiring soon:      {}\n", self.expire_soon));
        output.push_str(&format!("  Expired:            {}\n", self.expired));
        output.push_str(&format!(
            "Total expenses:       {}\n",
            self.total_expenses.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Total waste cost:     {}\n",
            self.total_waste_cost.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Waste share:          {}  {}\n",
            format_bar(self.waste_percentage, 100.0, BAR_WIDTH),
            format_percentage(self.waste_percentage)
        ));

        output
    }

    /// Export the dashboard to CSV format as metric/value pairs
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> KitchenResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| KitchenError::Export(e.to_string());

        let rows = [
            ("Metric", "Value".to_string()),
            ("Total Ingredients", self.total_ingredients.to_string()),
            ("Expire Soon", self.expire_soon.to_string()),
            ("Expired", self.expired.to_string()),
            ("Total Expenses", self.total_expenses.to_string()),
            ("Total Waste Cost", self.total_waste_cost.to_string()),
            ("Waste Percentage", format!("{:.2}", self.waste_percentage)),
        ];
        for (metric, value) in rows {
            csv.write_record([metric, value.as_str()])
                .map_err(export_err)?;
        }

        csv.flush().map_err(|e| KitchenError::Export(e.to_string()))
    }
}
