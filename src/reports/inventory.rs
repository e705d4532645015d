//! Inventory Report
//!
//! Quantity on hand per ingredient name, with the three best-stocked items.

use std::io::Write;

use tabled::{settings::Style, Table, Tabled};

use crate::display::format_quantity;
use crate::display::report::{bar_chart, title_block, BAR_WIDTH};
use crate::error::{KitchenError, KitchenResult};
use crate::models::{Ingredient, Money};
use crate::services::aggregate::group_by;
use crate::storage::Storage;

/// Number of items in the "best stocked" list
pub const TOP_N: usize = 3;

/// Stock of one ingredient name, summed over its entries
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLine {
    pub name: String,
    pub quantity: f64,
    /// Unit of the first entry with this name
    pub unit: String,
    pub entries: usize,
    pub value: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryReport {
    /// One line per name, ordered by name
    pub lines: Vec<InventoryLine>,
    /// Highest quantities first, at most `TOP_N`
    pub top: Vec<InventoryLine>,
    pub total_entries: usize,
    pub total_quantity: f64,
    /// Mean quantity per entry, 0 for an empty store
    pub average_quantity: f64,
    pub total_value: Money,
}

#[derive(Tabled)]
struct InventoryRow {
    #[tabled(rename = "Ingredient")]
    name: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Value")]
    value: String,
}

impl InventoryReport {
    /// Generate the report from the ingredient table
    pub fn generate(storage: &Storage) -> KitchenResult<Self> {
        Ok(Self::from_ingredients(&storage.ingredients.load_all()?))
    }

    pub fn from_ingredients(ingredients: &[Ingredient]) -> Self {
        let lines: Vec<InventoryLine> = group_by(
            ingredients,
            |i| i.name.clone(),
            |i| (i.quantity, i.cost),
        )
        .into_iter()
        .map(|g| InventoryLine {
            unit: ingredients
                .iter()
                .find(|i| i.name == g.key)
                .map(|i| i.unit.to_string())
                .unwrap_or_default(),
            name: g.key,
            quantity: g.quantity,
            entries: g.count,
            value: g.cost,
        })
        .collect();

        let mut top = lines.clone();
        top.sort_by(|a, b| b.quantity.total_cmp(&a.quantity));
        top.truncate(TOP_N);

        let total_quantity: f64 = ingredients.iter().map(|i| i.quantity).sum();
        let average_quantity = if ingredients.is_empty() {
            0.0
        } else {
            total_quantity / ingredients.len() as f64
        };

        Self {
            lines,
            top,
            total_entries: ingredients.len(),
            total_quantity,
            average_quantity,
            total_value: ingredients.iter().map(|i| i.cost).sum(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = title_block("Inventory Report");

        if self.lines.is_empty() {
            output.push_str("The pantry is empty.\n");
            return output;
        }

        output.push_str(&format!("Entries:          {}\n", self.total_entries));
        output.push_str(&format!("Total quantity:   {:.2}\n", self.total_quantity));
        output.push_str(&format!("Average quantity: {:.2}\n", self.average_quantity));
        output.push_str(&format!(
            "Stock value:      {}\n\n",
            self.total_value.format_with_symbol(currency)
        ));

        let rows = self.lines.iter().map(|l| InventoryRow {
            name: l.name.clone(),
            quantity: format_quantity(l.quantity, &l.unit),
            entries: l.entries,
            value: l.value.format_with_symbol(currency),
        });
        output.push_str(&Table::new(rows).with(Style::psql()).to_string());
        output.push_str("\n\nBest stocked:\n");

        let chart: Vec<(String, f64, String)> = self
            .top
            .iter()
            .map(|l| (l.name.clone(), l.quantity, format_quantity(l.quantity, &l.unit)))
            .collect();
        output.push_str(&bar_chart(&chart, BAR_WIDTH));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> KitchenResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| KitchenError::Export(e.to_string());

        csv.write_record(["Ingredient", "Quantity", "Unit", "Entries", "Value"])
            .map_err(export_err)?;
        for line in &self.lines {
            csv.write_record([
                line.name.clone(),
                line.quantity.to_string(),
                line.unit.clone(),
                line.entries.to_string(),
                line.value.to_string(),
            ])
            .map_err(export_err)?;
        }
        csv.write_record([
            "TOTAL".to_string(),
            self.total_quantity.to_string(),
            String::new(),
            self.total_entries.to_string(),
            self.total_value.to_string(),
        ])
        .map_err(export_err)?;

        csv.flush().map_err(|e| KitchenError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientId, StorageType, Unit};
    use chrono::NaiveDate;

    fn item(id: u32, name: &str, quantity: f64, cents: i64) -> Ingredient {
        let day = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
        Ingredient {
            id: IngredientId::new(id),
            name: name.to_string(),
            quantity,
            unit: Unit::G,
            expiry_date: day,
            storage_type: StorageType::Pantry,
            date_added: day,
            cost: Money::from_cents(cents),
        }
    }

    fn sample() -> Vec<Ingredient> {
        vec![
            item(1, "Rice", 1000.0, 8000),
            item(2, "Tomato", 500.0, 4000),
            item(3, "Rice", 500.0, 4000),
            item(4, "Garlic", 50.0, 1000),
            item(5, "Onion", 300.0, 2000),
        ]
    }

    #[test]
    fn test_quantity_per_name() {
        let report = InventoryReport::from_ingredients(&sample());

        assert_eq!(report.lines.len(), 4);
        let rice = report.lines.iter().find(|l| l.name == "Rice").unwrap();
        assert_eq!(rice.quantity, 1500.0);
        assert_eq!(rice.entries, 2);

        assert_eq!(report.total_entries, 5);
        assert_eq!(report.total_quantity, 2350.0);
        assert_eq!(report.average_quantity, 470.0);
        assert_eq!(report.total_value.cents(), 19000);
    }

    #[test]
    fn test_top_three() {
        let report = InventoryReport::from_ingredients(&sample());
        let names: Vec<_> = report.top.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Tomato", "Onion"]);
    }

    #[test]
    fn test_empty_store() {
        let report = InventoryReport::from_ingredients(&[]);
        assert_eq!(report.average_quantity, 0.0);
        assert!(report.format_terminal("₹").contains("The pantry is empty."));
    }

    #[test]
    fn test_export_csv() {
        let report = InventoryReport::from_ingredients(&sample());
        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Ingredient,Quantity,Unit,Entries,Value");
        assert!(lines.contains(&"Rice,1500,g,2,120.00"));
        assert_eq!(*lines.last().unwrap(), "TOTAL,2350,,5,190.00");
    }
}
