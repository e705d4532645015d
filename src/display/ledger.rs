//! Waste and expense ledger display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{ExpenseEvent, Money, WasteEvent};
use crate::services::{ExpenseSummary, Group, WasteTip};

use super::ingredient::format_quantity;

#[derive(Tabled)]
struct WasteRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Ingredient")]
    ingredient: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Reason")]
    reason: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Ingredient")]
    ingredient: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    key: String,
    #[tabled(rename = "Entries")]
    count: usize,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// Format the waste ledger as a table
pub fn format_waste_list(events: &[WasteEvent], currency: &str, date_format: &str) -> String {
    if events.is_empty() {
        return "No waste recorded.".to_string();
    }

    let rows = events.iter().map(|e| WasteRow {
        id: e.id.value(),
        date: e.date.format(date_format).to_string(),
        ingredient: e.ingredient_name.clone(),
        quantity: format_quantity(e.quantity, &e.unit.to_string()),
        reason: e.reason.to_string(),
        cost: e.cost.format_with_symbol(currency),
    });

    let total: Money = events.iter().map(|e| e.cost).sum();
    format!(
        "{}\n{} entr{}, total cost {}",
        Table::new(rows).with(Style::psql()),
        events.len(),
        if events.len() == 1 { "y" } else { "ies" },
        total.format_with_symbol(currency)
    )
}

/// Format the expense ledger as a table
pub fn format_expense_list(events: &[ExpenseEvent], currency: &str, date_format: &str) -> String {
    if events.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = events.iter().map(|e| ExpenseRow {
        id: e.id.value(),
        date: e.date.format(date_format).to_string(),
        ingredient: e.ingredient_name.clone(),
        cost: e.cost.format_with_symbol(currency),
    });

    let total: Money = events.iter().map(|e| e.cost).sum();
    format!(
        "{}\nTotal: {}",
        Table::new(rows).with(Style::psql()),
        total.format_with_symbol(currency)
    )
}

/// Format grouped ledger sums; the quantity column is blank when `with_quantity` is false
pub fn format_groups(groups: &[Group], currency: &str, with_quantity: bool) -> String {
    if groups.is_empty() {
        return "Nothing to group.".to_string();
    }

    let rows = groups.iter().map(|g| GroupRow {
        key: g.key.clone(),
        count: g.count,
        quantity: if with_quantity {
            format!("{}", g.quantity)
        } else {
            String::new()
        },
        cost: g.cost.format_with_symbol(currency),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

pub fn format_expense_summary(summary: &ExpenseSummary, currency: &str) -> String {
    let mut output = String::new();
    output.push_str("Expense Summary\n");
    output.push_str(&format!("  Total spent:          {}\n", summary.total.format_with_symbol(currency)));
    output.push_str(&format!("  Purchases:            {}\n", summary.records));
    output.push_str(&format!("  Average purchase:     {}\n", summary.average.format_with_symbol(currency)));
    output.push_str(&format!("  Cheapest purchase:    {}\n", summary.min.format_with_symbol(currency)));
    output.push_str(&format!("  Priciest purchase:    {}\n", summary.max.format_with_symbol(currency)));
    output.push_str(&format!("  Distinct ingredients: {}\n", summary.distinct_ingredients));
    if let Some(most) = &summary.most_expensive {
        output.push_str(&format!(
            "  Most spent on:        {} ({})\n",
            most.key,
            most.cost.format_with_symbol(currency)
        ));
    }
    if let Some(least) = &summary.least_expensive {
        output.push_str(&format!(
            "  Least spent on:       {} ({})\n",
            least.key,
            least.cost.format_with_symbol(currency)
        ));
    }
    output
}

pub fn format_waste_tip(tip: Option<&WasteTip>) -> String {
    match tip {
        Some(tip) => format!(
            "Most common waste reason: {} ({} time{})\nTip: {}",
            tip.reason,
            tip.occurrences,
            if tip.occurrences == 1 { "" } else { "s" },
            tip.advice
        ),
        None => "No waste recorded yet. Keep it up!".to_string(),
    }
}
