//! Ingredient display formatting
//!
//! Formats the ingredient store for terminal output in table and detail views.

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::models::{status_for, Ingredient};

#[derive(Tabled)]
struct IngredientRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Expires")]
    expiry_date: String,
    #[tabled(rename = "Days Left")]
    days_left: i64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Storage")]
    storage: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// Format a list of ingredients as a table
pub fn format_ingredient_list(
    ingredients: &[Ingredient],
    today: NaiveDate,
    currency: &str,
    date_format: &str,
) -> String {
    if ingredients.is_empty() {
        return "No ingredients found.".to_string();
    }

    let rows = ingredients.iter().map(|i| IngredientRow {
        id: i.id.value(),
        name: i.name.clone(),
        quantity: format_quantity(i.quantity, &i.unit.to_string()),
        expiry_date: i.expiry_date.format(date_format).to_string(),
        days_left: i.days_until_expiry(today),
        status: status_for(today, i.expiry_date).to_string(),
        storage: i.storage_type.to_string(),
        cost: i.cost.format_with_symbol(currency),
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();

    let total: crate::models::Money = ingredients.iter().map(|i| i.cost).sum();
    output.push_str(&format!(
        "\n{} ingredient(s), total value {}",
        ingredients.len(),
        total.format_with_symbol(currency)
    ));
    output
}

/// Format a single ingredient's details
pub fn format_ingredient_details(
    ingredient: &Ingredient,
    today: NaiveDate,
    currency: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Ingredient: {}\n", ingredient.name));
    output.push_str(&format!("  ID:         {}\n", ingredient.id));
    output.push_str(&format!(
        "  Quantity:   {}\n",
        format_quantity(ingredient.quantity, &ingredient.unit.to_string())
    ));
    output.push_str(&format!("  Storage:    {}\n", ingredient.storage_type));
    output.push_str(&format!(
        "  Expires:    {} ({} days, {})\n",
        ingredient.expiry_date.format(date_format),
        ingredient.days_until_expiry(today),
        status_for(today, ingredient.expiry_date)
    ));
    output.push_str(&format!(
        "  Added:      {}\n",
        ingredient.date_added.format(date_format)
    ));
    output.push_str(&format!(
        "  Cost:       {}\n",
        ingredient.cost.format_with_symbol(currency)
    ));
    output
}

/// Quantity without a trailing `.0` for whole numbers
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0} {}", quantity, unit)
    } else {
        format!("{} {}", quantity, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientId, Money, StorageType, Unit};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()
    }

    fn tomato() -> Ingredient {
        Ingredient {
            id: IngredientId::new(1),
            name: "Tomato".into(),
            quantity: 500.0,
            unit: Unit::G,
            expiry_date: NaiveDate::from_ymd_opt(2025, 8, 22).unwrap(),
            storage_type: StorageType::Fridge,
            date_added: today(),
            cost: Money::from_cents(4000),
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_ingredient_list(&[], today(), "₹", "%Y-%m-%d"),
            "No ingredients found."
        );
    }

    #[test]
    fn test_list_contains_fields() {
        let output = format_ingredient_list(&[tomato()], today(), "₹", "%Y-%m-%d");

        assert!(output.contains("Tomato"));
        assert!(output.contains("500 g"));
        assert!(output.contains("2025-08-22"));
        assert!(output.contains("Expire Soon"));
        assert!(output.contains("₹40.00"));
        assert!(output.contains("1 ingredient(s)"));
    }

    #[test]
    fn test_details() {
        let output = format_ingredient_details(&tomato(), today(), "$", "%d/%m/%Y");
        assert!(output.contains("22/08/2025 (2 days, Expire Soon)"));
        assert!(output.contains("$40.00"));
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0, "kg"), "2 kg");
        assert_eq!(format_quantity(0.25, "l"), "0.25 l");
    }
}
