//! Ingredient CLI commands
//!
//! Implements CLI commands for the ingredient store.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_ingredient_details, format_ingredient_list};
use crate::error::{KitchenError, KitchenResult};
use crate::services::{CreateIngredientInput, IngredientFilter, IngredientService};
use crate::storage::Storage;

use super::parse::{
    parse_cost, parse_date, parse_number, parse_positive, parse_storage, parse_unit,
    parse_whole_days,
};

/// Ingredient subcommands
#[derive(Subcommand)]
pub enum IngredientCommands {
    /// Add an ingredient to the store
    Add {
        /// Ingredient name
        name: String,
        /// Quantity (e.g., "500" or "1.5")
        quantity: String,
        /// Unit (g, kg, ml, l, pieces, slices)
        unit: String,
        /// Expiry date (YYYY-MM-DD)
        #[arg(short, long)]
        expires: String,
        /// Storage type (fridge, pantry, freezer)
        #[arg(short, long, default_value = "pantry")]
        storage: String,
        /// Purchase cost (e.g., "40" or "12.50")
        #[arg(short, long, default_value = "0")]
        cost: String,
    },
    /// List ingredients
    List {
        /// Only ingredients kept here (fridge, pantry, freezer)
        #[arg(short, long)]
        storage: Option<String>,
        /// Only ingredients expiring within this many days
        #[arg(short, long)]
        expiring: Option<String>,
        /// Only names containing this text
        #[arg(long)]
        search: Option<String>,
        /// Sort by expiry date, soonest first
        #[arg(long)]
        by_expiry: bool,
    },
    /// Show ingredient details
    Show {
        /// Ingredient name or ID
        ingredient: String,
    },
    /// Set the quantity of an ingredient
    Update {
        /// Ingredient name or ID
        ingredient: String,
        /// New quantity
        quantity: String,
    },
    /// Change the quantity of an ingredient by an amount (negative to use up)
    Adjust {
        /// Ingredient name or ID
        ingredient: String,
        /// Amount to add, e.g. "-200"
        #[arg(allow_hyphen_values = true)]
        delta: String,
    },
    /// Remove an ingredient from the store
    Remove {
        /// Ingredient name or ID
        ingredient: String,
    },
}

/// Handle an ingredient command
pub fn handle_ingredient_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: IngredientCommands,
) -> KitchenResult<()> {
    let service = IngredientService::new(storage);
    let currency = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        IngredientCommands::Add {
            name,
            quantity,
            unit,
            expires,
            storage: storage_type,
            cost,
        } => {
            let input = CreateIngredientInput {
                name,
                quantity: parse_positive(&quantity)?,
                unit: parse_unit(&unit)?,
                expiry_date: parse_date(&expires)?,
                storage_type: parse_storage(&storage_type)?,
                cost: parse_cost(&cost)?,
            };

            let ingredient = service.add(input, today)?;
            println!("Added ingredient: {}", ingredient.name);
            print!(
                "{}",
                format_ingredient_details(&ingredient, today, currency, date_format)
            );
        }

        IngredientCommands::List {
            storage: storage_type,
            expiring,
            search,
            by_expiry,
        } => {
            let mut filter = IngredientFilter::new();
            if let Some(s) = storage_type {
                filter = filter.storage(parse_storage(&s)?);
            }
            if let Some(days) = expiring {
                filter = filter.expiring_within(i64::from(parse_whole_days(&days)?));
            }
            if let Some(text) = search {
                filter = filter.search(text);
            }
            if by_expiry {
                filter = filter.by_expiry();
            }

            let ingredients = service.list(&filter, today)?;
            println!(
                "{}",
                format_ingredient_list(&ingredients, today, currency, date_format)
            );
        }

        IngredientCommands::Show { ingredient } => {
            let found = service
                .find(&ingredient)?
                .ok_or_else(|| KitchenError::ingredient_not_found(&ingredient))?;
            print!(
                "{}",
                format_ingredient_details(&found, today, currency, date_format)
            );
        }

        IngredientCommands::Update {
            ingredient,
            quantity,
        } => {
            let found = service
                .find(&ingredient)?
                .ok_or_else(|| KitchenError::ingredient_not_found(&ingredient))?;

            let updated = service.update_quantity(found.id, parse_number(&quantity)?)?;
            println!(
                "Updated {}: {} -> {} {}",
                updated.name, found.quantity, updated.quantity, updated.unit
            );
        }

        IngredientCommands::Adjust { ingredient, delta } => {
            let found = service
                .find(&ingredient)?
                .ok_or_else(|| KitchenError::ingredient_not_found(&ingredient))?;

            let updated = service.adjust_quantity(found.id, parse_number(&delta)?)?;
            println!(
                "Updated {}: {} -> {} {}",
                updated.name, found.quantity, updated.quantity, updated.unit
            );
        }

        IngredientCommands::Remove { ingredient } => {
            let found = service
                .find(&ingredient)?
                .ok_or_else(|| KitchenError::ingredient_not_found(&ingredient))?;

            let removed = service.remove(found.id)?;
            println!("Removed ingredient: {} (ID {})", removed.name, removed.id);
        }
    }

    Ok(())
}
