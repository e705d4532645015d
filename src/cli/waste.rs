//! Waste ledger CLI commands

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{format_groups, format_waste_list, format_waste_tip};
use crate::error::KitchenResult;
use crate::services::{RecordWasteInput, WasteService};
use crate::storage::Storage;

use super::parse::{parse_cost, parse_date, parse_positive, parse_reason, parse_unit};

/// Keys the waste ledger can be grouped by
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WasteGrouping {
    Ingredient,
    Reason,
    Month,
}

/// Waste subcommands
#[derive(Subcommand)]
pub enum WasteCommands {
    /// Record discarded food
    Add {
        /// Ingredient name
        ingredient: String,
        /// Quantity thrown away
        quantity: String,
        /// Unit (g, kg, ml, l, pieces, slices)
        unit: String,
        /// Reason (expired, spoiled, leftover, overcooked, burnt)
        #[arg(short, long)]
        reason: String,
        /// Estimated value of the discarded food
        #[arg(short, long, default_value = "0")]
        cost: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the waste ledger
    List,
    /// Group the ledger with totals per group
    Group {
        /// Grouping key
        #[arg(value_enum, default_value = "reason")]
        by: WasteGrouping,
    },
    /// Advice based on the most common waste reason
    Tip,
}

/// Handle a waste command
pub fn handle_waste_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: WasteCommands,
) -> KitchenResult<()> {
    let service = WasteService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        WasteCommands::Add {
            ingredient,
            quantity,
            unit,
            reason,
            cost,
            date,
        } => {
            let input = RecordWasteInput {
                ingredient_name: ingredient,
                quantity: parse_positive(&quantity)?,
                unit: parse_unit(&unit)?,
                reason: parse_reason(&reason)?,
                cost: parse_cost(&cost)?,
                date: match date {
                    Some(d) => parse_date(&d)?,
                    None => today,
                },
            };

            let event = service.record(input)?;
            println!(
                "Recorded waste #{}: {} {} of {} ({})",
                event.id, event.quantity, event.unit, event.ingredient_name, event.reason
            );
        }

        WasteCommands::List => {
            println!(
                "{}",
                format_waste_list(&service.list()?, currency, &settings.date_format)
            );
        }

        WasteCommands::Group { by } => {
            let groups = match by {
                WasteGrouping::Ingredient => service.by_ingredient()?,
                WasteGrouping::Reason => service.by_reason()?,
                WasteGrouping::Month => service.by_month()?,
            };
            println!("{}", format_groups(&groups, currency, true));
            println!(
                "Total: {}",
                service.total_cost()?.format_with_symbol(currency)
            );
        }

        WasteCommands::Tip => {
            println!("{}", format_waste_tip(service.tip()?.as_ref()));
        }
    }

    Ok(())
}
