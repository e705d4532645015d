//! Expense ledger CLI commands

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{format_expense_list, format_expense_summary, format_groups};
use crate::error::KitchenResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::parse::{parse_cost, parse_date};

/// Keys the expense ledger can be grouped by
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExpenseGrouping {
    Ingredient,
    Month,
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a purchase
    Add {
        /// Ingredient name
        ingredient: String,
        /// Amount paid (e.g., "80" or "28.50")
        cost: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the expense ledger
    List,
    /// Group spending with totals per group
    Group {
        /// Grouping key
        #[arg(value_enum, default_value = "ingredient")]
        by: ExpenseGrouping,
    },
    /// Totals, averages and extremes
    Summary,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> KitchenResult<()> {
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            ingredient,
            cost,
            date,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };
            let event = service.record(&ingredient, parse_cost(&cost)?, date)?;
            println!(
                "Recorded expense #{}: {} for {}",
                event.id,
                event.cost.format_with_symbol(currency),
                event.ingredient_name
            );
        }

        ExpenseCommands::List => {
            println!(
                "{}",
                format_expense_list(&service.list()?, currency, &settings.date_format)
            );
        }

        ExpenseCommands::Group { by } => {
            let groups = match by {
                ExpenseGrouping::Ingredient => service.by_ingredient()?,
                ExpenseGrouping::Month => service.by_month()?,
            };
            println!("{}", format_groups(&groups, currency, false));
            println!("Total: {}", service.total()?.format_with_symbol(currency));
        }

        ExpenseCommands::Summary => match service.summary()? {
            Some(summary) => print!("{}", format_expense_summary(&summary, currency)),
            None => println!("No expenses recorded."),
        },
    }

    Ok(())
}
