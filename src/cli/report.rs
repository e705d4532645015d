//! CLI commands for reports
//!
//! Prints reports to the terminal or exports them as CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::error::{KitchenError, KitchenResult};
use crate::reports::{Dashboard, ExpenseReport, InventoryReport, WasteReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Quantity per ingredient and the best-stocked items
    Inventory {
        /// Export to CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Spending per ingredient
    Expenses {
        /// Export to CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Waste cost per reason
    Waste {
        /// Export to CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Store and ledger overview
    #[command(alias = "overview")]
    Dashboard {
        /// Export to CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> KitchenResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Inventory { csv } => {
            let report = InventoryReport::generate(storage)?;
            match csv {
                Some(path) => export(&path, |w| report.export_csv(w))?,
                None => println!("{}", report.format_terminal(currency)),
            }
        }
        ReportCommands::Expenses { csv } => {
            let report = ExpenseReport::generate(storage)?;
            match csv {
                Some(path) => export(&path, |w| report.export_csv(w))?,
                None => println!("{}", report.format_terminal(currency)),
            }
        }
        ReportCommands::Waste { csv } => {
            let report = WasteReport::generate(storage)?;
            match csv {
                Some(path) => export(&path, |w| report.export_csv(w))?,
                None => println!("{}", report.format_terminal(currency)),
            }
        }
        ReportCommands::Dashboard { csv } => {
            let report = Dashboard::generate(storage, today)?;
            match csv {
                Some(path) => export(&path, |w| report.export_csv(w))?,
                None => println!("{}", report.format_terminal(currency)),
            }
        }
    }

    Ok(())
}

fn export<F>(path: &Path, write: F) -> KitchenResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> KitchenResult<()>,
{
    write_csv_file(path, write)?;
    println!("Report exported to: {}", path.display());
    Ok(())
}

/// Create `path` and hand a buffered writer for it to `write`
pub fn write_csv_file<F>(path: &Path, write: F) -> KitchenResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> KitchenResult<()>,
{
    let file = File::create(path).map_err(|e| {
        KitchenError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer
        .flush()
        .map_err(|e| KitchenError::Export(e.to_string()))
}
