//! Waste ledger repository (waste.csv)

use std::path::PathBuf;

use tracing::debug;

use crate::error::KitchenResult;
use crate::models::{WasteEvent, WasteId};

use super::csv_io::{append_row, read_table};

/// Column order of waste.csv
pub const WASTE_HEADERS: [&str; 7] = [
    "id",
    "ingredient_name",
    "quantity",
    "unit",
    "reason",
    "cost",
    "date",
];

/// Append-only repository for waste events
pub struct WasteRepository {
    path: PathBuf,
}

impl WasteRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load every event in the order it was recorded
    pub fn load_all(&self) -> KitchenResult<Vec<WasteEvent>> {
        let rows: Vec<WasteEvent> = read_table(&self.path)?;
        debug!(count = rows.len(), "loaded waste ledger");
        Ok(rows)
    }

    pub fn next_id(&self) -> KitchenResult<WasteId> {
        Ok(WasteId::next_after(self.load_all()?.iter().map(|e| e.id)))
    }

    /// Append one event as a single CSV row
    pub fn append(&self, event: &WasteEvent) -> KitchenResult<()> {
        append_row(&self.path, &WASTE_HEADERS, event)
    }

    pub fn count(&self) -> KitchenResult<usize> {
        Ok(self.load_all()?.len())
    }
}
