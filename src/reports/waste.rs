//! Waste Report
//!
//! Cost of discarded food per waste reason.

use std::io::Write;

use tabled::{settings::Style, Table, Tabled};

use crate::display::report::{bar_chart, format_percentage, title_block, BAR_WIDTH};
use crate::error::{KitchenError, KitchenResult};
use crate::models::{Money, WasteEvent, WasteReason};
use crate::services::aggregate::{percentage, sort_by_cost_desc};
use crate::services::waste::{most_common_reason, waste_groups};
use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq)]
pub struct WasteLine {
    pub reason: String,
    pub cost: Money,
    pub entries: usize,
    /// Share of total waste cost, 0 to 100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WasteReport {
    /// Costliest reason first
    pub lines: Vec<WasteLine>,
    pub total_cost: Money,
    pub entries: usize,
    /// Most frequent reason and how often it occurred
    pub most_common: Option<(WasteReason, usize)>,
}

#[derive(Tabled)]
struct WasteRow {
    #[tabled(rename = "Reason")]
    reason: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Share")]
    share: String,
}

impl WasteReport {
    /// Generate the report from the waste ledger
    pub fn generate(storage: &Storage) -> KitchenResult<Self> {
        Ok(Self::from_events(&storage.waste.load_all()?))
    }

    pub fn from_events(events: &[WasteEvent]) -> Self {
        let total_cost: Money = events.iter().map(|e| e.cost).sum();

        let mut groups = waste_groups(events, |e| e.reason.to_string());
        sort_by_cost_desc(&mut groups);

        Self {
            lines: groups
                .into_iter()
                .map(|g| WasteLine {
                    percentage: percentage(g.cost, total_cost),
                    reason: g.key,
                    cost: g.cost,
                    entries: g.count,
                })
                .collect(),
            total_cost,
            entries: events.len(),
            most_common: most_common_reason(events),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = title_block("Waste Report");

        if self.lines.is_empty() {
            output.push_str("No waste recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "Total wasted: {} across {} entr{}\n\n",
            self.total_cost.format_with_symbol(currency),
            self.entries,
            if self.entries == 1 { "y" } else { "ies" }
        ));

        let rows = self.lines.iter().map(|l| WasteRow {
            reason: l.reason.clone(),
            entries: l.entries,
            cost: l.cost.format_with_symbol(currency),
            share: format_percentage(l.percentage),
        });
        output.push_str(&Table::new(rows).with(Style::psql()).to_string());
        output.push_str("\n\n");

        let chart: Vec<(String, f64, String)> = self
            .lines
            .iter()
            .map(|l| (l.reason.clone(), l.cost.as_f64(), format_percentage(l.percentage)))
            .collect();
        output.push_str(&bar_chart(&chart, BAR_WIDTH));

        if let Some((reason, _)) = self.most_common {
            output.push_str(&format!("\nTip ({}): {}\n", reason, reason.tip()));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> KitchenResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| KitchenError::Export(e.to_string());

        csv.write_record(["Reason", "Entries", "Cost", "Percentage"])
            .map_err(export_err)?;
        for line in &self.lines {
            csv.write_record([
                line.reason.clone(),
                line.entries.to_string(),
                line.cost.to_string(),
                format!("{:.2}", line.percentage),
            ])
            .map_err(export_err)?;
        }
        csv.write_record([
            "TOTAL".to_string(),
            self.entries.to_string(),
            self.total_cost.to_string(),
            if self.lines.is_empty() { "0.00" } else { "100.00" }.to_string(),
        ])
        .map_err(export_err)?;

        csv.flush().map_err(|e| KitchenError::Export(e.to_string()))
    }
}
