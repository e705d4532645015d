//! Waste service
//!
//! Records discarded food in the append-only waste ledger and aggregates it.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{normalize_name, Money, Unit, WasteEvent, WasteReason};
use crate::storage::Storage;

use super::aggregate::{group_by, Group};

/// Input for recording a waste event
#[derive(Debug, Clone)]
pub struct RecordWasteInput {
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub reason: WasteReason,
    pub cost: Money,
    pub date: NaiveDate,
}

/// Service for the waste ledger
pub struct WasteService<'a> {
    storage: &'a Storage,
}

impl<'a> WasteService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append a waste event to the ledger
    pub fn record(&self, input: RecordWasteInput) -> KitchenResult<WasteEvent> {
        let ingredient_name = normalize_name(&input.ingredient_name);
        if ingredient_name.is_empty() {
            return Err(KitchenError::Validation(
                "Ingredient name cannot be empty".into(),
            ));
        }
        if !input.quantity.is_finite() || input.quantity <= 0.0 {
            return Err(KitchenError::Validation(format!(
                "Wasted quantity must be positive, got {}",
                input.quantity
            )));
        }
        if input.cost.is_negative() {
            return Err(KitchenError::Validation(format!(
                "Cost cannot be negative: {}",
                input.cost
            )));
        }

        let event = WasteEvent {
            id: self.storage.waste.next_id()?,
            ingredient_name,
            quantity: input.quantity,
            unit: input.unit,
            reason: input.reason,
            cost: input.cost,
            date: input.date,
        };

        self.storage.waste.append(&event)?;

        self.storage.log_create(
            EntityType::WasteEvent,
            event.id.to_string(),
            Some(event.ingredient_name.clone()),
            &event,
        )?;

        info!(id = %event.id, ingredient = %event.ingredient_name, reason = %event.reason, "waste recorded");
        Ok(event)
    }

    /// Every waste event, oldest first
    pub fn list(&self) -> KitchenResult<Vec<WasteEvent>> {
        self.storage.waste.load_all()
    }

    /// Total cost of all waste
    pub fn total_cost(&self) -> KitchenResult<Money> {
        Ok(self.list()?.iter().map(|e| e.cost).sum())
    }

    pub fn by_ingredient(&self) -> KitchenResult<Vec<Group>> {
        Ok(waste_groups(&self.list()?, |e| e.ingredient_name.clone()))
    }

    pub fn by_reason(&self) -> KitchenResult<Vec<Group>> {
        Ok(waste_groups(&self.list()?, |e| e.reason.to_string()))
    }

    /// Groups keyed by `YYYY-MM`
    pub fn by_month(&self) -> KitchenResult<Vec<Group>> {
        Ok(waste_groups(&self.list()?, WasteEvent::month))
    }

    /// The most frequent waste reason, with advice for reducing it
    ///
    /// `None` when nothing has been wasted yet.
    pub fn tip(&self) -> KitchenResult<Option<WasteTip>> {
        Ok(most_common_reason(&self.list()?).map(|(reason, count)| WasteTip {
            reason,
            occurrences: count,
            advice: reason.tip(),
        }))
    }
}

/// Advice for the most common waste reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasteTip {
    pub reason: WasteReason,
    pub occurrences: usize,
    pub advice: &'static str,
}

/// Group waste events, summing quantity and cost
pub fn waste_groups<F>(events: &[WasteEvent], key: F) -> Vec<Group>
where
    F: Fn(&WasteEvent) -> String,
{
    group_by(events, key, |e| (e.quantity, e.cost))
}

/// Most frequent reason; ties go to the reason listed first in `WasteReason::ALL`
pub fn most_common_reason(events: &[WasteEvent]) -> Option<(WasteReason, usize)> {
    WasteReason::ALL
        .iter()
        .map(|&reason| (reason, events.iter().filter(|e| e.reason == reason).count()))
        .filter(|&(_, count)| count > 0)
        .fold(None, |best: Option<(WasteReason, usize)>, candidate| match best {
            Some(b) if b.1 >= candidate.1 => Some(b),
            _ => Some(candidate),
        })
}
