//! Waste ledger entries
//!
//! A waste event records food that was thrown away. Events are only ever
//! appended to the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::WasteId;
use super::ingredient::Unit;
use super::money::Money;

/// Why food was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WasteReason {
    Expired,
    Spoiled,
    Leftover,
    Overcooked,
    Burnt,
}

impl WasteReason {
    pub const ALL: [WasteReason; 5] = [
        Self::Expired,
        Self::Spoiled,
        Self::Leftover,
        Self::Overcooked,
        Self::Burnt,
    ];

    /// Parse a reason from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "expired" => Some(Self::Expired),
            "spoiled" => Some(Self::Spoiled),
            "leftover" | "leftovers" => Some(Self::Leftover),
            "overcooked" => Some(Self::Overcooked),
            "burnt" | "burned" => Some(Self::Burnt),
            _ => None,
        }
    }

    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|r| r.to_string().to_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Advice for cutting down this kind of waste
    pub fn tip(&self) -> &'static str {
        match self {
            Self::Expired => {
                "Check expiry dates regularly and use older items first (first in, first out)."
            }
            Self::Spoiled => "Store produce at the right temperature and keep the fridge clean.",
            Self::Leftover => "Cook smaller portions and plan meals around what is already open.",
            Self::Overcooked => "Use a timer and check food a few minutes before it should be done.",
            Self::Burnt => "Lower the heat and stay near the stove while cooking.",
        }
    }
}

impl fmt::Display for WasteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expired => write!(f, "Expired"),
            Self::Spoiled => write!(f, "Spoiled"),
            Self::Leftover => write!(f, "Leftover"),
            Self::Overcooked => write!(f, "Overcooked"),
            Self::Burnt => write!(f, "Burnt"),
        }
    }
}

/// One discarded-food event. Field order is the column order of `waste.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteEvent {
    pub id: WasteId,
    /// Name of the wasted ingredient (soft reference to the store)
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub reason: WasteReason,
    /// Estimated value of the discarded food
    pub cost: Money,
    pub date: NaiveDate,
}

impl WasteEvent {
    /// Year and month the event falls in, as `YYYY-MM`
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}
