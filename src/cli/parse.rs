//! Parsing of user-typed values
//!
//! Shared by the subcommands and the interactive menu. Every failure is a
//! `KitchenError::Validation` so the menu knows to ask again.

use chrono::NaiveDate;

use crate::error::{KitchenError, KitchenResult};
use crate::models::{Money, StorageType, Unit, WasteReason};

/// Input format for dates, independent of the display format setting
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> KitchenResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        KitchenError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s.trim()))
    })
}

/// A finite decimal number
pub fn parse_number(s: &str) -> KitchenResult<f64> {
    match s.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(KitchenError::Validation(format!(
            "Invalid number: '{}'",
            s.trim()
        ))),
    }
}

/// A number strictly greater than zero
pub fn parse_positive(s: &str) -> KitchenResult<f64> {
    let n = parse_number(s)?;
    if n <= 0.0 {
        return Err(KitchenError::Validation(format!(
            "Quantity must be greater than zero, got {}",
            n
        )));
    }
    Ok(n)
}

pub fn parse_whole_days(s: &str) -> KitchenResult<u32> {
    s.trim().parse::<u32>().map_err(|_| {
        KitchenError::Validation(format!(
            "Invalid number of days: '{}'. Use a whole number, 0 or more",
            s.trim()
        ))
    })
}

/// A cost; negative amounts are rejected
pub fn parse_cost(s: &str) -> KitchenResult<Money> {
    let cost = Money::parse(s).map_err(|e| {
        KitchenError::Validation(format!("Invalid amount: '{}'. {}", s.trim(), e))
    })?;
    if cost.is_negative() {
        return Err(KitchenError::Validation(format!(
            "Cost cannot be negative: {}",
            cost
        )));
    }
    Ok(cost)
}

pub fn parse_unit(s: &str) -> KitchenResult<Unit> {
    Unit::parse(s).ok_or_else(|| {
        KitchenError::Validation(format!(
            "Unknown unit: '{}'. Valid units: {}",
            s.trim(),
            Unit::choices()
        ))
    })
}

pub fn parse_storage(s: &str) -> KitchenResult<StorageType> {
    StorageType::parse(s).ok_or_else(|| {
        KitchenError::Validation(format!(
            "Unknown storage type: '{}'. Valid types: {}",
            s.trim(),
            StorageType::choices()
        ))
    })
}

pub fn parse_reason(s: &str) -> KitchenResult<WasteReason> {
    WasteReason::parse(s).ok_or_else(|| {
        KitchenError::Validation(format!(
            "Unknown waste reason: '{}'. Valid reasons: {}",
            s.trim(),
            WasteReason::choices()
        ))
    })
}

/// A non-empty name
pub fn parse_name(s: &str) -> KitchenResult<String> {
    let name = s.trim();
    if name.is_empty() {
        return Err(KitchenError::Validation("Name cannot be empty".into()));
    }
    Ok(name.to_string())
}
