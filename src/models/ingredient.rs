//! Ingredient model
//!
//! Represents a stocked ingredient together with its measuring unit and the
//! place it is kept.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IngredientId;
use super::money::Money;

/// Measuring unit for quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Grams
    G,
    /// Kilograms
    Kg,
    /// Millilitres
    Ml,
    /// Litres
    L,
    Pieces,
    Slices,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::G,
        Unit::Kg,
        Unit::Ml,
        Unit::L,
        Unit::Pieces,
        Unit::Slices,
    ];

    /// Parse a unit from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(Self::G),
            "kg" => Some(Self::Kg),
            "ml" => Some(Self::Ml),
            "l" => Some(Self::L),
            "pieces" | "piece" | "pcs" => Some(Self::Pieces),
            "slices" | "slice" => Some(Self::Slices),
            _ => None,
        }
    }

    /// Slash-separated list of accepted units, for prompts
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|u| u.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::G => write!(f, "g"),
            Self::Kg => write!(f, "kg"),
            Self::Ml => write!(f, "ml"),
            Self::L => write!(f, "l"),
            Self::Pieces => write!(f, "pieces"),
            Self::Slices => write!(f, "slices"),
        }
    }
}

/// Where an ingredient is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Fridge,
    Pantry,
    Freezer,
}

impl StorageType {
    pub const ALL: [StorageType; 3] = [StorageType::Fridge, StorageType::Pantry, StorageType::Freezer];

    /// Parse storage type from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fridge" | "refrigerator" => Some(Self::Fridge),
            "pantry" => Some(Self::Pantry),
            "freezer" => Some(Self::Freezer),
            _ => None,
        }
    }

    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fridge => write!(f, "fridge"),
            Self::Pantry => write!(f, "pantry"),
            Self::Freezer => write!(f, "freezer"),
        }
    }
}

/// A stocked ingredient. Field order is the column order of `ingredients.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier
    pub id: IngredientId,

    /// Display name, Title Case
    pub name: String,

    /// Amount on hand, never negative
    pub quantity: f64,

    pub unit: Unit,

    pub expiry_date: NaiveDate,

    pub storage_type: StorageType,

    /// Day the ingredient was entered into the store
    pub date_added: NaiveDate,

    /// Purchase cost
    pub cost: Money,
}

impl Ingredient {
    /// Number of days from `today` until the expiry date (negative once past)
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    /// Number of days since the ingredient was added
    pub fn days_since_purchase(&self, today: NaiveDate) -> i64 {
        (today - self.date_added).num_days()
    }

    /// Whether the ingredient counts as available for cooking
    pub fn in_stock(&self) -> bool {
        self.quantity > 0.0
    }

    /// Validate the ingredient
    pub fn validate(&self) -> Result<(), IngredientValidationError> {
        if self.name.trim().is_empty() {
            return Err(IngredientValidationError::EmptyName);
        }

        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(IngredientValidationError::NegativeQuantity(self.quantity));
        }

        if self.cost.is_negative() {
            return Err(IngredientValidationError::NegativeCost(self.cost));
        }

        Ok(())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.quantity, self.unit)
    }
}

/// Validation errors for ingredients
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientValidationError {
    EmptyName,
    NegativeQuantity(f64),
    NegativeCost(Money),
}

impl fmt::Display for IngredientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Ingredient name cannot be empty"),
            Self::NegativeQuantity(q) => write!(f, "Quantity cannot be negative: {}", q),
            Self::NegativeCost(c) => write!(f, "Cost cannot be negative: {}", c),
        }
    }
}

impl std::error::Error for IngredientValidationError {}

/// Normalize a user-entered name to trimmed Title Case
///
/// `"  green   beans "` becomes `"Green Beans"`.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomato() -> Ingredient {
        Ingredient {
            id: IngredientId::new(1),
            name: "Tomato".into(),
            quantity: 500.0,
            unit: Unit::G,
            expiry_date: NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
            storage_type: StorageType::Fridge,
            date_added: NaiveDate::from_ymd_opt(2025, 8, 18).unwrap(),
            cost: Money::from_cents(4000),
        }
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!(Unit::parse("KG"), Some(Unit::Kg));
        assert_eq!(Unit::parse(" pieces "), Some(Unit::Pieces));
        assert_eq!(Unit::parse("cups"), None);
        assert_eq!(Unit::choices(), "g/kg/ml/l/pieces/slices");
    }

    #[test]
    fn test_storage_parse() {
        assert_eq!(StorageType::parse("Fridge"), Some(StorageType::Fridge));
        assert_eq!(StorageType::parse("cellar"), None);
    }

    #[test]
    fn test_day_arithmetic() {
        let t = tomato();
        let today = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
        assert_eq!(t.days_until_expiry(today), 5);
        assert_eq!(t.days_since_purchase(today), 2);
    }

    #[test]
    fn test_validate() {
        let mut t = tomato();
        assert!(t.validate().is_ok());

        t.quantity = -1.0;
        assert_eq!(
            t.validate(),
            Err(IngredientValidationError::NegativeQuantity(-1.0))
        );

        t.quantity = 0.0;
        assert!(t.validate().is_ok());
        assert!(!t.in_stock());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  tomato "), "Tomato");
        assert_eq!(normalize_name("green   BEANS"), "Green Beans");
        assert_eq!(normalize_name("   "), "");
    }
}
