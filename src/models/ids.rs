//! Strongly-typed ID wrappers for all entity types
//!
//! Every table numbers its rows from 1 upward. Newtype wrappers keep an
//! ingredient id from being passed where a waste entry id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// The id given to the first row of an empty table
            pub const FIRST: Self = Self(1);

            /// Wrap a raw row number
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Get the raw row number
            pub const fn value(&self) -> u32 {
                self.0
            }

            /// The id that follows this one
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }

            /// The next free id after the largest of `ids`
            pub fn next_after<I: IntoIterator<Item = Self>>(ids: I) -> Self {
                ids.into_iter()
                    .max()
                    .map(|max| max.next())
                    .unwrap_or(Self::FIRST)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(IngredientId, "ing-");
define_id!(RecipeId, "rec-");
define_id!(WasteId, "wst-");
define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_empty_starts_at_one() {
        let id = IngredientId::next_after(Vec::new());
        assert_eq!(id, IngredientId::FIRST);
        assert_eq!(id.value(), 1);
    }

    #[test]
    fn test_next_after_uses_max_not_count() {
        let ids = vec![IngredientId::new(1), IngredientId::new(7), IngredientId::new(3)];
        assert_eq!(IngredientId::next_after(ids), IngredientId::new(8));
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!("12".parse::<WasteId>().unwrap(), WasteId::new(12));
        assert_eq!("wst-12".parse::<WasteId>().unwrap(), WasteId::new(12));
        assert!("abc".parse::<WasteId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = RecipeId::new(4);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "4");
        let back: RecipeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
