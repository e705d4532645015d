//! Recipe model
//!
//! Recipes are reference data: a name plus the ordered list of ingredient
//! names it needs. In `recipes.csv` the list is one comma-separated column.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecipeId;

/// A recipe and the ingredients it requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_id: RecipeId,

    pub recipe_name: String,

    /// Required ingredient names, in the order the recipe lists them
    #[serde(with = "comma_list")]
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Create a new recipe
    pub fn new(
        recipe_id: RecipeId,
        recipe_name: impl Into<String>,
        ingredients: Vec<String>,
    ) -> Self {
        Self {
            recipe_id,
            recipe_name: recipe_name.into(),
            ingredients,
        }
    }

    /// Distinct required ingredients, first spelling kept, in recipe order
    pub fn required(&self) -> Vec<&str> {
        let mut required: Vec<&str> = Vec::with_capacity(self.ingredients.len());
        for name in &self.ingredients {
            let name = name.trim();
            if !required.iter().any(|r| r.eq_ignore_ascii_case(name)) {
                required.push(name);
            }
        }
        required
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.recipe_name, self.ingredients.join(", "))
    }
}

/// Split a comma-separated ingredient list, dropping blanks
pub fn parse_ingredient_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

mod comma_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&items.join(", "))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(super::parse_ingredient_list(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredient_list() {
        assert_eq!(
            parse_ingredient_list("Tomato, Onion ,, Garlic"),
            vec!["Tomato", "Onion", "Garlic"]
        );
        assert!(parse_ingredient_list(" , ").is_empty());
    }

    #[test]
    fn test_required_drops_repeats() {
        let recipe = Recipe::new(
            RecipeId::new(1),
            "Rice Pudding",
            vec!["Rice".into(), "rice".into(), "Milk".into(), " RICE ".into()],
        );
        assert_eq!(recipe.required(), vec!["Rice", "Milk"]);
    }

    #[test]
    fn test_json_uses_comma_list() {
        let recipe = Recipe::new(RecipeId::new(2), "Toast", vec!["Bread".into(), "Butter".into()]);
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["ingredients"], "Bread, Butter");
    }
}
