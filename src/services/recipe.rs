//! Recipe service
//!
//! Scores every recipe by the share of its required ingredients that are in
//! stock and ranks them best first.

use tracing::{debug, info};

use crate::audit::EntityType;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{normalize_name, Recipe};
use crate::storage::Storage;

use super::ingredient::IngredientService;

/// A recipe together with its match score
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    /// Fraction of required ingredients in stock, 0.0 to 1.0
    pub score: f64,
    /// Required ingredients that are not in stock, in recipe order
    pub missing: Vec<String>,
}

impl RecipeMatch {
    pub fn is_makeable(&self) -> bool {
        !self.recipe.ingredients.is_empty() && self.missing.is_empty()
    }

    /// Score as a whole percentage
    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }
}

/// Fraction of `recipe`'s required ingredients found in `available`
///
/// A recipe that requires nothing scores 0.
pub fn score(recipe: &Recipe, available: &[String]) -> f64 {
    let required = recipe.required();
    if required.is_empty() {
        return 0.0;
    }
    let matched = required
        .iter()
        .filter(|needed| contains_name(available, needed))
        .count();
    matched as f64 / required.len() as f64
}

/// Required ingredients of `recipe` absent from `available`
pub fn missing_for(recipe: &Recipe, available: &[String]) -> Vec<String> {
    recipe
        .required()
        .into_iter()
        .filter(|needed| !contains_name(available, needed))
        .map(str::to_string)
        .collect()
}

/// Rank recipes by score, best first
///
/// The sort is stable, so recipes with equal scores keep their table order.
pub fn suggest(available: &[String], recipes: &[Recipe]) -> Vec<RecipeMatch> {
    let mut matches: Vec<RecipeMatch> = recipes
        .iter()
        .map(|recipe| RecipeMatch {
            score: score(recipe, available),
            missing: missing_for(recipe, available),
            recipe: recipe.clone(),
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

fn contains_name(names: &[String], name: &str) -> bool {
    let name = name.trim();
    names.iter().any(|n| n.trim().eq_ignore_ascii_case(name))
}

/// Service for recipe suggestions
pub struct RecipeService<'a> {
    storage: &'a Storage,
}

impl<'a> RecipeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All recipes in table order
    pub fn list(&self) -> KitchenResult<Vec<Recipe>> {
        self.storage.recipes.load_all()
    }

    pub fn get_by_name(&self, name: &str) -> KitchenResult<Recipe> {
        self.storage
            .recipes
            .get_by_name(name)?
            .ok_or_else(|| KitchenError::recipe_not_found(name.trim()))
    }

    /// Rank every recipe against the current stock
    pub fn suggest(&self) -> KitchenResult<Vec<RecipeMatch>> {
        let available = IngredientService::new(self.storage).available_names()?;
        let recipes = self.list()?;
        debug!(available = available.len(), recipes = recipes.len(), "matching recipes");
        Ok(suggest(&available, &recipes))
    }

    /// Recipes whose every ingredient is in stock
    pub fn makeable(&self) -> KitchenResult<Vec<RecipeMatch>> {
        Ok(self
            .suggest()?
            .into_iter()
            .filter(RecipeMatch::is_makeable)
            .collect())
    }

    /// Score and missing ingredients for one named recipe
    pub fn check(&self, name: &str) -> KitchenResult<RecipeMatch> {
        let recipe = self.get_by_name(name)?;
        let available = IngredientService::new(self.storage).available_names()?;
        Ok(RecipeMatch {
            score: score(&recipe, &available),
            missing: missing_for(&recipe, &available),
            recipe,
        })
    }

    /// Append a new recipe to the recipe book
    pub fn add_recipe(&self, name: &str, ingredients: &[String]) -> KitchenResult<Recipe> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(KitchenError::Validation("Recipe name cannot be empty".into()));
        }

        let mut required: Vec<String> = Vec::new();
        for ingredient in ingredients.iter().map(|i| normalize_name(i)) {
            if !ingredient.is_empty() && !contains_name(&required, &ingredient) {
                required.push(ingredient);
            }
        }
        if required.is_empty() {
            return Err(KitchenError::Validation(
                "A recipe needs at least one ingredient".into(),
            ));
        }

        if self.storage.recipes.name_exists(&name)? {
            return Err(KitchenError::Duplicate {
                entity_type: "Recipe",
                identifier: name,
            });
        }

        let recipe = Recipe::new(self.storage.recipes.next_id()?, name, required);
        self.storage.recipes.append(&recipe)?;

        self.storage.log_create(
            EntityType::Recipe,
            recipe.recipe_id.to_string(),
            Some(recipe.recipe_name.clone()),
            &recipe,
        )?;

        info!(id = %recipe.recipe_id, name = %recipe.recipe_name, "recipe added");
        Ok(recipe)
    }
}
