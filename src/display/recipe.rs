//! Recipe display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::Recipe;
use crate::services::RecipeMatch;

use super::report::format_percentage;

#[derive(Tabled)]
struct RecipeRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Recipe")]
    name: String,
    #[tabled(rename = "Ingredients")]
    ingredients: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Recipe")]
    name: String,
    #[tabled(rename = "Match")]
    score: String,
    #[tabled(rename = "Missing")]
    missing: String,
}

/// Format the recipe catalogue as a table
pub fn format_recipe_list(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes found.".to_string();
    }

    let rows = recipes.iter().map(|r| RecipeRow {
        id: r.recipe_id.value(),
        name: r.recipe_name.clone(),
        ingredients: r.ingredients.join(", "),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format ranked recipe matches, best first
pub fn format_matches(matches: &[RecipeMatch]) -> String {
    if matches.is_empty() {
        return "No recipes to match against.".to_string();
    }

    let rows = matches.iter().map(|m| MatchRow {
        name: m.recipe.recipe_name.clone(),
        score: format_percentage(m.percent()),
        missing: if m.missing.is_empty() {
            "-".to_string()
        } else {
            m.missing.join(", ")
        },
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format the verdict for a single recipe
pub fn format_match_details(m: &RecipeMatch) -> String {
    let mut output = format!(
        "{}: {} of ingredients in stock\n",
        m.recipe.recipe_name,
        format_percentage(m.percent())
    );
    output.push_str(&format!("  Needs: {}\n", m.recipe.ingredients.join(", ")));
    if m.is_makeable() {
        output.push_str("  You can cook this now.\n");
    } else {
        output.push_str(&format!("  Missing: {}\n", m.missing.join(", ")));
    }
    output
}
