//! Recipe CLI commands

use clap::Subcommand;

use crate::display::{format_match_details, format_matches, format_recipe_list};
use crate::error::KitchenResult;
use crate::models::recipe::parse_ingredient_list;
use crate::services::RecipeService;
use crate::storage::Storage;

/// Recipe subcommands
#[derive(Subcommand)]
pub enum RecipeCommands {
    /// List all recipes
    List,
    /// Rank recipes by how many of their ingredients are in stock
    Suggest {
        /// Only recipes that can be cooked right now
        #[arg(short, long)]
        makeable: bool,
        /// Show the top N recipes only
        #[arg(long)]
        top: Option<usize>,
    },
    /// Show what a recipe still needs
    Check {
        /// Recipe name
        name: String,
    },
    /// Add a recipe to the recipe book
    Add {
        /// Recipe name
        name: String,
        /// Required ingredients, comma separated (e.g., "Rice, Milk")
        ingredients: String,
    },
}

/// Handle a recipe command
pub fn handle_recipe_command(storage: &Storage, cmd: RecipeCommands) -> KitchenResult<()> {
    let service = RecipeService::new(storage);

    match cmd {
        RecipeCommands::List => {
            println!("{}", format_recipe_list(&service.list()?));
        }

        RecipeCommands::Suggest { makeable, top } => {
            let mut matches = if makeable {
                service.makeable()?
            } else {
                service.suggest()?
            };
            if let Some(n) = top {
                matches.truncate(n);
            }

            if makeable && matches.is_empty() {
                println!("Nothing can be cooked with the current stock.");
            } else {
                println!("{}", format_matches(&matches));
            }
        }

        RecipeCommands::Check { name } => {
            print!("{}", format_match_details(&service.check(&name)?));
        }

        RecipeCommands::Add { name, ingredients } => {
            let recipe = service.add_recipe(&name, &parse_ingredient_list(&ingredients))?;
            println!("Added recipe: {}", recipe);
            println!("  ID: {}", recipe.recipe_id);
        }
    }

    Ok(())
}
