//! Storage initialization
//!
//! Handles first-run setup: the data directory plus starter recipes and
//! expiry training data. Existing tables are never overwritten.

use tracing::info;

use crate::config::paths::KitchenPaths;
use crate::error::KitchenResult;
use crate::models::{ExpiryStatus, Recipe, RecipeId, StorageType, TrainingExample};

use super::csv_io::table_file_valid;
use super::expiry_dataset::TrainingRepository;
use super::recipes::RecipeRepository;

/// Days-since-purchase values sampled for every (type, storage) pair
const SAMPLE_DAYS: [u32; 20] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 21, 30, 45, 60, 75, 90, 120,
];

/// Shelf-life bands: (type, storage, safe up to day, expire soon up to day)
const SHELF_LIFE: [(&str, StorageType, u32, u32); 9] = [
    ("Vegetables", StorageType::Fridge, 4, 7),
    ("Vegetables", StorageType::Pantry, 2, 4),
    ("Vegetables", StorageType::Freezer, 30, 60),
    ("Dairy", StorageType::Fridge, 5, 8),
    ("Dairy", StorageType::Pantry, 0, 1),
    ("Dairy", StorageType::Freezer, 45, 90),
    ("Grains", StorageType::Pantry, 60, 90),
    ("Grains", StorageType::Fridge, 7, 12),
    ("Grains", StorageType::Freezer, 90, 120),
];

const STARTER_RECIPES: [(&str, &[&str]); 10] = [
    ("Tomato Soup", &["Tomato", "Onion", "Garlic", "Butter"]),
    ("Vegetable Fried Rice", &["Rice", "Onion", "Carrot", "Garlic"]),
    ("Cheese Toast", &["Bread", "Cheese", "Butter"]),
    ("Lemon Rice", &["Rice", "Lemon", "Onion"]),
    ("Mashed Potatoes", &["Potato", "Butter", "Milk", "Garlic"]),
    ("Aloo Sabzi", &["Potato", "Tomato", "Onion"]),
    ("Spinach Pasta", &["Pasta", "Spinach", "Milk", "Cheese", "Garlic"]),
    ("Carrot Salad", &["Carrot", "Lemon", "Onion"]),
    ("Rice Pudding", &["Rice", "Milk"]),
    ("Garlic Bread", &["Bread", "Butter", "Garlic"]),
];

/// Initialize storage for a fresh installation
///
/// Returns the names of the tables that were created.
pub fn initialize_storage(paths: &KitchenPaths) -> KitchenResult<Vec<String>> {
    paths.ensure_directories()?;

    let mut created = Vec::new();

    let recipes = RecipeRepository::new(paths.recipes_file());
    if !recipes.exists() {
        recipes.seed(&default_recipes())?;
        created.push("recipes.csv".to_string());
    }

    let training = TrainingRepository::new(paths.expiry_dataset_file());
    if !training.exists() {
        training.seed(&default_training_examples())?;
        created.push("expiry_dataset.csv".to_string());
    }

    info!(created = ?created, "storage initialized");
    Ok(created)
}

/// Existing tables that cannot be read as CSV with a consistent width
pub fn invalid_tables(paths: &KitchenPaths) -> Vec<String> {
    [
        paths.ingredients_file(),
        paths.recipes_file(),
        paths.waste_file(),
        paths.expenses_file(),
        paths.expiry_dataset_file(),
    ]
    .into_iter()
    .filter(|path| path.exists() && !table_file_valid(path))
    .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
    .collect()
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &KitchenPaths) -> bool {
    !paths.recipes_file().exists() || !paths.expiry_dataset_file().exists()
}

/// The starter recipe book
pub fn default_recipes() -> Vec<Recipe> {
    STARTER_RECIPES
        .iter()
        .enumerate()
        .map(|(i, (name, ingredients))| {
            Recipe::new(
                RecipeId::new(i as u32 + 1),
                *name,
                ingredients.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

/// Labeled examples derived from the shelf-life bands
pub fn default_training_examples() -> Vec<TrainingExample> {
    let mut examples = Vec::with_capacity(SHELF_LIFE.len() * SAMPLE_DAYS.len());

    for (ingredient_type, storage, safe_until, soon_until) in SHELF_LIFE {
        for days in SAMPLE_DAYS {
            let status = if days <= safe_until {
                ExpiryStatus::Safe
            } else if days <= soon_until {
                ExpiryStatus::ExpireSoon
            } else {
                ExpiryStatus::Expired
            };
            examples.push(TrainingExample::new(ingredient_type, days, storage, status));
        }
    }

    examples
}
