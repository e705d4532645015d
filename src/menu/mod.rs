//! Interactive text menu
//!
//! A numbered main menu with one submenu per area of the kitchen. Each
//! action runs in isolation: an error is reported and the menu carries on.
//! The session ends on "Exit" or when the input closes.

mod actions;
pub mod prompt;

pub use prompt::Prompter;

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::display::report::separator;
use crate::error::{KitchenError, KitchenResult};
use crate::services::PredictionService;
use crate::storage::Storage;

const MAIN_MENU: [&str; 9] = [
    "Ingredients",
    "Recipes",
    "Waste",
    "Expiry AI",
    "Expiry Simple",
    "Expenses",
    "Reports",
    "Help",
    "Exit",
];

const INGREDIENT_MENU: [&str; 6] = [
    "Add ingredient",
    "List all",
    "Search by name",
    "Expiring within N days",
    "Update quantity",
    "Remove ingredient",
];

const RECIPE_MENU: [&str; 5] = [
    "Show all recipes",
    "Suggest recipes",
    "What can I cook now?",
    "Check a recipe",
    "Add a recipe",
];

const WASTE_MENU: [&str; 6] = [
    "Record waste",
    "View waste log",
    "Waste by ingredient",
    "Waste by reason",
    "Waste by month",
    "Waste reduction tip",
];

const EXPIRY_AI_MENU: [&str; 3] = [
    "Predict for current stock",
    "Predict for an item",
    "Model and dataset info",
];

const EXPIRY_SIMPLE_MENU: [&str; 3] = [
    "Check all ingredients",
    "Check one ingredient",
    "Remove expired ingredients",
];

const EXPENSE_MENU: [&str; 5] = [
    "Record expense",
    "View expenses",
    "Spending by ingredient",
    "Spending by month",
    "Expense summary",
];

const REPORT_MENU: [&str; 5] = [
    "Inventory report",
    "Expense report",
    "Waste report",
    "Dashboard",
    "Export a report to CSV",
];

const HELP: &str = "\
Ingredients    add, list, search and update what is in stock
Recipes        rank recipes by how much of each you can make right now
Waste          log thrown-away food and see where the waste comes from
Expiry AI      predict freshness from how long food has been kept
Expiry Simple  check printed expiry dates and clear out expired food
Expenses       log purchases and see where the money goes
Reports        inventory, expense, waste and dashboard views, with CSV export

Dates are entered as YYYY-MM-DD. Close the input (Ctrl+D) to leave at any prompt.";

/// An action run from a submenu, given the 1-based option number
type Action<'a, R, W> = fn(&mut Menu<'a, R, W>, usize) -> KitchenResult<()>;

/// One interactive session
pub struct Menu<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    today: NaiveDate,
    prompter: Prompter<R, W>,
    /// Trained on first use, then reused for the rest of the session
    predictor: Option<PredictionService<'a>>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        storage: &'a Storage,
        settings: &'a Settings,
        today: NaiveDate,
        input: R,
        output: W,
    ) -> Self {
        Self {
            storage,
            settings,
            today,
            prompter: Prompter::new(input, output),
            predictor: None,
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the main menu until the user exits or the input closes
    pub fn run(&mut self) -> KitchenResult<()> {
        self.prompter.say("Kitchen Manager")?;
        info!(today = %self.today, "menu session started");

        loop {
            self.show_options("Main Menu", &MAIN_MENU, false)?;
            let choice = match self.prompter.choose(
                &format!("Choose an option (1-{}): ", MAIN_MENU.len()),
                MAIN_MENU.len(),
            ) {
                Ok(choice) => choice,
                Err(KitchenError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            let result = match choice {
                1 => self.submenu("Ingredients", &INGREDIENT_MENU, Self::ingredient_action),
                2 => self.submenu("Recipes", &RECIPE_MENU, Self::recipe_action),
                3 => self.submenu("Waste", &WASTE_MENU, Self::waste_action),
                4 => self.submenu("Expiry AI", &EXPIRY_AI_MENU, Self::expiry_ai_action),
                5 => self.submenu(
                    "Expiry Simple",
                    &EXPIRY_SIMPLE_MENU,
                    Self::expiry_simple_action,
                ),
                6 => self.submenu("Expenses", &EXPENSE_MENU, Self::expense_action),
                7 => self.submenu("Reports", &REPORT_MENU, Self::report_action),
                8 => self.prompter.say(HELP),
                _ => break,
            };

            match result {
                Ok(()) => {}
                Err(KitchenError::InputClosed) => break,
                Err(e) => self.report_error(&e)?,
            }
        }

        self.prompter.say("Goodbye!")
    }

    /// Show a submenu and run actions from it until "Back"
    fn submenu(
        &mut self,
        title: &str,
        options: &[&str],
        action: Action<'a, R, W>,
    ) -> KitchenResult<()> {
        let back = options.len() + 1;
        loop {
            self.show_options(title, options, true)?;
            let choice = self
                .prompter
                .choose(&format!("Choose an option (1-{}): ", back), back)?;
            if choice == back {
                return Ok(());
            }

            match action(self, choice) {
                Ok(()) => {}
                Err(KitchenError::InputClosed) => return Err(KitchenError::InputClosed),
                Err(e) => self.report_error(&e)?,
            }
        }
    }

    fn show_options(&mut self, title: &str, options: &[&str], with_back: bool) -> KitchenResult<()> {
        let mut text = format!("\n{}\n{}\n", title, separator(title.chars().count()));
        for (i, option) in options.iter().enumerate() {
            text.push_str(&format!("  {}. {}\n", i + 1, option));
        }
        if with_back {
            text.push_str(&format!("  {}. Back\n", options.len() + 1));
        }
        self.prompter.say(text.trim_end())
    }

    fn report_error(&mut self, error: &KitchenError) -> KitchenResult<()> {
        if error.is_not_found() || error.is_validation() {
            debug!(error = %error, "menu action rejected");
        } else {
            warn!(error = %error, "menu action failed");
        }
        self.prompter.say(&format!("Error: {}", error))?;
        if error.is_data_file() {
            self.prompter.say(&format!(
                "Check the tables in {}; 'kitchen init' recreates missing starter tables.",
                self.storage.paths().data_dir().display()
            ))?;
        }
        Ok(())
    }

    /// The session's classifier, trained on first use
    fn predictor(&mut self) -> KitchenResult<&PredictionService<'a>> {
        if self.predictor.is_none() {
            self.prompter.say("Training expiry model...")?;
            let trained = PredictionService::train(self.storage, self.settings.classifier)?;
            info!(
                rows = trained.model().training_rows(),
                accuracy = trained.model().training_accuracy(),
                "expiry model trained"
            );
            self.predictor = Some(trained);
        }
        self.predictor
            .as_ref()
            .ok_or_else(|| KitchenError::Model("expiry model unavailable".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KitchenPaths;
    use crate::models::{Money, StorageType, Unit};
    use crate::services::{CreateIngredientInput, IngredientService};
    use crate::storage::initialize_storage;
    use chrono::Duration;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn stock(storage: &Storage, name: &str, expires_in: i64) {
        IngredientService::new(storage)
            .add(
                CreateIngredientInput {
                    name: name.to_string(),
                    quantity: 1.0,
                    unit: Unit::Kg,
                    expiry_date: today() + Duration::days(expires_in),
                    storage_type: StorageType::Pantry,
                    cost: Money::from_cents(5000),
                },
                today(),
            )
            .unwrap();
    }

    fn run_session(storage: &Storage, script: &str) -> String {
        let settings = Settings::default();
        let mut menu = Menu::new(
            storage,
            &settings,
            today(),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        menu.run().unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn test_add_ingredient_reprompts_on_bad_quantity() {
        let (_temp_dir, storage) = create_test_storage();

        let output = run_session(
            &storage,
            "1\n1\ntomato\nabc\n500\ng\n2025-08-27\nfridge\n40\n2\n7\n9\n",
        );

        assert!(output.contains("Invalid number: 'abc'"));
        assert!(output.contains("Added Tomato (ID 1)"));
        assert!(output.contains("₹40.00"));
        assert!(output.ends_with("Goodbye!\n"));

        let stored = storage.ingredients.load_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].quantity, 500.0);
        assert_eq!(stored[0].date_added, today());
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let (_temp_dir, storage) = create_test_storage();

        let output = run_session(&storage, "1\n5\n99\n7\n0\n8\n9\n");

        assert!(output.contains("Error: Ingredient not found: 99"));
        assert!(output.contains("Please enter a number between 1 and 9"));
        assert!(output.contains("Expiry Simple  check printed expiry dates"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_expiry_window_out_of_range_reprompts() {
        let (_temp_dir, storage) = create_test_storage();
        stock(&storage, "Milk", 2);

        let output = run_session(&storage, "1\n4\n4000000000\n3\n7\n9\n");

        assert!(output.contains("Expiry window of 4000000000 days is out of range"));
        assert_eq!(output.matches("Within how many days? ").count(), 2);
        assert!(output.contains("Milk"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_missing_table_reported_with_hint() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::remove_file(storage.paths().recipes_file()).unwrap();

        let output = run_session(&storage, "2\n1\n6\n9\n");

        assert!(output.contains("Error:"));
        assert!(output.contains("'kitchen init' recreates missing starter tables"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_closed_input_ends_session() {
        let (_temp_dir, storage) = create_test_storage();

        let output = run_session(&storage, "1\n1\ntomato\n");

        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(storage.ingredients.count().unwrap(), 0);
    }

    #[test]
    fn test_model_trained_once_per_session() {
        let (_temp_dir, storage) = create_test_storage();
        stock(&storage, "Rice", 60);

        let output = run_session(&storage, "4\n1\n1\n4\n9\n");

        assert_eq!(output.matches("Training expiry model...").count(), 1);
        assert_eq!(output.matches("Grains").count(), 2);
    }

    #[test]
    fn test_makeable_recipes() {
        let (_temp_dir, storage) = create_test_storage();
        stock(&storage, "Rice", 60);
        stock(&storage, "Milk", 5);

        let output = run_session(&storage, "2\n3\n6\n9\n");

        assert!(output.contains("Rice Pudding"));
        assert!(!output.contains("Tomato Soup"));
    }

    #[test]
    fn test_purge_expired_after_confirmation() {
        let (_temp_dir, storage) = create_test_storage();
        stock(&storage, "Bread", -1);
        stock(&storage, "Rice", 30);

        let output = run_session(&storage, "5\n3\ny\n4\n9\n");

        assert!(output.contains("Removed 1 expired ingredient(s)."));
        let names: Vec<_> = storage
            .ingredients
            .load_all()
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Rice"]);
    }

    #[test]
    fn test_dashboard_and_export() {
        let (temp_dir, storage) = create_test_storage();
        stock(&storage, "Rice", 30);
        let export_path = temp_dir.path().join("dashboard.csv");

        let script = format!("7\n4\n5\n4\n{}\n6\n9\n", export_path.display());
        let output = run_session(&storage, &script);

        assert!(output.contains("Kitchen Dashboard"));
        assert!(output.contains("Report exported to:"));
        let csv = std::fs::read_to_string(export_path).unwrap();
        assert!(csv.contains("Total Ingredients,1"));
    }
}
