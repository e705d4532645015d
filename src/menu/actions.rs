//! Submenu actions

use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::parse::{
    parse_cost, parse_date, parse_name, parse_number, parse_positive, parse_reason,
    parse_storage, parse_unit, parse_whole_days,
};
use crate::cli::report::write_csv_file;
use crate::display::{
    format_dataset_summary, format_expense_list, format_expense_summary, format_expiry_checks,
    format_groups, format_ingredient_list, format_match_details, format_matches,
    format_prediction, format_recipe_list, format_stock_predictions, format_waste_list,
    format_waste_tip,
};
use crate::error::{KitchenError, KitchenResult};
use crate::models::recipe::parse_ingredient_list;
use crate::models::{Ingredient, StorageType, Unit, WasteReason};
use crate::reports::{Dashboard, ExpenseReport, InventoryReport, WasteReport};
use crate::services::ingredient::expiry_horizon;
use crate::services::prediction::dataset_summary;
use crate::services::{
    CreateIngredientInput, ExpenseService, ExpiryService, IngredientFilter, IngredientService,
    RecipeService, RecordWasteInput, WasteService,
};

use super::Menu;

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub(super) fn ingredient_action(&mut self, choice: usize) -> KitchenResult<()> {
        match choice {
            1 => self.add_ingredient(),
            2 => self.list_ingredients(IngredientFilter::new()),
            3 => {
                let text = self.prompter.ask("Search for: ")?;
                self.list_ingredients(IngredientFilter::new().search(text))
            }
            4 => {
                let today = self.today;
                let days = self.prompter.ask_with("Within how many days? ", |answer| {
                    let days = i64::from(parse_whole_days(answer)?);
                    expiry_horizon(today, days)?;
                    Ok(days)
                })?;
                self.list_ingredients(IngredientFilter::new().expiring_within(days).by_expiry())
            }
            5 => {
                let ingredient = self.pick_ingredient()?;
                let quantity = self.prompter.ask_with(
                    &format!("New quantity ({} {} now): ", ingredient.quantity, ingredient.unit),
                    parse_number,
                )?;
                let updated =
                    IngredientService::new(self.storage).update_quantity(ingredient.id, quantity)?;
                self.prompter.say(&format!(
                    "{} now at {} {}",
                    updated.name, updated.quantity, updated.unit
                ))
            }
            _ => {
                let ingredient = self.pick_ingredient()?;
                if !self
                    .prompter
                    .confirm(&format!("Remove {} (ID {})? (y/n): ", ingredient.name, ingredient.id))?
                {
                    return self.prompter.say("Nothing removed.");
                }
                let removed = IngredientService::new(self.storage).remove(ingredient.id)?;
                self.prompter.say(&format!("Removed {}", removed.name))
            }
        }
    }

    fn add_ingredient(&mut self) -> KitchenResult<()> {
        let name = self.prompter.ask_with("Name: ", parse_name)?;
        let quantity = self.prompter.ask_with("Quantity: ", parse_positive)?;
        let unit = self
            .prompter
            .ask_with(&format!("Unit ({}): ", Unit::choices()), parse_unit)?;
        let expiry_date = self
            .prompter
            .ask_with("Expiry date (YYYY-MM-DD): ", parse_date)?;
        let storage_type = self.prompter.ask_with(
            &format!("Storage ({}): ", StorageType::choices()),
            parse_storage,
        )?;
        let cost = self.prompter.ask_with("Cost: ", parse_cost)?;

        let ingredient = IngredientService::new(self.storage).add(
            CreateIngredientInput {
                name,
                quantity,
                unit,
                expiry_date,
                storage_type,
                cost,
            },
            self.today,
        )?;

        self.prompter.say(&format!(
            "Added {} (ID {})",
            ingredient.name, ingredient.id
        ))
    }

    fn list_ingredients(&mut self, filter: IngredientFilter) -> KitchenResult<()> {
        let ingredients = IngredientService::new(self.storage).list(&filter, self.today)?;
        self.prompter.say(&format_ingredient_list(
            &ingredients,
            self.today,
            &self.settings.currency_symbol,
            &self.settings.date_format,
        ))
    }

    fn pick_ingredient(&mut self) -> KitchenResult<Ingredient> {
        let identifier = self
            .prompter
            .ask_with("Ingredient ID or name: ", parse_name)?;
        IngredientService::new(self.storage)
            .find(&identifier)?
            .ok_or_else(|| KitchenError::ingredient_not_found(identifier))
    }

    pub(super) fn recipe_action(&mut self, choice: usize) -> KitchenResult<()> {
        let service = RecipeService::new(self.storage);
        let text = match choice {
            1 => format_recipe_list(&service.list()?),
            2 => format_matches(&service.suggest()?),
            3 => {
                let makeable = service.makeable()?;
                if makeable.is_empty() {
                    "Nothing can be cooked with the current stock.".to_string()
                } else {
                    format_matches(&makeable)
                }
            }
            4 => {
                let name = self.prompter.ask_with("Recipe name: ", parse_name)?;
                format_match_details(&service.check(&name)?)
            }
            _ => {
                let name = self.prompter.ask_with("Recipe name: ", parse_name)?;
                let ingredients = self
                    .prompter
                    .ask_with("Ingredients (comma separated): ", |answer| {
                        let list = parse_ingredient_list(answer);
                        if list.is_empty() {
                            Err(KitchenError::Validation(
                                "Enter at least one ingredient".into(),
                            ))
                        } else {
                            Ok(list)
                        }
                    })?;
                let recipe = service.add_recipe(&name, &ingredients)?;
                format!("Added recipe {}", recipe)
            }
        };
        self.prompter.say(text.trim_end())
    }

    pub(super) fn waste_action(&mut self, choice: usize) -> KitchenResult<()> {
        let service = WasteService::new(self.storage);
        let settings = self.settings;
        let currency = settings.currency_symbol.as_str();

        let text = match choice {
            1 => {
                let ingredient_name = self.prompter.ask_with("Ingredient: ", parse_name)?;
                let quantity = self.prompter.ask_with("Quantity wasted: ", parse_positive)?;
                let unit = self
                    .prompter
                    .ask_with(&format!("Unit ({}): ", Unit::choices()), parse_unit)?;
                let reason = self.prompter.ask_with(
                    &format!("Reason ({}): ", WasteReason::choices()),
                    parse_reason,
                )?;
                let cost = self.prompter.ask_with("Estimated cost: ", parse_cost)?;
                let date = self
                    .prompter
                    .ask_optional_with("Date (YYYY-MM-DD, blank for today): ", parse_date)?
                    .unwrap_or(self.today);

                let event = service.record(RecordWasteInput {
                    ingredient_name,
                    quantity,
                    unit,
                    reason,
                    cost,
                    date,
                })?;
                format!(
                    "Recorded waste #{}: {} {} of {} ({})",
                    event.id, event.quantity, event.unit, event.ingredient_name, event.reason
                )
            }
            2 => format_waste_list(&service.list()?, currency, &settings.date_format),
            3 => format_groups(&service.by_ingredient()?, currency, true),
            4 => format_groups(&service.by_reason()?, currency, true),
            5 => format_groups(&service.by_month()?, currency, true),
            _ => format_waste_tip(service.tip()?.as_ref()),
        };
        self.prompter.say(&text)
    }

    pub(super) fn expiry_ai_action(&mut self, choice: usize) -> KitchenResult<()> {
        let today = self.today;
        let text = match choice {
            1 => format_stock_predictions(&self.predictor()?.scan_stock(today)?),
            2 => {
                let known = self.predictor()?.model().ingredient_types().join(", ");
                let ingredient_type = self
                    .prompter
                    .ask_with(&format!("Ingredient type ({}): ", known), parse_name)?;
                let days = self
                    .prompter
                    .ask_with("Days since purchase: ", parse_whole_days)?;
                let storage_type = self.prompter.ask_with(
                    &format!("Storage ({}): ", StorageType::choices()),
                    parse_storage,
                )?;

                let prediction = self.predictor()?.predict(&ingredient_type, days, storage_type);
                let mut text = format_prediction(&prediction);
                if prediction.fallback {
                    text.push_str("\nUnknown type or storage; assuming it may expire soon.");
                }
                text
            }
            _ => {
                let accuracy = self.predictor()?.model().training_accuracy();
                format!(
                    "{}Training accuracy: {:.1}%",
                    format_dataset_summary(&dataset_summary(self.storage)?),
                    accuracy * 100.0
                )
            }
        };
        self.prompter.say(&text)
    }

    pub(super) fn expiry_simple_action(&mut self, choice: usize) -> KitchenResult<()> {
        let service = ExpiryService::new(self.storage);
        let settings = self.settings;
        let date_format = settings.date_format.as_str();

        let text = match choice {
            1 => format_expiry_checks(&service.sweep(self.today)?, date_format),
            2 => {
                let name = self.prompter.ask_with("Ingredient name: ", parse_name)?;
                format_expiry_checks(&service.check(&name, self.today)?, date_format)
            }
            _ => {
                let expired = service.expired(self.today)?;
                if expired.is_empty() {
                    "No expired ingredients.".to_string()
                } else {
                    self.prompter
                        .say(&format_expiry_checks(&expired, date_format))?;
                    if self.prompter.confirm(&format!(
                        "Remove these {} ingredient(s)? (y/n): ",
                        expired.len()
                    ))? {
                        let removed = service.purge_expired(self.today)?;
                        format!("Removed {} expired ingredient(s).", removed.len())
                    } else {
                        "Nothing removed.".to_string()
                    }
                }
            }
        };
        self.prompter.say(&text)
    }

    pub(super) fn expense_action(&mut self, choice: usize) -> KitchenResult<()> {
        let service = ExpenseService::new(self.storage);
        let settings = self.settings;
        let currency = settings.currency_symbol.as_str();

        let text = match choice {
            1 => {
                let name = self.prompter.ask_with("Ingredient: ", parse_name)?;
                let cost = self.prompter.ask_with("Amount paid: ", |answer| {
                    let cost = parse_cost(answer)?;
                    if cost.is_zero() {
                        return Err(KitchenError::Validation(
                            "Amount must be greater than zero".into(),
                        ));
                    }
                    Ok(cost)
                })?;
                let date = self
                    .prompter
                    .ask_optional_with("Date (YYYY-MM-DD, blank for today): ", parse_date)?
                    .unwrap_or(self.today);

                let event = service.record(&name, cost, date)?;
                format!(
                    "Recorded expense #{}: {} for {}",
                    event.id,
                    event.cost.format_with_symbol(currency),
                    event.ingredient_name
                )
            }
            2 => format_expense_list(&service.list()?, currency, &settings.date_format),
            3 => format_groups(&service.by_ingredient()?, currency, false),
            4 => format_groups(&service.by_month()?, currency, false),
            _ => match service.summary()? {
                Some(summary) => format_expense_summary(&summary, currency),
                None => "No expenses recorded.".to_string(),
            },
        };
        self.prompter.say(text.trim_end())
    }

    pub(super) fn report_action(&mut self, choice: usize) -> KitchenResult<()> {
        let settings = self.settings;
        let currency = settings.currency_symbol.as_str();

        let text = match choice {
            1 => InventoryReport::generate(self.storage)?.format_terminal(currency),
            2 => ExpenseReport::generate(self.storage)?.format_terminal(currency),
            3 => WasteReport::generate(self.storage)?.format_terminal(currency),
            4 => Dashboard::generate(self.storage, self.today)?.format_terminal(currency),
            _ => {
                self.prompter.say(
                    "  1. Inventory\n  2. Expenses\n  3. Waste\n  4. Dashboard",
                )?;
                let kind = self.prompter.choose("Report to export (1-4): ", 4)?;
                let path = self.prompter.ask_with("CSV file path: ", parse_name)?;
                let path = Path::new(&path);

                match kind {
                    1 => {
                        let report = InventoryReport::generate(self.storage)?;
                        write_csv_file(path, |w| report.export_csv(w))?
                    }
                    2 => {
                        let report = ExpenseReport::generate(self.storage)?;
                        write_csv_file(path, |w| report.export_csv(w))?
                    }
                    3 => {
                        let report = WasteReport::generate(self.storage)?;
                        write_csv_file(path, |w| report.export_csv(w))?
                    }
                    _ => {
                        let report = Dashboard::generate(self.storage, self.today)?;
                        write_csv_file(path, |w| report.export_csv(w))?
                    }
                }
                format!("Report exported to: {}", path.display())
            }
        };
        self.prompter.say(text.trim_end())
    }
}
