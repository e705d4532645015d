use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kitchen_cli::cli::{
    handle_expense_command, handle_expiry_command, handle_history_command,
    handle_ingredient_command, handle_recipe_command, handle_report_command,
    handle_waste_command, ExpenseCommands, ExpiryCommands, IngredientCommands, RecipeCommands,
    ReportCommands, WasteCommands,
};
use kitchen_cli::config::{KitchenPaths, Settings};
use kitchen_cli::menu::Menu;
use kitchen_cli::storage::init::{initialize_storage, invalid_tables, needs_initialization};
use kitchen_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kitchen",
    version,
    about = "Terminal-based kitchen manager",
    long_about = "Kitchen CLI keeps track of the ingredients you have, suggests \
                  recipes you can cook with them, warns before food expires and \
                  logs what you spend and what you throw away."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (the default)
    Menu,

    /// Ingredient store commands
    #[command(subcommand, alias = "ing")]
    Ingredient(IngredientCommands),

    /// Recipe commands
    #[command(subcommand)]
    Recipe(RecipeCommands),

    /// Waste ledger commands
    #[command(subcommand)]
    Waste(WasteCommands),

    /// Expense ledger commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Expiry checks and predictions
    #[command(subcommand)]
    Expiry(ExpiryCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory with starter recipes and training data
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Initialize paths and settings
    let paths = KitchenPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Kitchen CLI at: {}", paths.data_dir().display());
            let created = initialize_storage(&paths)?;
            settings.save(&paths)?;
            if created.is_empty() {
                println!("Already initialized; existing tables were left untouched.");
            } else {
                for table in &created {
                    println!("  created {}", table);
                }
                println!("Initialization complete!");
            }
            for table in invalid_tables(&paths) {
                println!("  warning: {} is not a valid table and was left as is", table);
            }
            println!();
            println!("Run 'kitchen' to open the menu, or 'kitchen --help' for commands.");
        }
        Some(Commands::Config) => {
            println!("Kitchen CLI Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Audit enabled:     {}", settings.audit_enabled);
            println!(
                "  Classifier:        max depth {}, min samples to split {}",
                settings.classifier.max_depth, settings.classifier.min_samples_split
            );
        }
        Some(Commands::Menu) | None => {
            if needs_initialization(&paths) {
                info!("first run, seeding starter tables");
                initialize_storage(&paths)?;
            }
            let storage = Storage::new(paths, &settings)?;
            let stdin = io::stdin();
            let mut menu = Menu::new(&storage, &settings, today, stdin.lock(), io::stdout());
            menu.run()?;
        }
        Some(Commands::Ingredient(cmd)) => {
            let storage = Storage::new(paths, &settings)?;
            handle_ingredient_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Recipe(cmd)) => {
            let storage = Storage::new(paths, &settings)?;
            handle_recipe_command(&storage, cmd)?;
        }
        Some(Commands::Waste(cmd)) => {
            let storage = Storage::new(paths, &settings)?;
            handle_waste_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let storage = Storage::new(paths, &settings)?;
            handle_expense_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Expiry(cmd)) => {
            let storage = Storage::new(paths, &settings)?;
            handle_expiry_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::History { limit }) => {
            let storage = Storage::new(paths, &settings)?;
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Report(cmd)) => {
            let storage = Storage::new(paths, &settings)?;
            handle_report_command(&storage, &settings, today, cmd)?;
        }
    }

    Ok(())
}
