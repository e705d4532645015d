use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use tempfile::TempDir;

fn kitchen(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kitchen").unwrap();
    cmd.env("KITCHEN_CLI_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    kitchen(&dir).arg("init").assert().success();
    dir
}

fn in_days(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn init_seeds_tables_once() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created recipes.csv"))
        .stdout(predicate::str::contains("created expiry_dataset.csv"));

    kitchen(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn config_shows_data_directory() {
    let dir = initialized();

    kitchen(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory:"))
        .stdout(predicate::str::contains("Currency symbol:   ₹"));
}

#[test]
fn add_and_list_ingredients() {
    let dir = initialized();

    kitchen(&dir)
        .args(["ingredient", "add", "tomato", "500", "g"])
        .args(["--expires", &in_days(7), "--storage", "fridge", "--cost", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added ingredient: Tomato"));

    kitchen(&dir)
        .args(["ingredient", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomato"))
        .stdout(predicate::str::contains("500 g"))
        .stdout(predicate::str::contains("1 ingredient(s)"));

    kitchen(&dir)
        .args(["ingredient", "adjust", "Tomato", "-200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("500 -> 300 g"));
}

#[test]
fn invalid_input_exits_with_error() {
    let dir = initialized();

    kitchen(&dir)
        .args(["ingredient", "add", "tomato", "abc", "g", "--expires", &in_days(3)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number"));

    kitchen(&dir)
        .args(["ingredient", "add", "tomato", "1", "cups", "--expires", &in_days(3)])
        .assert()
        .failure();

    kitchen(&dir)
        .args(["ingredient", "remove", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    kitchen(&dir)
        .args(["ingredient", "list", "--expiring", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    kitchen(&dir)
        .args(["ingredient", "add", "tomato", "1", "kg", "--expires", &in_days(3)])
        .args(["--cost", "100000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    kitchen(&dir)
        .args(["expense", "add", "rice", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cost must be positive"));
}

#[test]
fn recipes_suggested_from_stock() {
    let dir = initialized();

    for name in ["rice", "milk"] {
        kitchen(&dir)
            .args(["ingredient", "add", name, "1", "kg", "--expires", &in_days(10)])
            .assert()
            .success();
    }

    kitchen(&dir)
        .args(["recipe", "suggest", "--makeable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rice Pudding"))
        .stdout(predicate::str::contains("Tomato Soup").not());

    kitchen(&dir)
        .args(["recipe", "check", "Tomato Soup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing:"));
}

#[test]
fn ledgers_feed_reports() {
    let dir = initialized();
    let csv_path = dir.path().join("expenses.csv");

    kitchen(&dir)
        .args(["expense", "add", "rice", "80", "--date", "2025-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹80.00 for Rice"));
    kitchen(&dir)
        .args(["waste", "add", "bread", "2", "slices", "--reason", "spoiled", "--cost", "10"])
        .assert()
        .success();

    kitchen(&dir)
        .args(["waste", "tip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spoiled"));

    kitchen(&dir)
        .args(["report", "expenses", "--csv"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report exported to:"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Ingredient,Purchases,Cost,Percentage"));
    assert!(csv.contains("Rice,1,80.00"));
}

#[test]
fn history_lists_recent_changes() {
    let dir = initialized();

    kitchen(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes recorded yet."));

    kitchen(&dir)
        .args(["ingredient", "add", "milk", "1", "l", "--expires", &in_days(5)])
        .assert()
        .success();
    kitchen(&dir)
        .args(["ingredient", "remove", "Milk"])
        .assert()
        .success();

    kitchen(&dir)
        .args(["history", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE Ingredient 1 (Milk)"))
        .stdout(predicate::str::contains("CREATE").not());
}

#[test]
fn menu_runs_on_piped_input() {
    let dir = TempDir::new().unwrap();

    kitchen(&dir)
        .write_stdin("8\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kitchen Manager"))
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(dir.path().join("data").join("recipes.csv").exists());
}
