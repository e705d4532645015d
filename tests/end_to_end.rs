use chrono::{Duration, NaiveDate};
use tempfile::TempDir;

use kitchen_cli::config::{KitchenPaths, Settings};
use kitchen_cli::models::{ExpiryStatus, Money, StorageType, Unit, WasteReason};
use kitchen_cli::reports::Dashboard;
use kitchen_cli::services::{
    CreateIngredientInput, ExpiryService, IngredientService, RecordWasteInput, WasteService,
};
use kitchen_cli::storage::{initialize_storage, Storage};

fn setup() -> (TempDir, Storage) {
    let temp_dir = TempDir::new().unwrap();
    let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());
    initialize_storage(&paths).unwrap();
    let storage = Storage::new(paths, &Settings::default()).unwrap();
    (temp_dir, storage)
}

fn day0() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

#[test]
fn tomato_goes_from_safe_to_expired_and_is_purged() {
    let (_temp_dir, storage) = setup();
    let ingredients = IngredientService::new(&storage);
    let expiry = ExpiryService::new(&storage);

    ingredients
        .add(
            CreateIngredientInput {
                name: "tomato".into(),
                quantity: 500.0,
                unit: Unit::G,
                expiry_date: day0() + Duration::days(7),
                storage_type: StorageType::Fridge,
                cost: Money::from_cents(4000),
            },
            day0(),
        )
        .unwrap();
    ingredients
        .add(
            CreateIngredientInput {
                name: "rice".into(),
                quantity: 2.0,
                unit: Unit::Kg,
                expiry_date: day0() + Duration::days(180),
                storage_type: StorageType::Pantry,
                cost: Money::from_cents(12000),
            },
            day0(),
        )
        .unwrap();

    let status_on = |offset: i64| {
        expiry
            .check("Tomato", day0() + Duration::days(offset))
            .unwrap()[0]
            .status
    };
    assert_eq!(status_on(0), ExpiryStatus::Safe);
    assert_eq!(status_on(6), ExpiryStatus::ExpireSoon);
    assert_eq!(status_on(8), ExpiryStatus::Expired);

    let later = day0() + Duration::days(8);
    let dashboard = Dashboard::generate(&storage, later).unwrap();
    assert_eq!(dashboard.total_ingredients, 2);
    assert_eq!(dashboard.expired, 1);

    let purged = expiry.purge_expired(later).unwrap();
    assert_eq!(purged.len(), 1);
    assert_eq!(purged[0].name, "Tomato");

    WasteService::new(&storage)
        .record(RecordWasteInput {
            ingredient_name: "Tomato".into(),
            quantity: 500.0,
            unit: Unit::G,
            reason: WasteReason::Expired,
            cost: Money::from_cents(4000),
            date: later,
        })
        .unwrap();

    let remaining = storage.ingredients.load_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Rice");

    let dashboard = Dashboard::generate(&storage, later).unwrap();
    assert_eq!(dashboard.expired, 0);
    assert_eq!(dashboard.total_waste_cost, Money::from_cents(4000));
}
