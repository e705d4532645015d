//! Built-in ingredient name to food group table

/// Known ingredient names and their food group
const FOOD_TYPES: [(&str, &str); 12] = [
    ("Tomato", "Vegetables"),
    ("Onion", "Vegetables"),
    ("Garlic", "Vegetables"),
    ("Lemon", "Vegetables"),
    ("Potato", "Vegetables"),
    ("Carrot", "Vegetables"),
    ("Spinach", "Vegetables"),
    ("Cheese", "Dairy"),
    ("Milk", "Dairy"),
    ("Butter", "Dairy"),
    ("Rice", "Grains"),
    ("Bread", "Grains"),
];

/// Food group of a stocked ingredient, if the name is known
pub fn ingredient_type_for(name: &str) -> Option<&'static str> {
    let name = name.trim();
    FOOD_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, group)| *group)
}
