use strum::Display;

/// Grocery store aisle used to group shopping list items for display.
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aisle {
    Produce,
    Dairy,
    Meat,
    Seafood,
    Bakery,
    Pantry,
    Frozen,
    Other,
}

const PRODUCE: &[&str] = &[
    "tomato", "onion", "garlic", "lettuce", "carrot", "celery", "pepper", "cucumber", "zucchini",
    "broccoli", "cauliflower", "spinach", "kale", "cabbage", "potato", "mushroom", "avocado",
    "ginger", "cilantro", "parsley", "basil", "mint", "thyme", "rosemary", "apple", "banana",
    "orange", "lemon", "lime", "berr", "grape", "mango", "scallion", "shallot", "leek",
];

const DAIRY: &[&str] = &[
    "milk", "cheese", "cream", "butter", "yogurt", "egg", "mozzarella", "parmesan", "cheddar",
    "feta", "ricotta",
];

const MEAT: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "steak", "ham",
    "ground meat", "prosciutto",
];

const SEAFOOD: &[&str] = &[
    "salmon", "tuna", "shrimp", "cod", "tilapia", "crab", "lobster", "scallop", "anchov",
    "mussel", "clam",
];

const BAKERY: &[&str] = &[
    "bread", "bagel", "tortilla", "baguette", "bun", "croissant", "pita", "naan",
];

const PANTRY: &[&str] = &[
    "flour", "sugar", "salt", "oil", "vinegar", "rice", "pasta", "noodle", "bean", "lentil",
    "chickpea", "quinoa", "oat", "sauce", "broth", "stock", "spice", "cumin", "paprika",
    "cinnamon", "oregano", "honey", "soy", "canned", "tomato paste",
];

const FROZEN: &[&str] = &["frozen", "ice cream", "popsicle"];

/// Map an ingredient name to a store aisle by keyword lookup.
///
/// Matching is case-insensitive substring so compound names like
/// "boneless chicken thighs" still land in the right aisle. More specific
/// groups are checked before broad pantry keywords; anything unrecognized
/// falls back to [`Aisle::Other`].
pub fn categorize(ingredient_name: &str) -> Aisle {
    let name = ingredient_name.trim().to_lowercase();

    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    if contains_any(FROZEN) {
        Aisle::Frozen
    } else if contains_any(SEAFOOD) {
        Aisle::Seafood
    } else if contains_any(MEAT) {
        Aisle::Meat
    } else if contains_any(DAIRY) {
        Aisle::Dairy
    } else if contains_any(BAKERY) {
        Aisle::Bakery
    } else if contains_any(PRODUCE) {
        Aisle::Produce
    } else if contains_any(PANTRY) {
        Aisle::Pantry
    } else {
        Aisle::Other
    }
}
