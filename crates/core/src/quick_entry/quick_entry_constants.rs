use crate::transactions::Category;

/// Currency markers accepted directly before or after the amount.
pub const CURRENCY_UNITS: [&str; 4] = ["inr", "rs", "₹", "$"];

/// Lowercase keyword to category lookup.
///
/// Category names themselves are matched separately.
pub const CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    ("food", Category::EatingOut),
    ("restaurant", Category::EatingOut),
    ("lunch", Category::EatingOut),
    ("dinner", Category::EatingOut),
    ("snack", Category::EatingOut),
    ("grocery", Category::Groceries),
    ("groceries", Category::Groceries),
    ("vegetables", Category::Groceries),
    ("transport", Category::Transport),
    ("travel", Category::Transport),
    ("taxi", Category::Transport),
    ("cab", Category::Transport),
    ("bus", Category::Transport),
    ("fuel", Category::Transport),
    ("entertainment", Category::Entertainment),
    ("movie", Category::Entertainment),
    ("movies", Category::Entertainment),
    ("game", Category::Entertainment),
    ("utility", Category::Utilities),
    ("utilities", Category::Utilities),
    ("bill", Category::Utilities),
    ("electricity", Category::Utilities),
    ("internet", Category::Utilities),
    ("medical", Category::Healthcare),
    ("doctor", Category::Healthcare),
    ("health", Category::Healthcare),
    ("medicine", Category::Healthcare),
    ("education", Category::Education),
    ("school", Category::Education),
    ("book", Category::Education),
    ("books", Category::Education),
    ("course", Category::Education),
    ("misc", Category::Miscellaneous),
    ("other", Category::Miscellaneous),
];
