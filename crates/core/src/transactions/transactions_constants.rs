/// Category names as they appear on the wire and in storage
pub const CATEGORY_GROCERIES: &str = "Groceries";
pub const CATEGORY_TRANSPORT: &str = "Transport";
pub const CATEGORY_EATING_OUT: &str = "Eating_Out";
pub const CATEGORY_ENTERTAINMENT: &str = "Entertainment";
pub const CATEGORY_UTILITIES: &str = "Utilities";
pub const CATEGORY_HEALTHCARE: &str = "Healthcare";
pub const CATEGORY_EDUCATION: &str = "Education";
pub const CATEGORY_MISCELLANEOUS: &str = "Miscellaneous";

/// Longest description accepted for a transaction
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Largest amount accepted for a single transaction. Keeps per-category and
/// total sums far inside `Decimal`'s range.
pub const MAX_TRANSACTION_AMOUNT: i64 = 1_000_000_000_000;
