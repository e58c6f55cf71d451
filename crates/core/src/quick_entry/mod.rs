//! Quick-entry module - best-effort parsing of free-text expenses such as
//! `"Samosa 30rs food"`.

mod quick_entry_constants;
mod quick_entry_errors;
mod quick_entry_model;
mod quick_entry_parser;

pub use quick_entry_constants::{CATEGORY_KEYWORDS, CURRENCY_UNITS};
pub use quick_entry_errors::ParseError;
pub use quick_entry_model::ParsedTransaction;
pub use quick_entry_parser::{match_category_keyword, parse_transaction_text};
