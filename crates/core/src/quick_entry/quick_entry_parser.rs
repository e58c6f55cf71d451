//! Splits `<description> <amount><unit> <keyword>` strings.
//!
//! Ambiguous input resolves deterministically: the first token that reads
//! as an amount wins, every token before it is the description, and the
//! last recognized keyword after it picks the category.

use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;

use crate::transactions::Category;

use super::quick_entry_constants::{CATEGORY_KEYWORDS, CURRENCY_UNITS};
use super::quick_entry_errors::ParseError;
use super::quick_entry_model::ParsedTransaction;

pub fn parse_transaction_text(text: &str) -> Result<ParsedTransaction, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let (amount_index, amount) = tokens
        .iter()
        .enumerate()
        .find_map(|(index, token)| parse_amount(token).map(|amount| (index, amount)))
        .ok_or_else(|| ParseError::MissingAmount(trimmed.to_string()))?;

    // A detached unit right before the amount ("rs 30") is not description
    let mut description_tokens = &tokens[..amount_index];
    if let Some((last, rest)) = description_tokens.split_last() {
        if is_currency_unit(last) {
            description_tokens = rest;
        }
    }
    let description = description_tokens.join(" ");
    if description.is_empty() {
        return Err(ParseError::MissingDescription(trimmed.to_string()));
    }

    let category = tokens[amount_index + 1..]
        .iter()
        .filter_map(|token| match_category_keyword(token))
        .last()
        .ok_or_else(|| ParseError::UnknownCategory(trimmed.to_string()))?;

    debug!(
        "Parsed quick entry '{}' as {} {} ({})",
        trimmed, description, amount, category
    );
    Ok(ParsedTransaction {
        description,
        amount,
        category,
    })
}

/// Resolves a single word to a category via the keyword table, falling back
/// to the category names themselves. Surrounding punctuation is ignored.
pub fn match_category_keyword(token: &str) -> Option<Category> {
    let word = token
        .trim_matches(|c: char| !(c.is_alphanumeric() || c == '_'))
        .to_lowercase();
    if word.is_empty() {
        return None;
    }
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == word)
        .map(|(_, category)| *category)
        .or_else(|| Category::from_str(&word).ok())
}

fn is_currency_unit(token: &str) -> bool {
    let lowered = token.to_lowercase();
    CURRENCY_UNITS.iter().any(|unit| *unit == lowered)
}

fn strip_unit_prefix(value: &str) -> &str {
    CURRENCY_UNITS
        .iter()
        .find_map(|unit| value.strip_prefix(unit))
        .unwrap_or(value)
}

fn strip_unit_suffix(value: &str) -> &str {
    CURRENCY_UNITS
        .iter()
        .find_map(|unit| value.strip_suffix(unit))
        .unwrap_or(value)
}

fn parse_amount(token: &str) -> Option<Decimal> {
    let lowered = token.to_lowercase();
    let value = strip_unit_suffix(strip_unit_prefix(&lowered));

    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let well_formed = value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.matches('.').count() <= 1;
    if !has_digit || !well_formed {
        return None;
    }
    Decimal::from_str(value).ok()
}
