//! Pure aggregation over a snapshot of one user's transactions.
//!
//! None of these functions filter by user; callers pass a single user's
//! transactions. Results use ordered maps so the same input always produces
//! the same output.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::transactions::{Category, Transaction, TransactionFilter};
use crate::utils::time_utils::trailing_days;

use super::aggregation_model::{CategorySpending, DailySpending};

/// Sum of amounts per category, covering only categories that occur.
pub fn aggregate_by_category(transactions: &[Transaction]) -> BTreeMap<Category, Decimal> {
    let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
    for transaction in transactions {
        let total = totals.entry(transaction.category).or_insert(Decimal::ZERO);
        *total = total.saturating_add(transaction.amount);
    }
    totals
}

/// Per-day totals for the `days` calendar days ending at `today`, oldest
/// first. Always returns exactly `days` entries; days without spending are
/// zero. Transactions outside the window are ignored.
pub fn daily_trend(transactions: &[Transaction], today: NaiveDate, days: u32) -> Vec<DailySpending> {
    let mut by_day: BTreeMap<NaiveDate, Decimal> = trailing_days(today, days)
        .into_iter()
        .map(|date| (date, Decimal::ZERO))
        .collect();

    for transaction in transactions {
        if let Some(total) = by_day.get_mut(&transaction.date) {
            *total = total.saturating_add(transaction.amount);
        }
    }

    by_day
        .into_iter()
        .map(|(date, amount)| DailySpending { date, amount })
        .collect()
}

/// Category totals for the transactions inside the trailing window.
pub fn category_trend(
    transactions: &[Transaction],
    today: NaiveDate,
    days: u32,
) -> Vec<CategorySpending> {
    let window = trailing_days(today, days);
    let filter = match (window.first(), window.last()) {
        (Some(start), Some(end)) => TransactionFilter::between(*start, *end),
        _ => return Vec::new(),
    };

    let in_window: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.contains(t.date))
        .cloned()
        .collect();

    aggregate_by_category(&in_window)
        .into_iter()
        .map(|(category, amount)| CategorySpending { category, amount })
        .collect()
}
