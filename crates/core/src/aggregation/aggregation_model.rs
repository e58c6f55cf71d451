use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::{Category, TransactionFilter};
use crate::utils::time_utils::{start_of_month, start_of_week};

/// Total spent on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySpending {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: Category,
    pub amount: Decimal,
}

/// Response shape for the spending trend endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingTrends {
    pub daily_spending: Vec<DailySpending>,
    pub category_spending: Vec<CategorySpending>,
}

/// Window of transactions considered when aggregating by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationPeriod {
    #[default]
    All,
    Month,
    Week,
    Day,
}

impl AggregationPeriod {
    /// Date bounds for this period relative to `today`.
    ///
    /// Only the lower bound is set, so future-dated transactions stay in
    /// the aggregate the same way they do for `All`.
    pub fn filter(&self, today: NaiveDate) -> TransactionFilter {
        match self {
            AggregationPeriod::All => TransactionFilter::default(),
            AggregationPeriod::Month => TransactionFilter::since(start_of_month(today)),
            AggregationPeriod::Week => TransactionFilter::since(start_of_week(today)),
            AggregationPeriod::Day => TransactionFilter::since(today),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationPeriod::All => "all",
            AggregationPeriod::Month => "month",
            AggregationPeriod::Week => "week",
            AggregationPeriod::Day => "day",
        }
    }
}
