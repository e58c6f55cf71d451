//! Aggregation module - per-category and per-day sums over transactions.

mod aggregation_engine;
mod aggregation_model;

pub use aggregation_engine::{aggregate_by_category, category_trend, daily_trend};
pub use aggregation_model::{AggregationPeriod, CategorySpending, DailySpending, SpendingTrends};
