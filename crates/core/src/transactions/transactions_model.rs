//! Transaction domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

use super::transactions_constants::*;

/// Fixed set of expense classifications.
///
/// Declaration order is the canonical ordering used for aggregated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    Groceries,
    Transport,
    #[serde(rename = "Eating_Out")]
    EatingOut,
    Entertainment,
    Utilities,
    Healthcare,
    Education,
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Groceries,
        Category::Transport,
        Category::EatingOut,
        Category::Entertainment,
        Category::Utilities,
        Category::Healthcare,
        Category::Education,
        Category::Miscellaneous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => CATEGORY_GROCERIES,
            Category::Transport => CATEGORY_TRANSPORT,
            Category::EatingOut => CATEGORY_EATING_OUT,
            Category::Entertainment => CATEGORY_ENTERTAINMENT,
            Category::Utilities => CATEGORY_UTILITIES,
            Category::Healthcare => CATEGORY_HEALTHCARE,
            Category::Education => CATEGORY_EDUCATION,
            Category::Miscellaneous => CATEGORY_MISCELLANEOUS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive; spaces and hyphens are treated as underscores so
    /// that "Eating Out" and "eating-out" both resolve to `EatingOut`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().replace([' ', '-'], "_");
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Domain model representing a recorded expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub category: Category,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

/// Input model for creating a new transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub user_id: String,
    pub category: Category,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    /// Defaults to the current date when absent.
    pub date: Option<NaiveDate>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("user_id".to_string()).into());
        }
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "amount".to_string(),
                message: format!("must be non-negative, got {}", self.amount),
            }
            .into());
        }
        if self.amount > Decimal::from(MAX_TRANSACTION_AMOUNT) {
            return Err(ValidationError::OutOfRange {
                field: "amount".to_string(),
                message: format!("must be at most {}, got {}", MAX_TRANSACTION_AMOUNT, self.amount),
            }
            .into());
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::OutOfRange {
                field: "description".to_string(),
                message: format!("must be at most {} characters", MAX_DESCRIPTION_LENGTH),
            }
            .into());
        }
        Ok(())
    }
}

/// Inclusive date bounds for listing transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn between(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    pub fn since(start_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(ValidationError::InvalidInput(format!(
                    "start_date {} is after end_date {}",
                    start, end
                ))
                .into());
            }
        }
        Ok(())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date.map_or(true, |start| date >= start)
            && self.end_date.map_or(true, |end| date <= end)
    }
}
