use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::Category;

/// Savings breakdown for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySavings {
    pub actual_expense: Decimal,
    pub potential_savings: Decimal,
    pub savings_percentage: Decimal,
}

/// Sums across every predicted category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsTotals {
    pub actual_expenses: Decimal,
    pub potential_savings: Decimal,
    pub savings_percentage: Decimal,
}

/// Potential savings per category plus totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsPrediction {
    pub predictions: BTreeMap<Category, CategorySavings>,
    pub totals: SavingsTotals,
}
