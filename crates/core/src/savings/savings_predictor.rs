//! Rule-based savings prediction.
//!
//! For each category with spending, potential savings are the spend times
//! the category's rate, capped at the spend itself. Nothing is rounded;
//! formatting for display is left to the caller.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::transactions::Category;

use super::savings_model::{CategorySavings, SavingsPrediction, SavingsTotals};
use super::savings_rates::SavingsRates;

#[derive(Debug, Clone, Default)]
pub struct SavingsPredictor {
    rates: SavingsRates,
}

impl SavingsPredictor {
    pub fn new(rates: SavingsRates) -> Self {
        SavingsPredictor { rates }
    }

    pub fn rates(&self) -> &SavingsRates {
        &self.rates
    }

    pub fn predict(&self, expenses: &BTreeMap<Category, Decimal>) -> SavingsPrediction {
        let mut predictions = BTreeMap::new();
        let mut total_expenses = Decimal::ZERO;
        let mut total_savings = Decimal::ZERO;

        for (category, actual) in expenses {
            if *actual <= Decimal::ZERO {
                continue;
            }
            let potential = (*actual * self.rates.rate_for(*category)).min(*actual);

            total_expenses = total_expenses.saturating_add(*actual);
            total_savings = total_savings.saturating_add(potential);
            predictions.insert(
                *category,
                CategorySavings {
                    actual_expense: *actual,
                    potential_savings: potential,
                    savings_percentage: percentage(potential, *actual),
                },
            );
        }

        SavingsPrediction {
            predictions,
            totals: SavingsTotals {
                actual_expenses: total_expenses,
                potential_savings: total_savings,
                savings_percentage: percentage(total_savings, total_expenses),
            },
        }
    }
}

fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    // Dividing first keeps the intermediate at most one
    (part / whole * Decimal::ONE_HUNDRED).normalize()
}
