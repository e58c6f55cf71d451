//! Savings module - rate table, prediction engine, and service.

mod savings_model;
mod savings_predictor;
mod savings_rates;
mod savings_service;
mod savings_traits;

#[cfg(test)]
mod savings_service_tests;

pub use savings_model::{CategorySavings, SavingsPrediction, SavingsTotals};
pub use savings_predictor::SavingsPredictor;
pub use savings_rates::SavingsRates;
pub use savings_service::SavingsService;
pub use savings_traits::SavingsServiceTrait;
