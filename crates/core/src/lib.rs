//! Savings Predictor Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the savings predictor:
//! transaction and profile models, the aggregation and prediction engines,
//! and the quick-entry text parser. It is database-agnostic and defines
//! traits that are implemented by the `storage-sqlite` crate.

pub mod aggregation;
pub mod constants;
pub mod errors;
pub mod profiles;
pub mod quick_entry;
pub mod savings;
pub mod transactions;
pub mod utils;

// Re-export the types nearly every caller needs
pub use transactions::{Category, Transaction};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
