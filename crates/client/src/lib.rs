//! HTTP client for the Savings Predictor API.
//!
//! The base URL is passed in explicitly and transient failures are retried
//! with a bounded, linearly growing backoff.

mod client;
pub mod errors;
pub mod models;
pub mod retry;

pub use client::SavingsApiClient;
pub use errors::{ClientError, Result};
pub use models::{CreatedTransaction, HealthStatus, SavedProfile};
pub use retry::{retry_with_backoff, retry_with_backoff_if, RetryPolicy, Sleeper, TokioSleeper};
