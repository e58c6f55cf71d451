//! SQLite storage implementation for the Savings Predictor.
//!
//! This crate is the only place where Diesel is used. It implements the
//! repository traits defined in `savings-predictor-core`:
//! - connection pooling and embedded migrations
//! - a single writer actor that serializes every write
//! - transaction and profile repositories with their Diesel row types
//!
//! ```text
//!   core (domain, traits)
//!            │
//!            ▼
//!   storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

pub mod profiles;
pub mod transactions;

pub use db::{
    create_pool, get_connection, init, open, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use profiles::ProfileRepository;
pub use transactions::TransactionRepository;

// Re-export from savings-predictor-core for convenience
pub use savings_predictor_core::errors::{DatabaseError, Error, Result};
