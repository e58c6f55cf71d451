//! SQLite storage implementation for user profiles.

mod model;
mod repository;

pub use model::ProfileDB;
pub use repository::ProfileRepository;
