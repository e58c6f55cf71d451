//! Profiles module - domain models, services, and traits.

mod profiles_model;
mod profiles_service;
mod profiles_traits;

#[cfg(test)]
mod profiles_service_tests;

pub use profiles_model::{Occupation, Profile, MAX_PROFILE_AGE, MIN_PROFILE_AGE};
pub use profiles_service::ProfileService;
pub use profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
