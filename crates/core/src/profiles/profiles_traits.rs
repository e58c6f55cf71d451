use crate::errors::Result;
use crate::profiles::profiles_model::Profile;
use async_trait::async_trait;

/// Trait for profile repository operations
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    /// Creates the profile or overwrites the existing one for the same user.
    async fn upsert(&self, profile: Profile) -> Result<Profile>;
    fn get_by_user(&self, user_id: &str) -> Result<Option<Profile>>;
}

/// Trait for profile service operations
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    async fn save_profile(&self, profile: Profile) -> Result<Profile>;
    /// Fails with `Error::NotFound` when the user has no profile.
    fn get_profile(&self, user_id: &str) -> Result<Profile>;
}
