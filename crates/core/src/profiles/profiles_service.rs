use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::errors::{Error, Result};

use super::profiles_model::Profile;
use super::profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};

pub struct ProfileService {
    repository: Arc<dyn ProfileRepositoryTrait>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepositoryTrait>) -> Self {
        ProfileService { repository }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    async fn save_profile(&self, mut profile: Profile) -> Result<Profile> {
        profile.validate()?;
        profile.user_id = profile.user_id.trim().to_string();
        let saved = self.repository.upsert(profile).await?;
        info!("Saved profile for user {}", saved.user_id);
        Ok(saved)
    }

    fn get_profile(&self, user_id: &str) -> Result<Profile> {
        self.repository
            .get_by_user(user_id)?
            .ok_or_else(|| Error::NotFound(format!("Profile not found for user {}", user_id)))
    }
}
