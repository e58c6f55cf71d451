//! Unit tests for the profile service.

use super::*;
use crate::errors::{Error, Result, ValidationError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockProfileRepository {
    profiles: Mutex<HashMap<String, Profile>>,
}

#[async_trait]
impl ProfileRepositoryTrait for MockProfileRepository {
    async fn upsert(&self, profile: Profile) -> Result<Profile> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile.clone());
        Ok(profile)
    }

    fn get_by_user(&self, user_id: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().get(user_id).cloned())
    }
}

fn profile(user_id: &str, age: i32, dependents: i32, occupation: Occupation) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        age,
        dependents,
        occupation,
    }
}

fn service() -> (ProfileService, Arc<MockProfileRepository>) {
    let repository = Arc::new(MockProfileRepository::default());
    (ProfileService::new(repository.clone()), repository)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_second_submission_overwrites_first() {
    let (service, repository) = service();

    service
        .save_profile(profile("user123", 30, 0, Occupation::Salaried))
        .await
        .unwrap();
    service
        .save_profile(profile("user123", 31, 2, Occupation::Freelancer))
        .await
        .unwrap();

    assert_eq!(repository.profiles.lock().unwrap().len(), 1);
    let stored = service.get_profile("user123").unwrap();
    assert_eq!(stored, profile("user123", 31, 2, Occupation::Freelancer));
}

#[tokio::test]
async fn test_underage_profile_is_rejected_and_not_stored() {
    let (service, repository) = service();

    let result = service
        .save_profile(profile("user123", 15, 0, Occupation::Student))
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::OutOfRange { ref field, .. })) if field == "age"
    ));
    assert!(repository.profiles.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_age_bounds_are_inclusive() {
    let (service, _) = service();

    assert!(service
        .save_profile(profile("a", 18, 0, Occupation::Student))
        .await
        .is_ok());
    assert!(service
        .save_profile(profile("b", 100, 0, Occupation::Retired))
        .await
        .is_ok());
    assert!(service
        .save_profile(profile("c", 101, 0, Occupation::Retired))
        .await
        .is_err());
}

#[tokio::test]
async fn test_negative_dependents_are_rejected() {
    let (service, _) = service();

    let result = service
        .save_profile(profile("user123", 40, -1, Occupation::Business))
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::OutOfRange { ref field, .. })) if field == "dependents"
    ));
}

#[test]
fn test_missing_profile_is_not_found() {
    let (service, _) = service();

    let result = service.get_profile("nobody");

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_occupation_parsing() {
    assert_eq!("salaried".parse::<Occupation>(), Ok(Occupation::Salaried));
    assert_eq!(" Retired ".parse::<Occupation>(), Ok(Occupation::Retired));
    assert!("Astronaut".parse::<Occupation>().is_err());

    let parsed: Profile = serde_json::from_str(
        r#"{"user_id":"u","age":30,"dependents":1,"occupation":"Business"}"#,
    )
    .unwrap();
    assert_eq!(parsed.occupation, Occupation::Business);
    assert_eq!(
        serde_json::to_value(&parsed).unwrap()["occupation"],
        serde_json::json!("Business")
    );
}
