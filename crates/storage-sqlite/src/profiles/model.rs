use std::str::FromStr;

use diesel::prelude::*;

use savings_predictor_core::errors::Error;
use savings_predictor_core::profiles::{Occupation, Profile};

use crate::errors::StorageError;

/// Database model for user profiles, keyed by user id
#[derive(
    Queryable, Selectable, Identifiable, Insertable, AsChangeset, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::user_profiles)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProfileDB {
    pub user_id: String,
    pub age: i32,
    pub dependents: i32,
    pub occupation: String,
}

impl From<Profile> for ProfileDB {
    fn from(domain: Profile) -> Self {
        Self {
            user_id: domain.user_id,
            age: domain.age,
            dependents: domain.dependents,
            occupation: domain.occupation.as_str().to_string(),
        }
    }
}

impl TryFrom<ProfileDB> for Profile {
    type Error = Error;

    fn try_from(db: ProfileDB) -> Result<Self, Self::Error> {
        let occupation = Occupation::from_str(&db.occupation).map_err(|e| {
            Error::from(StorageError::Corrupt(format!("profile {}: {}", db.user_id, e)))
        })?;
        Ok(Profile {
            user_id: db.user_id,
            age: db.age,
            dependents: db.dependents,
            occupation,
        })
    }
}
