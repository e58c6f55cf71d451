use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use savings_predictor_core::profiles::{Profile, ProfileRepositoryTrait};
use savings_predictor_core::Result;

use super::model::ProfileDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::user_profiles;

pub struct ProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProfileRepository { pool, writer }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    async fn upsert(&self, profile: Profile) -> Result<Profile> {
        let row = ProfileDB::from(profile);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Profile> {
                diesel::insert_into(user_profiles::table)
                    .values(&row)
                    .on_conflict(user_profiles::user_id)
                    .do_update()
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                let stored = user_profiles::table
                    .find(&row.user_id)
                    .select(ProfileDB::as_select())
                    .first(conn)
                    .into_core()?;
                Profile::try_from(stored)
            })
            .await
    }

    fn get_by_user(&self, user_id: &str) -> Result<Option<Profile>> {
        let mut conn = get_connection(&self.pool)?;
        user_profiles::table
            .find(user_id)
            .select(ProfileDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .map(Profile::try_from)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open;
    use savings_predictor_core::profiles::Occupation;
    use tempfile::tempdir;

    fn create_test_repository() -> (ProfileRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("nested").join("test.db");
        let (pool, writer) = open(&db_path.to_string_lossy()).expect("Failed to open database");
        (ProfileRepository::new(pool, writer), temp_dir)
    }

    fn profile(age: i32, occupation: Occupation) -> Profile {
        Profile {
            user_id: "user123".to_string(),
            age,
            dependents: 2,
            occupation,
        }
    }

    #[tokio::test]
    async fn test_upsert_overwrites_existing_profile() {
        let (repo, _dir) = create_test_repository();

        repo.upsert(profile(30, Occupation::Salaried)).await.unwrap();
        let second = repo.upsert(profile(45, Occupation::Business)).await.unwrap();

        assert_eq!(second, profile(45, Occupation::Business));
        assert_eq!(
            repo.get_by_user("user123").unwrap(),
            Some(profile(45, Occupation::Business))
        );

        let mut conn = get_connection(&repo.pool).unwrap();
        let rows: i64 = user_profiles::table.count().get_result(&mut conn).unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_missing_profile_is_none() {
        let (repo, _dir) = create_test_repository();

        assert_eq!(repo.get_by_user("nobody").unwrap(), None);
    }
}
