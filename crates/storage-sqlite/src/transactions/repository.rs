use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use savings_predictor_core::transactions::{
    NewTransaction, Transaction, TransactionFilter, TransactionRepositoryTrait,
};
use savings_predictor_core::Result;

use super::model::{NewTransactionDB, TransactionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::transactions;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let row = NewTransactionDB::from_domain(Uuid::new_v4().to_string(), new_transaction)?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let created = diesel::insert_into(transactions::table)
                    .values(&row)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Transaction::try_from(created)
            })
            .await
    }

    fn list_by_user(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = transactions::table
            .filter(transactions::user_id.eq(user_id))
            .select(TransactionDB::as_select())
            .into_boxed();
        if let Some(start) = filter.start_date {
            query = query.filter(transactions::date.ge(start));
        }
        if let Some(end) = filter.end_date {
            query = query.filter(transactions::date.le(end));
        }

        query
            .order((transactions::date.desc(), transactions::id.asc()))
            .load::<TransactionDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use savings_predictor_core::transactions::Category;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_repository() -> (TransactionRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let (pool, writer) = open(&db_path.to_string_lossy()).expect("Failed to open database");
        (TransactionRepository::new(pool, writer), temp_dir)
    }

    fn new_transaction(user_id: &str, amount: rust_decimal::Decimal, on: NaiveDate) -> NewTransaction {
        NewTransaction {
            user_id: user_id.to_string(),
            category: Category::EatingOut,
            amount,
            description: "Samosa".to_string(),
            date: Some(on),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_reads_back_the_write() {
        let (repo, _dir) = create_test_repository();

        let created = repo
            .create(new_transaction("user123", dec!(30.50), date(2024, 1, 15)))
            .await
            .unwrap();

        let listed = repo
            .list_by_user("user123", &TransactionFilter::default())
            .unwrap();
        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.amount, dec!(30.50));
        assert_eq!(created.category, Category::EatingOut);
        assert!(Uuid::parse_str(&created.id).is_ok());
    }

    #[tokio::test]
    async fn test_list_is_scoped_filtered_and_ordered() {
        let (repo, _dir) = create_test_repository();
        for (user, day) in [("user123", 10), ("user123", 20), ("user123", 15), ("other", 15)] {
            repo.create(new_transaction(user, dec!(10), date(2024, 1, day)))
                .await
                .unwrap();
        }

        let all = repo
            .list_by_user("user123", &TransactionFilter::default())
            .unwrap();
        let dates: Vec<NaiveDate> = all.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 20), date(2024, 1, 15), date(2024, 1, 10)]);

        let bounded = repo
            .list_by_user(
                "user123",
                &TransactionFilter::between(date(2024, 1, 15), date(2024, 1, 20)),
            )
            .unwrap();
        assert_eq!(bounded.len(), 2);

        assert!(repo
            .list_by_user("nobody", &TransactionFilter::default())
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_create_without_date_is_rejected() {
        let (repo, _dir) = create_test_repository();
        let mut input = new_transaction("user123", dec!(5), date(2024, 1, 1));
        input.date = None;

        assert!(repo.create(input).await.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_writes_are_all_stored() {
        let (repo, _dir) = create_test_repository();
        let repo = Arc::new(repo);

        let mut handles = Vec::new();
        for i in 0..20 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_transaction("user123", dec!(1), date(2024, 1, 1 + (i % 28))))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let listed = repo
            .list_by_user("user123", &TransactionFilter::default())
            .unwrap();
        assert_eq!(listed.len(), 20);
    }
}
