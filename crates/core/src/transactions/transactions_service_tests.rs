//! Unit tests for the transaction service.

use super::*;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::FixedClock;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockTransactionRepository {
    transactions: Mutex<Vec<Transaction>>,
}

#[async_trait]
impl TransactionRepositoryTrait for MockTransactionRepository {
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let mut transactions = self.transactions.lock().unwrap();
        let transaction = Transaction {
            id: format!("tx-{}", transactions.len() + 1),
            user_id: new_transaction.user_id,
            category: new_transaction.category,
            amount: new_transaction.amount,
            description: new_transaction.description,
            date: new_transaction
                .date
                .expect("service resolves the date before storing"),
        };
        transactions.push(transaction.clone());
        Ok(transaction)
    }

    fn list_by_user(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut found: Vec<Transaction> = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && filter.contains(t.date))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(found)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 1, 17)
}

fn service() -> (TransactionService, Arc<MockTransactionRepository>) {
    let repository = Arc::new(MockTransactionRepository::default());
    let service = TransactionService::new(repository.clone(), Arc::new(FixedClock(today())));
    (service, repository)
}

fn new_transaction(
    user_id: &str,
    category: Category,
    amount: Decimal,
    date: Option<NaiveDate>,
) -> NewTransaction {
    NewTransaction {
        user_id: user_id.to_string(),
        category,
        amount,
        description: "  Samosa  ".to_string(),
        date,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_create_defaults_date_to_today_and_trims() {
    let (service, _) = service();

    let created = service
        .create_transaction(new_transaction("user123", Category::EatingOut, dec!(30), None))
        .await
        .unwrap();

    assert_eq!(created.date, today());
    assert_eq!(created.description, "Samosa");
    assert!(!created.id.is_empty());
}

#[tokio::test]
async fn test_create_keeps_explicit_date() {
    let (service, _) = service();

    let created = service
        .create_transaction(new_transaction(
            "user123",
            Category::Groceries,
            dec!(100),
            Some(date(2024, 1, 15)),
        ))
        .await
        .unwrap();

    assert_eq!(created.date, date(2024, 1, 15));
}

#[tokio::test]
async fn test_invalid_transaction_is_not_stored() {
    let (service, repository) = service();

    let result = service
        .create_transaction(new_transaction("user123", Category::Groceries, dec!(-5), None))
        .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(repository.transactions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_returns_only_the_users_transactions() {
    let (service, _) = service();
    for (user, day) in [("user123", 10), ("user123", 15), ("other", 15)] {
        service
            .create_transaction(new_transaction(
                user,
                Category::Transport,
                dec!(20),
                Some(date(2024, 1, day)),
            ))
            .await
            .unwrap();
    }

    let listed = service
        .get_transactions("user123", &TransactionFilter::default())
        .unwrap();

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|t| t.user_id == "user123"));
    assert_eq!(listed[0].date, date(2024, 1, 15));

    let unknown = service
        .get_transactions("nobody", &TransactionFilter::default())
        .unwrap();
    assert!(unknown.is_empty());
}

#[test]
fn test_list_rejects_inverted_filter() {
    let (service, _) = service();
    let filter = TransactionFilter::between(date(2024, 1, 20), date(2024, 1, 1));

    assert!(service.get_transactions("user123", &filter).is_err());
}

#[tokio::test]
async fn test_spending_trends_window() {
    let (service, _) = service();
    for (amount, day) in [(dec!(100), 15), (dec!(50), 15), (dec!(30), 17), (dec!(999), 1)] {
        service
            .create_transaction(new_transaction(
                "user123",
                Category::Groceries,
                amount,
                Some(date(2024, 1, day)),
            ))
            .await
            .unwrap();
    }

    let trends = service.get_spending_trends("user123", 7).unwrap();

    assert_eq!(trends.daily_spending.len(), 7);
    assert_eq!(trends.daily_spending[0].date, date(2024, 1, 11));
    assert_eq!(trends.daily_spending[6].date, today());
    assert_eq!(trends.daily_spending[4].amount, dec!(150));
    assert_eq!(trends.daily_spending[6].amount, dec!(30));
    assert_eq!(trends.category_spending.len(), 1);
    assert_eq!(trends.category_spending[0].amount, dec!(180));
}

#[test]
fn test_spending_trends_for_unknown_user_are_zero_filled() {
    let (service, _) = service();

    let trends = service.get_spending_trends("nobody", 7).unwrap();

    assert_eq!(trends.daily_spending.len(), 7);
    assert!(trends.daily_spending.iter().all(|d| d.amount == Decimal::ZERO));
    assert!(trends.category_spending.is_empty());
}

#[test]
fn test_spending_trends_reject_out_of_range_days() {
    let (service, _) = service();

    for days in [0, 366] {
        assert!(matches!(
            service.get_spending_trends("user123", days),
            Err(Error::Validation(ValidationError::OutOfRange { .. }))
        ));
    }
}
