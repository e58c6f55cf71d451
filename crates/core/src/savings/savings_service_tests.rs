use super::*;
use crate::aggregation::AggregationPeriod;
use crate::errors::{Error, Result};
use crate::profiles::{Occupation, Profile, ProfileServiceTrait};
use crate::transactions::{
    Category, NewTransaction, Transaction, TransactionFilter, TransactionRepositoryTrait,
};
use crate::utils::time_utils::FixedClock;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockProfileService {
    profiles: Mutex<HashMap<String, Profile>>,
}

impl MockProfileService {
    fn with_profile(user_id: &str) -> Self {
        let service = Self::default();
        service.profiles.lock().unwrap().insert(
            user_id.to_string(),
            Profile {
                user_id: user_id.to_string(),
                age: 30,
                dependents: 1,
                occupation: Occupation::Salaried,
            },
        );
        service
    }
}

#[async_trait]
impl ProfileServiceTrait for MockProfileService {
    async fn save_profile(&self, profile: Profile) -> Result<Profile> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile.clone());
        Ok(profile)
    }

    fn get_profile(&self, user_id: &str) -> Result<Profile> {
        self.profiles
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Profile not found for user {}", user_id)))
    }
}

#[derive(Default)]
struct MockTransactionRepository {
    transactions: Mutex<Vec<Transaction>>,
}

impl MockTransactionRepository {
    fn add(&self, user_id: &str, category: Category, amount: Decimal, date: NaiveDate) {
        let mut transactions = self.transactions.lock().unwrap();
        let id = format!("tx-{}", transactions.len() + 1);
        transactions.push(Transaction {
            id,
            user_id: user_id.to_string(),
            category,
            amount,
            description: String::new(),
            date,
        });
    }
}

#[async_trait]
impl TransactionRepositoryTrait for MockTransactionRepository {
    async fn create(&self, _new_transaction: NewTransaction) -> Result<Transaction> {
        unimplemented!()
    }

    fn list_by_user(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && filter.contains(t.date))
            .cloned()
            .collect())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service(
    profiles: MockProfileService,
    repository: Arc<MockTransactionRepository>,
    rates: SavingsRates,
) -> SavingsService {
    SavingsService::new(
        Arc::new(profiles),
        repository,
        SavingsPredictor::new(rates),
        Arc::new(FixedClock(date(2024, 1, 17))),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_prediction_requires_profile() {
    let repository = Arc::new(MockTransactionRepository::default());
    repository.add("user123", Category::Groceries, dec!(150), date(2024, 1, 15));
    let service = service(MockProfileService::default(), repository, SavingsRates::default());

    let result = service.predict_savings("user123", AggregationPeriod::All);

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_prediction_over_all_transactions() {
    let repository = Arc::new(MockTransactionRepository::default());
    repository.add("user123", Category::Groceries, dec!(100), date(2024, 1, 15));
    repository.add("user123", Category::Groceries, dec!(50), date(2023, 11, 2));
    repository.add("someone_else", Category::Groceries, dec!(999), date(2024, 1, 15));
    let rates = SavingsRates::baseline_only(dec!(0.10))
        .unwrap()
        .with_rate(Category::Groceries, dec!(0.20))
        .unwrap();
    let service = service(MockProfileService::with_profile("user123"), repository, rates);

    let prediction = service
        .predict_savings("user123", AggregationPeriod::All)
        .unwrap();

    let groceries = &prediction.predictions[&Category::Groceries];
    assert_eq!(groceries.actual_expense, dec!(150));
    assert_eq!(groceries.potential_savings, dec!(30));
    assert_eq!(groceries.savings_percentage, dec!(20));
}

#[test]
fn test_prediction_respects_period() {
    let repository = Arc::new(MockTransactionRepository::default());
    // 2024-01-17 is a Wednesday; the week starts on Monday 2024-01-15
    repository.add("user123", Category::Transport, dec!(40), date(2024, 1, 16));
    repository.add("user123", Category::Transport, dec!(60), date(2024, 1, 10));
    repository.add("user123", Category::Transport, dec!(500), date(2023, 12, 30));
    let service = service(
        MockProfileService::with_profile("user123"),
        repository,
        SavingsRates::default(),
    );

    let week = service
        .predict_savings("user123", AggregationPeriod::Week)
        .unwrap();
    let month = service
        .predict_savings("user123", AggregationPeriod::Month)
        .unwrap();
    let day = service
        .predict_savings("user123", AggregationPeriod::Day)
        .unwrap();

    assert_eq!(week.totals.actual_expenses, dec!(40));
    assert_eq!(month.totals.actual_expenses, dec!(100));
    assert!(day.predictions.is_empty());
    assert_eq!(day.totals.savings_percentage, Decimal::ZERO);
}

#[test]
fn test_profile_without_transactions_yields_empty_prediction() {
    let service = service(
        MockProfileService::with_profile("user123"),
        Arc::new(MockTransactionRepository::default()),
        SavingsRates::default(),
    );

    let prediction = service
        .predict_savings("user123", AggregationPeriod::All)
        .unwrap();

    assert!(prediction.predictions.is_empty());
    assert_eq!(prediction.totals.actual_expenses, Decimal::ZERO);
    assert_eq!(service.rates().configured_categories(), Category::ALL.len());
}
