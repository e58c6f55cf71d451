use crate::aggregation::SpendingTrends;
use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionFilter};
use async_trait::async_trait;

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Persists a new transaction and returns it with its assigned id.
    /// `new_transaction.date` must already be resolved.
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    /// Lists a user's transactions, newest date first.
    fn list_by_user(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    fn get_transactions(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>>;
    fn get_spending_trends(&self, user_id: &str, days: u32) -> Result<SpendingTrends>;
}
