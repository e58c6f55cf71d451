use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::aggregation::{self, SpendingTrends};
use crate::constants::MAX_TREND_DAYS;
use crate::errors::{Result, ValidationError};
use crate::utils::time_utils::{trailing_days, Clock};

use super::transactions_model::{NewTransaction, Transaction, TransactionFilter};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};

pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        TransactionService { repository, clock }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(&self, mut new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        new_transaction.user_id = new_transaction.user_id.trim().to_string();
        new_transaction.description = new_transaction.description.trim().to_string();
        if new_transaction.date.is_none() {
            new_transaction.date = Some(self.clock.today());
        }

        let created = self.repository.create(new_transaction).await?;
        info!(
            "Added transaction {} for user {}",
            created.id, created.user_id
        );
        Ok(created)
    }

    fn get_transactions(&self, user_id: &str, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        filter.validate()?;
        self.repository.list_by_user(user_id, filter)
    }

    fn get_spending_trends(&self, user_id: &str, days: u32) -> Result<SpendingTrends> {
        if days == 0 || days > MAX_TREND_DAYS {
            return Err(ValidationError::OutOfRange {
                field: "days".to_string(),
                message: format!("must be between 1 and {}", MAX_TREND_DAYS),
            }
            .into());
        }

        let today = self.clock.today();
        let window = trailing_days(today, days);
        let filter = match (window.first(), window.last()) {
            (Some(start), Some(end)) => TransactionFilter::between(*start, *end),
            _ => TransactionFilter::default(),
        };
        let transactions = self.repository.list_by_user(user_id, &filter)?;
        debug!(
            "Computing {}-day spending trend for user {} over {} transactions",
            days,
            user_id,
            transactions.len()
        );

        Ok(SpendingTrends {
            daily_spending: aggregation::daily_trend(&transactions, today, days),
            category_spending: aggregation::category_trend(&transactions, today, days),
        })
    }
}
