use std::sync::Arc;

use log::debug;

use crate::aggregation::{aggregate_by_category, AggregationPeriod};
use crate::errors::Result;
use crate::profiles::ProfileServiceTrait;
use crate::transactions::TransactionRepositoryTrait;
use crate::utils::time_utils::Clock;

use super::savings_model::SavingsPrediction;
use super::savings_predictor::SavingsPredictor;
use super::savings_rates::SavingsRates;
use super::savings_traits::SavingsServiceTrait;

pub struct SavingsService {
    profile_service: Arc<dyn ProfileServiceTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    predictor: SavingsPredictor,
    clock: Arc<dyn Clock>,
}

impl SavingsService {
    pub fn new(
        profile_service: Arc<dyn ProfileServiceTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        predictor: SavingsPredictor,
        clock: Arc<dyn Clock>,
    ) -> Self {
        SavingsService {
            profile_service,
            transaction_repository,
            predictor,
            clock,
        }
    }
}

impl SavingsServiceTrait for SavingsService {
    fn predict_savings(
        &self,
        user_id: &str,
        period: AggregationPeriod,
    ) -> Result<SavingsPrediction> {
        // The profile is not an input to the rules yet, but a prediction
        // is only offered to users who have one.
        let profile = self.profile_service.get_profile(user_id)?;

        let filter = period.filter(self.clock.today());
        let transactions = self.transaction_repository.list_by_user(user_id, &filter)?;
        let expenses = aggregate_by_category(&transactions);
        debug!(
            "Predicting savings for user {} ({}, {} period) across {} categories",
            profile.user_id,
            profile.occupation,
            period.as_str(),
            expenses.len()
        );

        Ok(self.predictor.predict(&expenses))
    }

    fn rates(&self) -> &SavingsRates {
        self.predictor.rates()
    }
}
