use crate::aggregation::AggregationPeriod;
use crate::errors::Result;
use crate::savings::{SavingsPrediction, SavingsRates};

/// Trait for savings prediction operations
pub trait SavingsServiceTrait: Send + Sync {
    /// Predicts savings from the user's spending over `period`.
    /// Fails with `NotFound` when the user has no profile.
    fn predict_savings(&self, user_id: &str, period: AggregationPeriod)
        -> Result<SavingsPrediction>;

    /// The rate table predictions are computed with.
    fn rates(&self) -> &SavingsRates;
}
