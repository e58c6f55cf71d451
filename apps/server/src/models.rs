//! Request and response bodies for the HTTP API.
//!
//! Create requests use optional fields so that a missing field surfaces as
//! a validation error naming the field.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use savings_predictor_core::aggregation::AggregationPeriod;
use savings_predictor_core::errors::{Error, Result, ValidationError};
use savings_predictor_core::profiles::{Occupation, Profile};
use savings_predictor_core::transactions::{Category, NewTransaction};

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| Error::from(ValidationError::MissingField(field.to_string())))
}

#[derive(Debug, Deserialize)]
pub struct NewTransactionRequest {
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TryFrom<NewTransactionRequest> for NewTransaction {
    type Error = Error;

    fn try_from(req: NewTransactionRequest) -> Result<Self> {
        let user_id = required(req.user_id, "user_id")?;
        let category: Category = required(req.category, "category")?
            .parse()
            .map_err(|e: String| Error::from(ValidationError::InvalidInput(e)))?;
        let amount = required(req.amount, "amount")?;
        let description = required(req.description, "description")?;
        Ok(NewTransaction {
            user_id,
            category,
            amount,
            description,
            date: req.date,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionCreatedResponse {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionListQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpendingTrendsQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictQuery {
    #[serde(default)]
    pub period: AggregationPeriod,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub user_id: Option<String>,
    pub age: Option<i32>,
    pub dependents: Option<i32>,
    pub occupation: Option<String>,
}

impl TryFrom<ProfileRequest> for Profile {
    type Error = Error;

    fn try_from(req: ProfileRequest) -> Result<Self> {
        let occupation: Occupation = required(req.occupation, "occupation")?
            .parse()
            .map_err(|e: String| Error::from(ValidationError::InvalidInput(e)))?;
        Ok(Profile {
            user_id: required(req.user_id, "user_id")?,
            age: required(req.age, "age")?,
            dependents: required(req.dependents, "dependents")?,
            occupation,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileSavedResponse {
    pub message: String,
    pub profile: Profile,
}

#[derive(Debug, Deserialize)]
pub struct ParseTransactionRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub categories_configured: usize,
    pub timestamp: DateTime<Utc>,
}
