//! Typed client for the Savings Predictor HTTP API.
//!
//! Reads are retried on any transient failure (connection errors, timeouts,
//! 502/503/504) according to the client's [`RetryPolicy`]. Writes are
//! retried only when the server could not be reached.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use log::debug;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use savings_predictor_core::aggregation::{AggregationPeriod, SpendingTrends};
use savings_predictor_core::constants::DATE_FORMAT;
use savings_predictor_core::profiles::Profile;
use savings_predictor_core::quick_entry::ParsedTransaction;
use savings_predictor_core::savings::SavingsPrediction;
use savings_predictor_core::transactions::{NewTransaction, Transaction};

use crate::errors::{ClientError, Result};
use crate::models::{CreatedTransaction, ErrorBody, HealthStatus, SavedProfile};
use crate::retry::{retry_with_backoff_if, RetryPolicy, Sleeper, TokioSleeper};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct SavingsApiClient {
    http: reqwest::Client,
    base_url: Url,
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl SavingsApiClient {
    /// Creates a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:5000`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Configuration(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "Base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Configuration(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            retry: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Configuration(format!("Base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn send<T, B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        should_retry: fn(&ClientError) -> bool,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        retry_with_backoff_if(&self.retry, self.sleeper.as_ref(), should_retry, || {
            debug!("[SavingsApi] {} {}", method, url);
            let mut request = self.http.request(method.clone(), url.clone());
            if let Some(body) = body {
                request = request.json(body);
            }
            async move {
                let response = request.send().await?;
                parse_response(response).await
            }
        })
        .await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.send::<T, ()>(Method::GET, url, None, ClientError::is_transient)
            .await
    }

    /// A timed-out POST may already be committed, so it is only re-sent
    /// when the server was never reached.
    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<T> {
        self.send(Method::POST, url, Some(body), ClientError::is_unreachable)
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transactions
    // ─────────────────────────────────────────────────────────────────────────

    /// Lists a user's transactions, optionally bounded by inclusive dates.
    pub async fn get_transactions(
        &self,
        user_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>> {
        let mut url = self.endpoint(&["transactions", user_id])?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(start) = start_date {
                query.append_pair("start_date", &start.format(DATE_FORMAT).to_string());
            }
            if let Some(end) = end_date {
                query.append_pair("end_date", &end.format(DATE_FORMAT).to_string());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        self.get(url).await
    }

    pub async fn add_transaction(&self, transaction: &NewTransaction) -> Result<CreatedTransaction> {
        let url = self.endpoint(&["transactions"])?;
        self.post(url, transaction).await
    }

    /// Parses `text` on the server and records the result for `user_id`.
    pub async fn quick_add(&self, user_id: &str, text: &str) -> Result<CreatedTransaction> {
        let parsed = self.parse_transaction(text).await?;
        self.add_transaction(&parsed.into_new_transaction(user_id, None))
            .await
    }

    pub async fn get_spending_trends(&self, user_id: &str, days: Option<u32>) -> Result<SpendingTrends> {
        let mut url = self.endpoint(&["spending-trends", user_id])?;
        if let Some(days) = days {
            url.query_pairs_mut().append_pair("days", &days.to_string());
        }
        self.get(url).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Predictions and profiles
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn predict_savings(
        &self,
        user_id: &str,
        period: AggregationPeriod,
    ) -> Result<SavingsPrediction> {
        let mut url = self.endpoint(&["predict", user_id])?;
        url.query_pairs_mut().append_pair("period", period.as_str());
        self.get(url).await
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Profile> {
        let url = self.endpoint(&["profile", user_id])?;
        self.get(url).await
    }

    pub async fn save_profile(&self, profile: &Profile) -> Result<SavedProfile> {
        let url = self.endpoint(&["profile"])?;
        self.post(url, profile).await
    }

    pub async fn parse_transaction(&self, text: &str) -> Result<ParsedTransaction> {
        let url = self.endpoint(&["parse-transaction"])?;
        self.post(url, &json!({ "text": text })).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(&["health"])?;
        self.get(url).await
    }
}

/// Turns a response into `T`, or into a classified error for non-2xx.
async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|err| err.message)
            .unwrap_or_else(|| body.chars().take(200).collect());
        return Err(ClientError::from_status(status, message));
    }

    serde_json::from_str(&body).map_err(|e| {
        ClientError::Decode(format!(
            "{} - {}",
            e,
            body.chars().take(200).collect::<String>()
        ))
    })
}
