use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use savings_predictor_core::{
    profiles::{ProfileService, ProfileServiceTrait},
    savings::{SavingsPredictor, SavingsRates, SavingsService, SavingsServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
    utils::{Clock, SystemClock},
};
use savings_predictor_storage_sqlite::{db, ProfileRepository, TransactionRepository};

use crate::config::Config;

pub struct AppState {
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub profile_service: Arc<dyn ProfileServiceTrait>,
    pub savings_service: Arc<dyn SavingsServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    build_state_with_clock(config, Arc::new(SystemClock)).await
}

/// Wires repositories and services against the database in `config`,
/// using `clock` for every "today"-relative computation.
pub async fn build_state_with_clock(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<Arc<AppState>> {
    let rates = match &config.savings_rates_path {
        Some(path) => SavingsRates::from_path(path)?,
        None => SavingsRates::default(),
    };
    tracing::info!(
        "Savings rates configured for {} categories (baseline {})",
        rates.configured_categories(),
        rates.baseline_rate
    );

    let (pool, writer) = db::open(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let profile_repository = Arc::new(ProfileRepository::new(pool, writer));

    let transaction_service = Arc::new(TransactionService::new(
        transaction_repository.clone(),
        clock.clone(),
    ));
    let profile_service = Arc::new(ProfileService::new(profile_repository));
    let savings_service = Arc::new(SavingsService::new(
        profile_service.clone(),
        transaction_repository,
        SavingsPredictor::new(rates),
        clock,
    ));

    Ok(Arc::new(AppState {
        transaction_service,
        profile_service,
        savings_service,
    }))
}
