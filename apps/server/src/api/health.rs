use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use crate::{main_lib::AppState, models::HealthResponse};

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        categories_configured: state.savings_service.rates().configured_categories(),
        timestamp: Utc::now(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
