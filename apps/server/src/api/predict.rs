use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use savings_predictor_core::savings::SavingsPrediction;

use crate::{error::ApiResult, main_lib::AppState, models::PredictQuery};

async fn predict_savings(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    query: Result<Query<PredictQuery>, QueryRejection>,
) -> ApiResult<Json<SavingsPrediction>> {
    let Query(query) = query?;
    let prediction = state
        .savings_service
        .predict_savings(&user_id, query.period)?;
    tracing::info!(
        user_id = %user_id,
        period = query.period.as_str(),
        "Predicted {} potential savings over {} categories",
        prediction.totals.potential_savings,
        prediction.predictions.len()
    );
    Ok(Json(prediction))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/predict/{user_id}", get(predict_savings))
}
