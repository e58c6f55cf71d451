use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use savings_predictor_core::{
    errors::Error,
    quick_entry::{parse_transaction_text, ParsedTransaction},
};

use crate::{error::ApiResult, main_lib::AppState, models::ParseTransactionRequest};

async fn parse_transaction(
    payload: Result<Json<ParseTransactionRequest>, JsonRejection>,
) -> ApiResult<Json<ParsedTransaction>> {
    let Json(request) = payload?;
    let parsed = parse_transaction_text(&request.text).map_err(Error::from)?;
    Ok(Json(parsed))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/parse-transaction", post(parse_transaction))
}
