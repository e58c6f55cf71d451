use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use savings_predictor_core::{
    aggregation::SpendingTrends,
    constants::DEFAULT_TREND_DAYS,
    transactions::{NewTransaction, Transaction, TransactionFilter},
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{
        NewTransactionRequest, SpendingTrendsQuery, TransactionCreatedResponse,
        TransactionListQuery,
    },
};

async fn get_transactions(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    query: Result<Query<TransactionListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let Query(query) = query?;
    let filter = TransactionFilter {
        start_date: query.start_date,
        end_date: query.end_date,
    };
    let transactions = state
        .transaction_service
        .get_transactions(&user_id, &filter)?;
    Ok(Json(transactions))
}

async fn add_transaction(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewTransactionRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TransactionCreatedResponse>)> {
    let Json(request) = payload?;
    let new_transaction = NewTransaction::try_from(request)?;
    let created = state
        .transaction_service
        .create_transaction(new_transaction)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(TransactionCreatedResponse {
            id: created.id,
            message: "Transaction added successfully".to_string(),
        }),
    ))
}

async fn get_spending_trends(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    query: Result<Query<SpendingTrendsQuery>, QueryRejection>,
) -> ApiResult<Json<SpendingTrends>> {
    let Query(query) = query?;
    let days = query.days.unwrap_or(DEFAULT_TREND_DAYS);
    let trends = state
        .transaction_service
        .get_spending_trends(&user_id, days)?;
    Ok(Json(trends))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions", post(add_transaction))
        .route("/transactions/{user_id}", get(get_transactions))
        .route("/spending-trends/{user_id}", get(get_spending_trends))
}
