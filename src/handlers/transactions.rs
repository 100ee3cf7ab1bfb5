use axum::{extract::State, response::Json};
use common::TransactionDto;
use serde::Deserialize;
use tracing::{debug, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::schemas::{AppState, MessageResponse};
use crate::services::TransactionService;
use crate::validation::TransactionPayload;

const DEFAULT_SKIP: u64 = 0;
const DEFAULT_LIMIT: u64 = 100;

/// Paging for the transaction list
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ListTransactionsQuery {
    /// Number of transactions to skip (default 0)
    pub skip: Option<u64>,
    /// Maximum number of transactions to return (default 100)
    pub limit: Option<u64>,
}

/// List transactions, newest first
#[utoipa::path(
    get,
    path = "/api/transactions",
    params(ListTransactionsQuery),
    responses(
        (status = 200, description = "One page of transactions", body = Vec<TransactionDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "transactions"
)]
#[instrument(skip(state))]
pub async fn get_transactions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListTransactionsQuery>,
) -> Result<Json<Vec<TransactionDto>>, ApiError> {
    let skip = query.skip.unwrap_or(DEFAULT_SKIP);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    debug!("Fetching transactions skip={} limit={}", skip, limit);

    let transactions = TransactionService::new(&state.db).list(skip, limit).await?;
    Ok(Json(transactions))
}

/// Get a single transaction by ID
#[utoipa::path(
    get,
    path = "/api/transactions/{transaction_id}",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction found", body = TransactionDto),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "transactions"
)]
#[instrument(skip(state))]
pub async fn get_transaction(
    State(state): State<AppState>,
    ApiPath(transaction_id): ApiPath<i32>,
) -> Result<Json<TransactionDto>, ApiError> {
    let transaction = TransactionService::new(&state.db).get(transaction_id).await?;
    Ok(Json(transaction))
}

/// Record a new transaction
#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = TransactionPayload,
    responses(
        (status = 200, description = "Transaction created", body = TransactionDto),
        (status = 400, description = "Invalid payload or unknown category", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "transactions"
)]
#[instrument(skip(state))]
pub async fn create_transaction(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TransactionPayload>,
) -> Result<Json<TransactionDto>, ApiError> {
    debug!("Creating transaction in category {}", payload.category_id);
    let transaction = TransactionService::new(&state.db).create(payload).await?;
    Ok(Json(transaction))
}

/// Replace an existing transaction
#[utoipa::path(
    put,
    path = "/api/transactions/{transaction_id}",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID")
    ),
    request_body = TransactionPayload,
    responses(
        (status = 200, description = "Transaction updated", body = TransactionDto),
        (status = 400, description = "Invalid payload or unknown category", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "transactions"
)]
#[instrument(skip(state))]
pub async fn update_transaction(
    State(state): State<AppState>,
    ApiPath(transaction_id): ApiPath<i32>,
    ValidatedJson(payload): ValidatedJson<TransactionPayload>,
) -> Result<Json<TransactionDto>, ApiError> {
    let transaction = TransactionService::new(&state.db)
        .update(transaction_id, payload)
        .await?;
    Ok(Json(transaction))
}

/// Delete a transaction
#[utoipa::path(
    delete,
    path = "/api/transactions/{transaction_id}",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction deleted", body = MessageResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "transactions"
)]
#[instrument(skip(state))]
pub async fn delete_transaction(
    State(state): State<AppState>,
    ApiPath(transaction_id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    TransactionService::new(&state.db)
        .delete(transaction_id)
        .await?;
    Ok(Json(MessageResponse::new("Transaction deleted successfully")))
}
