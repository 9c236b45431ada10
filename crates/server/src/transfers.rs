//! Transfers API endpoints

use api_types::transaction::{TransactionResponse, TransactionStatus as ApiStatus, TransferNew};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::{TypedHeader, typed_header::TypedHeaderRejection};

use crate::{
    ServerError,
    server::{ClientIdHeader, ServerState},
};

fn map_status(status: engine::TransactionStatus) -> ApiStatus {
    match status {
        engine::TransactionStatus::Completed => ApiStatus::Completed,
        engine::TransactionStatus::Failed => ApiStatus::Failed,
    }
}

fn map_receipt(receipt: engine::TransferReceipt) -> TransactionResponse {
    TransactionResponse {
        transaction_id: receipt.transaction_id,
        source_account_id: receipt.source_account_id,
        destination_account_id: receipt.destination_account_id,
        amount: receipt.amount,
        date: receipt.date,
        status: map_status(receipt.status),
        message: receipt.message,
    }
}

/// Rejected transfers are answered with 200 and a `FAILED` body.
pub async fn transfer_new(
    State(state): State<ServerState>,
    Json(payload): Json<TransferNew>,
) -> Result<Json<TransactionResponse>, ServerError> {
    let receipt = state
        .engine
        .execute_transfer(engine::TransferCmd::new(
            payload.source_account_id,
            payload.destination_account_id,
            payload.amount,
        ))
        .await?;

    Ok(Json(map_receipt(receipt)))
}

pub async fn list(
    State(state): State<ServerState>,
    Path(account_id): Path<i64>,
) -> Result<Json<Vec<TransactionResponse>>, ServerError> {
    list_for_account(&state, account_id).await
}

pub async fn list_by_header(
    State(state): State<ServerState>,
    header: Result<TypedHeader<ClientIdHeader>, TypedHeaderRejection>,
) -> Result<Json<Vec<TransactionResponse>>, ServerError> {
    let TypedHeader(ClientIdHeader(account_id)) =
        header.map_err(|err| ServerError::Generic(err.to_string()))?;
    list_for_account(&state, account_id).await
}

async fn list_for_account(
    state: &ServerState,
    account_id: i64,
) -> Result<Json<Vec<TransactionResponse>>, ServerError> {
    let transactions = state
        .engine
        .list_transactions_for_account(account_id)
        .await?
        .into_iter()
        .map(map_receipt)
        .collect();

    Ok(Json(transactions))
}

pub async fn get_detail(
    State(state): State<ServerState>,
    Path(transaction_id): Path<i64>,
) -> Result<Json<TransactionResponse>, ServerError> {
    let receipt = state.engine.transaction_details(transaction_id).await?;
    Ok(Json(map_receipt(receipt)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(transaction_id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_transaction(transaction_id).await?;
    Ok(StatusCode::OK)
}
