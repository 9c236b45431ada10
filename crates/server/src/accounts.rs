//! Accounts API endpoints.
//!
//! Reading or updating a missing account answers 200 with a `null` body.

use api_types::account::{AccountNew, AccountUpdate, AccountView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::{TypedHeader, typed_header::TypedHeaderRejection};

use crate::{
    ServerError,
    server::{AccountIdHeader, ServerState},
};

fn map_account(account: engine::Account) -> AccountView {
    AccountView {
        account_id: account.id,
        client_id: account.client_id,
        account_key: account.account_key,
        balance: account.balance,
        account_type: account.account_type,
        bank: account.bank,
        creation_date: account.creation_date,
        modification_date: account.modification_date,
    }
}

pub async fn account_new(
    State(state): State<ServerState>,
    Json(payload): Json<AccountNew>,
) -> Result<(StatusCode, Json<AccountView>), ServerError> {
    let account = state
        .engine
        .new_account(engine::AccountNew {
            client_id: payload.client_id,
            account_key: payload.account_key,
            initial_balance: payload.initial_balance,
            account_type: payload.account_type,
            bank: payload.bank,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_account(account))))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<AccountView>>, ServerError> {
    let accounts = state
        .engine
        .accounts()
        .await?
        .into_iter()
        .map(map_account)
        .collect();
    Ok(Json(accounts))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(account_id): Path<i64>,
) -> Result<Json<Option<AccountView>>, ServerError> {
    let account = state.engine.account(account_id).await?;
    Ok(Json(account.map(map_account)))
}

pub async fn get_by_header(
    State(state): State<ServerState>,
    header: Result<TypedHeader<AccountIdHeader>, TypedHeaderRejection>,
) -> Result<Json<Option<AccountView>>, ServerError> {
    let TypedHeader(AccountIdHeader(account_id)) =
        header.map_err(|err| ServerError::Generic(err.to_string()))?;
    let account = state.engine.account(account_id).await?;
    Ok(Json(account.map(map_account)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(account_id): Path<i64>,
    Json(payload): Json<AccountUpdate>,
) -> Result<Json<Option<AccountView>>, ServerError> {
    let account = state
        .engine
        .update_account(
            account_id,
            engine::AccountPatch {
                client_id: payload.client_id,
                account_key: payload.account_key,
                account_type: payload.account_type,
                bank: payload.bank,
            },
        )
        .await?;
    Ok(Json(account.map(map_account)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(account_id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_account(account_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
