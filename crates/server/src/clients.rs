//! Clients API endpoints.

use api_types::client::{ClientRequest, ClientView};
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

fn map_client(client: engine::Client) -> ClientView {
    ClientView {
        client_id: client.id,
        name: client.name,
        last_name: client.last_name,
        document_type: client.document_type,
        document_number: client.document_number,
        email: client.email,
        phone: client.phone,
        creation_date: client.creation_date,
        modification_date: client.modification_date,
    }
}

fn fields(payload: ClientRequest) -> engine::ClientFields {
    engine::ClientFields {
        name: payload.name,
        last_name: payload.last_name,
        document_type: payload.document_type,
        document_number: payload.document_number,
        email: payload.email,
        phone: payload.phone,
    }
}

pub async fn client_new(
    State(state): State<ServerState>,
    Json(payload): Json<ClientRequest>,
) -> Result<Json<ClientView>, ServerError> {
    let client = state.engine.new_client(fields(payload)).await?;
    Ok(Json(map_client(client)))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ClientView>>, ServerError> {
    let clients = state
        .engine
        .clients()
        .await?
        .into_iter()
        .map(map_client)
        .collect();
    Ok(Json(clients))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(client_id): Path<i64>,
) -> Result<Json<Option<ClientView>>, ServerError> {
    let client = state.engine.client(client_id).await?;
    Ok(Json(client.map(map_client)))
}

pub async fn get_by_header(
    State(state): State<ServerState>,
    header: Result<TypedHeader<ClientIdHeader>, TypedHeaderRejection>,
) -> Result<Json<Option<ClientView>>, ServerError> {
    let TypedHeader(ClientIdHeader(client_id)) =
        header.map_err(|err| ServerError::Generic(err.to_string()))?;
    let client = state.engine.client(client_id).await?;
    Ok(Json(client.map(map_client)))
}

/// Full update (`PUT`): absent contact fields are cleared.
pub async fn replace(
    State(state): State<ServerState>,
    Path(client_id): Path<i64>,
    Json(payload): Json<ClientRequest>,
) -> Result<Json<Option<ClientView>>, ServerError> {
    let client = state
        .engine
        .replace_client(client_id, fields(payload))
        .await?;
    Ok(Json(client.map(map_client)))
}

/// Partial update (`PATCH`): absent fields are kept.
pub async fn update(
    State(state): State<ServerState>,
    Path(client_id): Path<i64>,
    Json(payload): Json<ClientRequest>,
) -> Result<Json<Option<ClientView>>, ServerError> {
    let client = state
        .engine
        .update_client(client_id, fields(payload))
        .await?;
    Ok(Json(client.map(map_client)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(client_id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_client(client_id).await?;
    Ok(StatusCode::OK)
}
