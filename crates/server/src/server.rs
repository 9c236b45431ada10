use axum::{
    Router,
    http::HeaderName,
    routing::{get, post},
};
use axum_extra::headers::{Error as AxumError, Header};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use crate::{accounts, clients, transfers};
use engine::Engine;

static ACCOUNT_ID_HEADER: HeaderName = HeaderName::from_static("account-id");
static CLIENT_ID_HEADER: HeaderName = HeaderName::from_static("client-id");

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Numeric id carried in a request header.
fn decode_id<'i, I>(values: &mut I) -> Result<i64, AxumError>
where
    I: Iterator<Item = &'i axum::http::HeaderValue>,
{
    let value = values.next().ok_or_else(AxumError::invalid)?;
    let Ok(value) = value.to_str() else {
        return Err(AxumError::invalid());
    };
    value.trim().parse().map_err(|_| AxumError::invalid())
}

fn encode_id<E: Extend<axum::http::HeaderValue>>(id: i64, values: &mut E) {
    values.extend(std::iter::once(axum::http::HeaderValue::from(id)));
}

/// `TypedHeader` for the "Account-Id" header used by `/api/accounts/details`.
#[derive(Debug)]
pub(crate) struct AccountIdHeader(pub i64);

impl Header for AccountIdHeader {
    fn name() -> &'static HeaderName {
        &ACCOUNT_ID_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        decode_id(values).map(Self)
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        encode_id(self.0, values);
    }
}

/// `TypedHeader` for the "Client-Id" header.
///
/// `/api/clients/details` reads a client with it, while
/// `/api/transfers/client-transactions` treats it as an account id.
#[derive(Debug)]
pub(crate) struct ClientIdHeader(pub i64);

impl Header for ClientIdHeader {
    fn name() -> &'static HeaderName {
        &CLIENT_ID_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        decode_id(values).map(Self)
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        encode_id(self.0, values);
    }
}

/// Build the application router around `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/api/transfers", post(transfers::transfer_new))
        .route(
            "/api/transfers/client-transactions",
            get(transfers::list_by_header),
        )
        .route("/api/transfers/client/{account_id}", get(transfers::list))
        .route(
            "/api/transfers/{transaction_id}",
            get(transfers::get_detail).delete(transfers::delete),
        )
        .route(
            "/api/accounts",
            post(accounts::account_new).get(accounts::list),
        )
        .route("/api/accounts/details", get(accounts::get_by_header))
        .route(
            "/api/accounts/{account_id}",
            get(accounts::get)
                .patch(accounts::update)
                .delete(accounts::delete),
        )
        .route("/api/clients", post(clients::client_new).get(clients::list))
        .route("/api/clients/details", get(clients::get_by_header))
        .route(
            "/api/clients/{client_id}",
            get(clients::get)
                .put(clients::replace)
                .patch(clients::update)
                .delete(clients::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down server");
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn id_header_parses_numbers() {
        let value = HeaderValue::from_static(" 42 ");
        let header = ClientIdHeader::decode(&mut std::iter::once(&value)).unwrap();
        assert_eq!(header.0, 42);
    }

    #[test]
    fn id_header_rejects_garbage_and_absence() {
        let value = HeaderValue::from_static("abc");
        assert!(AccountIdHeader::decode(&mut std::iter::once(&value)).is_err());
        assert!(AccountIdHeader::decode(&mut std::iter::empty()).is_err());
    }

    #[test]
    fn id_header_encodes_back() {
        let mut values = Vec::new();
        AccountIdHeader(7).encode(&mut values);
        assert_eq!(values, vec![HeaderValue::from_static("7")]);
    }
}
