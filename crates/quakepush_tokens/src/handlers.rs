//! Handlers for the token endpoints
//!
//! Every storage failure is resolved here into a status code: throttling
//! becomes 503 so the caller can retry, anything else becomes 500. Nothing
//! is retried in-process.

use quakepush_common::{HttpStatusCode, PushResponse, StatusCode};
use quakepush_db::{StoreError, TokenStore};
use std::sync::Arc;
use tracing::{debug, error};

use crate::payload::CreateParams;
use crate::tables::TableMap;

/// Shared state for the token handlers
#[derive(Clone)]
pub struct TokenState {
    /// Storage backend holding one table per category
    pub store: Arc<dyn TokenStore>,

    /// Category to table resolution
    pub tables: TableMap,
}

impl TokenState {
    pub fn new(store: Arc<dyn TokenStore>, tables: TableMap) -> Self {
        Self { store, tables }
    }
}

/// Create the token record if needed and refresh its `UpdatedAt`.
///
/// # Responses
///
/// - 200 OK: record created or touched
/// - 500 Internal Server Error: storage failure
/// - 503 Service Unavailable: storage throttled the write
pub async fn create_or_update_token(
    store: &dyn TokenStore,
    table: &str,
    token: &str,
    time_epoch: i64,
    body: &str,
) -> PushResponse {
    let params = CreateParams::parse_lenient(body);
    debug!(
        table,
        token,
        uuid = params.uuid.as_deref(),
        min = params.min,
        "Registering token"
    );

    match store.upsert_token(table, token, time_epoch).await {
        Ok(()) => PushResponse::ok(),
        Err(err) => {
            error!(table, token, error = %err, "PutItem failed");
            failure_response(&err)
        }
    }
}

/// Remove the token record. A record that is already gone is a success.
///
/// # Responses
///
/// - 200 OK: record removed or absent
/// - 500 Internal Server Error: storage failure
/// - 503 Service Unavailable: storage throttled the delete
pub async fn delete_token(store: &dyn TokenStore, table: &str, token: &str) -> PushResponse {
    match store.delete_token(table, token).await {
        Ok(()) => PushResponse::ok(),
        Err(err) => {
            error!(table, token, error = %err, "DeleteItem failed");
            failure_response(&err)
        }
    }
}

fn failure_response(err: &StoreError) -> PushResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    PushResponse::from_status(status)
}
