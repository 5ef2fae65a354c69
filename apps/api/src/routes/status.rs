//! Status-check log endpoints — a generic "client X was here" ledger.

use axum::extract::State;

use crate::errors::{AppError, Json};
use crate::models::status::{StatusCheckCreate, StatusCheckRecord};
use crate::state::AppState;

/// Hard cap on how many status records a single listing returns.
const STATUS_LIST_LIMIT: i64 = 1000;

/// POST /api/status
///
/// Unlike the suggestion path, a store failure here does surface as a 500:
/// persisting the ping is the entire point of the endpoint.
pub async fn handle_create_status(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheckRecord>, AppError> {
    let record = StatusCheckRecord::new(input.client_name);
    state.store.insert_status_check(&record).await?;
    Ok(Json(record))
}

/// GET /api/status
///
/// Returns at most [`STATUS_LIST_LIMIT`] records, in no guaranteed order.
pub async fn handle_list_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheckRecord>>, AppError> {
    let records = state.store.list_status_checks(STATUS_LIST_LIMIT).await?;
    Ok(Json(records))
}
