//! Hit counter handler.
//!
//! Each hit resolves the connection settings, connects to the database,
//! increments the counter and reports the new value with the build version.

use axum::{extract::State, Extension, Json};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::version::APP_VERSION;

/// Response body of `/`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitsResponse {
    pub app_version: &'static str,
    pub hits_counter: i64,
}

/// Count a hit. The whole database interaction runs under `database.timeout_seconds`.
#[instrument(name = "hits::index", skip(state, request_id))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<HitsResponse>, AppError> {
    let deadline = state.config.database.timeout();

    let hits_counter = tokio::time::timeout(deadline, record_hit(&state))
        .await
        .map_err(|_| AppError::Timeout(deadline))??;

    tracing::debug!(request_id = %request_id.0, hits_counter, "Counter incremented");

    Ok(Json(HitsResponse {
        app_version: APP_VERSION,
        hits_counter,
    }))
}

async fn record_hit(state: &AppState) -> Result<i64, AppError> {
    let connection_string = state
        .settings
        .load()
        .resolve(state.secrets.as_ref())
        .await?;
    let store = state.backend.connect(&connection_string).await?;
    store.increment().await
}
