//! Liveness probe for container orchestration.

use axum::http::StatusCode;

/// Readiness handler.
///
/// Returns 200 with an empty body. The database is deliberately not consulted:
/// the probe only tells the orchestrator the process can answer HTTP.
pub async fn ready() -> StatusCode {
    StatusCode::OK
}
