//! HTTP routes.
//!
//! - `/`: count a hit and return it as JSON
//! - `/health/ready`: liveness probe
//! - anything else: 404

mod health;
mod hits;

pub use hits::HitsResponse;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
///
/// Only `/` and the 404 fallback are request-logged; liveness probes stay quiet.
pub fn create_router(state: AppState) -> Router {
    // Hits mutate state on every request - never cache
    let hits_routes = Router::new()
        .route("/", any(hits::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer));

    // Liveness probe - no dependencies
    let health_routes = Router::new().route("/health/ready", any(health::ready));

    Router::new()
        .merge(hits_routes)
        .merge(health_routes)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
