//! Request logging middleware.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the entire request lifecycle, so the database diagnostics logged
//! while serving a hit carry the request_id of the hit.

use std::time::Instant;

use axum::{extract::Request, http::header::HOST, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request ID, available to handlers through request extensions.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that logs the beginning and end of every request inside a request span.
///
/// This should be the outermost layer so the span wraps all request processing.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let host = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.host())
        .unwrap_or_default()
        .to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        host = %host,
        url = %uri,
        duration_ms = tracing::field::Empty,
    );

    request.extensions_mut().insert(RequestId(request_id));

    async move {
        tracing::info!("begin handling request");
        let start = Instant::now();

        let response = next.run(request).await;

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "end handling request"
        );

        response
    }
    .instrument(span)
    .await
}
