//! Request error taxonomy and its HTTP mapping.
//!
//! Every failure on the hit path becomes a 500 carrying the error text as a
//! plain-text body; unknown paths become a 404. Nothing is retried.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or incomplete connection settings
    #[error("{0}")]
    Config(String),

    /// Secret lookup failed or returned no usable value
    #[error("{0}")]
    SecretStore(String),

    /// Connect, ping or namespace enumeration failed
    #[error("{0}")]
    Connectivity(String),

    /// Counter increment or result decoding failed
    #[error("{0}")]
    Data(String),

    #[error("request deadline of {}s exceeded", .0.as_secs())]
    Timeout(Duration),

    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}
