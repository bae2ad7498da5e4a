//! Error types for the booking backend.
//!
//! Handler failures collapse into one of two responses, both carrying the
//! shared JSON envelope. The underlying cause is kept in the logs only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::error::error_response;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Logs the cause and collapses it to a 500.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, &self.to_string())
    }
}

/// Fallback for paths outside the route table.
pub async fn fallback() -> Response {
    ApiError::NotFound.into_response()
}
