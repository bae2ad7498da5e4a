//! Error types for the trivia backend.
//!
//! Nearly every failure funnels into a catch-all 404; only the category
//! map surfaces a 500. Causes are logged before the collapse.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::error::error_response;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,
    #[error("Internal application error")]
    Internal,
}

impl ApiError {
    /// Logs the cause and collapses it to the catch-all 404.
    pub fn not_found(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::NotFound
    }

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
