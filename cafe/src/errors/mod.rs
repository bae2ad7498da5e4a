//! Error types for the cafe backend.
//!
//! Each endpoint collapses its failures into one fixed code: 404 for the
//! read/create paths, 422 for update/delete. Authorization failures pass
//! through with their own statuses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::error::error_response;
use thiserror::Error;

use crate::auth::AuthError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("unprocessable")]
    Unprocessable,
    #[error("internal server error")]
    Internal,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    /// Logs the cause and collapses it to the endpoint's 404.
    pub fn not_found(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::NotFound
    }

    /// Logs the cause and collapses it to the endpoint's 422.
    pub fn unprocessable(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::Unprocessable
    }

    /// Logs the cause and collapses it to a 500.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(err) => err.into_response(),
            Self::NotFound => error_response(StatusCode::NOT_FOUND, &self.to_string()),
            Self::Unprocessable => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, &self.to_string())
            }
            Self::Internal => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, &self.to_string())
            }
        }
    }
}

/// Fallback for paths outside the route table.
pub async fn fallback() -> Response {
    ApiError::NotFound.into_response()
}
