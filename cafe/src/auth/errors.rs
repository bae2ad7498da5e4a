//! Error types for authorization failures.
//!
//! Token problems are a 401; a valid token lacking the needed permission
//! is a 403. Both use the shared JSON envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::error::error_response;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header is expected")]
    MissingHeader,
    #[error("authorization header must be a bearer token")]
    MalformedHeader,
    #[error("token is invalid or expired")]
    InvalidToken,
    #[error("permission not found: {0}")]
    Forbidden(String),
}

impl AuthError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        error_response(self.status(), &self.to_string())
    }
}
