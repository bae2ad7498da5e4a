//! The JSON error envelope shared by all three services.
//!
//! Every error response, whether produced by a handler or a fallback,
//! carries the same body shape: `{"success": false, "error": <status>,
//! "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Builds a response with the given status and the envelope body.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody::new(status, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_status_code() {
        let body = ErrorBody::new(StatusCode::NOT_FOUND, "resource not found");
        assert!(!body.success);
        assert_eq!(body.error, 404);
        assert_eq!(body.message, "resource not found");
    }

    #[test]
    fn response_status_matches_body() {
        let resp = error_response(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
