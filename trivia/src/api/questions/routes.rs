//! Defines the HTTP routes for questions.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/:question_id", delete(handlers::delete_question))
        .route("/questions/search", post(handlers::search_questions))
}
