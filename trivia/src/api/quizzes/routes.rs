//! Defines the HTTP route for playing a quiz.

use axum::routing::post;
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(handlers::play_quiz))
}
