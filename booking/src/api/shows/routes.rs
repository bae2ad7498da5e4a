//! Defines the HTTP routes for shows.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(handlers::list_shows))
        .route("/shows/create", post(handlers::create_show))
}
