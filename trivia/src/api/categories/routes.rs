//! Defines the HTTP routes for categories.

use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::get_categories))
        .route(
            "/categories/:category_id/questions",
            get(handlers::questions_by_category),
        )
}
