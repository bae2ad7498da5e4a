//! Defines the HTTP routes for drinks.

use axum::routing::{get, patch};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/drinks",
            get(handlers::list_drinks).post(handlers::create_drink),
        )
        .route("/drinks-detail", get(handlers::drinks_detail))
        .route(
            "/drinks/:drink_id",
            patch(handlers::update_drink).delete(handlers::delete_drink),
        )
}
