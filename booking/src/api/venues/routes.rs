//! Defines the HTTP routes for venues.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(handlers::list_venues))
        .route("/venues/search", post(handlers::search_venues))
        .route("/venues/create", post(handlers::create_venue))
        .route(
            "/venues/:venue_id",
            get(handlers::show_venue).delete(handlers::delete_venue),
        )
        .route("/venues/:venue_id/edit", post(handlers::edit_venue))
}
