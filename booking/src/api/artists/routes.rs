//! Defines the HTTP routes for artists.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/artists", get(handlers::list_artists))
        .route("/artists/search", post(handlers::search_artists))
        .route("/artists/create", post(handlers::create_artist))
        .route("/artists/:artist_id", get(handlers::show_artist))
        .route("/artists/:artist_id/edit", post(handlers::edit_artist))
}
