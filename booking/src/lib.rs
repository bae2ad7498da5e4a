//! Library surface of the booking backend.
//!
//! Exposes the module tree and assembles the Axum router so that the
//! binary and the integration tests share one application definition.

pub mod api;
pub mod config;
pub mod database;
pub mod errors;

use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Builds the full booking router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .merge(api::venues::routes::router())
        .merge(api::artists::routes::router())
        .merge(api::shows::routes::router())
        .fallback(errors::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Welcome to the booking service!"
}
