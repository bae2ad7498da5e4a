//! Library surface of the cafe backend.
//!
//! Exposes the module tree and assembles the Axum router so that the
//! binary and the integration tests share one application definition.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;

use axum::Router;
use config::Config;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler; the config carries the token
/// secret the auth extractor verifies against.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

/// Builds the full cafe router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api::drinks::routes::router())
        .fallback(errors::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
