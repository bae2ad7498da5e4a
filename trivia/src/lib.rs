//! Library surface of the trivia backend.
//!
//! Exposes the module tree and assembles the Axum router so that the
//! binary and the integration tests share one application definition.

pub mod api;
pub mod config;
pub mod database;
pub mod errors;

use axum::http::{header, Method};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Questions served per page throughout the API.
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Builds the full trivia router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(api::questions::routes::router())
        .merge(api::categories::routes::router())
        .merge(api::quizzes::routes::router())
        .fallback(errors::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
