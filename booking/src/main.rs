//! Main entry point for the booking backend.
//!
//! This file loads configuration, sets up the database pool, and serves
//! the Axum application.

use std::net::SocketAddr;

use booking::config::Config;
use booking::{app, database, AppState};

#[tokio::main]
async fn main() {
    common::telemetry::init("booking");

    let config = Config::load().expect("configuration");
    let pool = common::db::connect(&config.database_url)
        .await
        .expect("database pool");
    database::init_schema(&pool).await.expect("schema");

    let app = app(AppState { pool });

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await.expect("bind");
    axum::serve(listener, app).await.unwrap();
}
