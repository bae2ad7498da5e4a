//! Main entry point for the trivia backend.

use std::net::SocketAddr;

use trivia::config::Config;
use trivia::{app, database, AppState};

#[tokio::main]
async fn main() {
    common::telemetry::init("trivia");

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
