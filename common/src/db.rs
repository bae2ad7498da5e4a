//! SQLite pool construction.
//!
//! All three services store their records in a single SQLite database
//! file; the pool is created up front and shared through the router state.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Opens a pool on the given `sqlite://` URL, creating the database file
/// if it does not exist. Foreign key enforcement is switched on for every
/// connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}
