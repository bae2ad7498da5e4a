//! SQL for the cafe backend, one function per operation.

use sqlx::SqlitePool;

use super::models::Drink;

pub async fn all_drinks(pool: &SqlitePool) -> Result<Vec<Drink>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM drinks ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn drink_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Drink>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM drinks WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn drink_by_title(pool: &SqlitePool, title: &str) -> Result<Option<Drink>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM drinks WHERE title = ?1")
        .bind(title)
        .fetch_optional(pool)
        .await
}

pub async fn insert_drink(
    pool: &SqlitePool,
    title: &str,
    recipe: &str,
) -> Result<Drink, sqlx::Error> {
    sqlx::query_as("INSERT INTO drinks (title, recipe) VALUES (?1, ?2) RETURNING *")
        .bind(title)
        .bind(recipe)
        .fetch_one(pool)
        .await
}

/// Rewrites title and recipe; false when the id is unknown.
pub async fn update_drink(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    recipe: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE drinks SET title = ?1, recipe = ?2 WHERE id = ?3")
        .bind(title)
        .bind(recipe)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_drink(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM drinks WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
