//! SQL for the trivia backend, one function per operation.

use sqlx::SqlitePool;

use super::models::{Category, Question};

pub async fn all_categories(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn category_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM categories WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_category(pool: &SqlitePool, kind: &str) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as("INSERT INTO categories (type) VALUES (?1) RETURNING id")
        .bind(kind)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

pub async fn count_questions(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn questions_page(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM questions ORDER BY id LIMIT ?1 OFFSET ?2")
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn all_questions(pool: &SqlitePool) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM questions ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn questions_in_category(
    pool: &SqlitePool,
    category: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM questions WHERE category = ?1 ORDER BY id")
        .bind(category)
        .fetch_all(pool)
        .await
}

pub async fn count_in_category(pool: &SqlitePool, category: i64) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions WHERE category = ?1")
        .bind(category)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn category_questions_page(
    pool: &SqlitePool,
    category: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM questions WHERE category = ?1 ORDER BY id LIMIT ?2 OFFSET ?3")
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

/// Case-insensitive substring match on the question text.
pub async fn count_search(pool: &SqlitePool, term: &str) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM questions WHERE question LIKE '%' || ?1 || '%'")
            .bind(term)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

pub async fn search_questions_page(
    pool: &SqlitePool,
    term: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM questions WHERE question LIKE '%' || ?1 || '%'
         ORDER BY id LIMIT ?2 OFFSET ?3",
    )
    .bind(term)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn insert_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO questions (question, answer, category, difficulty)
         VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Removes a question; false when the id is unknown.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
