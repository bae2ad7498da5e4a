//! Central module for the trivia API endpoints.
//!
//! Each domain (questions, categories, quizzes) carries its own handlers
//! and routes; the pieces they share live here.

pub mod categories;
pub mod questions;
pub mod quizzes;

use std::collections::BTreeMap;

use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::queries;

/// `?page=N` query parameter. Unparseable values fall back to page 1
/// rather than rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn number(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|page| page.parse().ok())
            .unwrap_or(1)
    }
}

/// The `{"<id>": "<type>"}` category map several endpoints embed.
pub async fn category_map(pool: &SqlitePool) -> Result<BTreeMap<i64, String>, sqlx::Error> {
    let categories = queries::all_categories(pool).await?;
    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}
