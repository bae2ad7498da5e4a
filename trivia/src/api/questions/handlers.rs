//! Handler functions for the question endpoints.
//!
//! Listing and search are paginated ten to a page; a page past the data
//! is a 404, and so is nearly every other failure on these paths.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::super::{category_map, PageQuery};
use crate::database::queries;
use crate::errors::ApiError;
use crate::{AppState, QUESTIONS_PER_PAGE};
use common::pagination;

#[derive(Debug, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

pub async fn list_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let page = page.number();
    let categories = category_map(&state.pool)
        .await
        .map_err(ApiError::not_found)?;
    let total = queries::count_questions(&state.pool)
        .await
        .map_err(ApiError::not_found)?;
    if !pagination::in_range(page, total, QUESTIONS_PER_PAGE) {
        return Err(ApiError::NotFound);
    }

    let slice = pagination::slice(page, QUESTIONS_PER_PAGE);
    let questions = queries::questions_page(&state.pool, slice.limit, slice.offset)
        .await
        .map_err(ApiError::not_found)?;

    Ok(Json(json!({
        "success": true,
        "categories": categories,
        "questions": questions,
        "total_questions": total,
        "current_category": Value::Null,
    })))
}

pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::not_found)?;
    let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
        payload.question,
        payload.answer,
        payload.category,
        payload.difficulty,
    ) else {
        return Err(ApiError::NotFound);
    };

    queries::insert_question(&state.pool, &question, &answer, category, difficulty)
        .await
        .map_err(ApiError::not_found)?;

    Ok(Json(json!({ "success": true })))
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = queries::delete_question(&state.pool, question_id)
        .await
        .map_err(ApiError::not_found)?;
    if !deleted {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}

pub async fn search_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    payload: Result<Json<SearchPayload>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::not_found)?;
    let term = payload.search_term.unwrap_or_default();
    if term.is_empty() {
        // An empty term is rejected with the catch-all 404.
        return Err(ApiError::NotFound);
    }

    let page = page.number();
    let total = queries::count_search(&state.pool, &term)
        .await
        .map_err(ApiError::not_found)?;
    if !pagination::in_range(page, total, QUESTIONS_PER_PAGE) {
        return Err(ApiError::NotFound);
    }

    let slice = pagination::slice(page, QUESTIONS_PER_PAGE);
    let questions = queries::search_questions_page(&state.pool, &term, slice.limit, slice.offset)
        .await
        .map_err(ApiError::not_found)?;

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total,
    })))
}
