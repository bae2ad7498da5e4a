//! Handler functions for the category endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use super::super::{category_map, PageQuery};
use crate::database::queries;
use crate::errors::ApiError;
use crate::{AppState, QUESTIONS_PER_PAGE};
use common::pagination;

pub async fn get_categories(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    // The one endpoint outside the catch-all contract; failures are a 500.
    let categories = category_map(&state.pool)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(json!({
        "success": true,
        "categories": categories,
    })))
}

pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    // An unknown category reports the catch-all 404 like every other
    // failure on this path.
    let category = queries::category_by_id(&state.pool, category_id)
        .await
        .map_err(ApiError::not_found)?
        .ok_or(ApiError::NotFound)?;

    let page = page.number();
    let total = queries::count_in_category(&state.pool, category_id)
        .await
        .map_err(ApiError::not_found)?;
    if !pagination::in_range(page, total, QUESTIONS_PER_PAGE) {
        return Err(ApiError::NotFound);
    }

    let slice = pagination::slice(page, QUESTIONS_PER_PAGE);
    let questions =
        queries::category_questions_page(&state.pool, category_id, slice.limit, slice.offset)
            .await
            .map_err(ApiError::not_found)?;

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total,
        "current_category": category.kind,
    })))
}
