//! Handler function for playing a quiz round.
//!
//! The caller names a category (0 for all) and the question ids already
//! seen; the response is one of the remaining questions, picked uniformly
//! at random. Running out of questions ends the round with a 404.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::Question;
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizPayload {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizPayload>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::not_found)?;
    let category = payload.quiz_category.ok_or(ApiError::NotFound)?;
    let previous = payload.previous_questions.ok_or(ApiError::NotFound)?;

    let candidates = if category.id == 0 {
        queries::all_questions(&state.pool).await
    } else {
        queries::questions_in_category(&state.pool, category.id).await
    }
    .map_err(ApiError::not_found)?;

    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();
    if remaining.is_empty() {
        return Err(ApiError::NotFound);
    }

    let question = &remaining[fastrand::usize(..remaining.len())];
    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
