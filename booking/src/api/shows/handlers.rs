//! Handler functions for the show endpoints.
//!
//! A show links one artist to one venue at a start time; the listing
//! joins both sides.

use axum::extract::State;
use axum::{Form, Json};
use chrono::NaiveDateTime;
use serde::Deserialize;

use super::super::FlashMessage;
use crate::database::models::ShowListing;
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NewShowForm {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: String,
}

/// Accepts both the ISO form (`2026-01-01T20:00:00`) and the
/// space-separated form the listing form posts.
fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

pub async fn list_shows(State(state): State<AppState>) -> Result<Json<Vec<ShowListing>>, ApiError> {
    let shows = queries::all_shows(&state.pool)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(shows))
}

pub async fn create_show(
    State(state): State<AppState>,
    Form(form): Form<NewShowForm>,
) -> Json<FlashMessage> {
    let failed = FlashMessage {
        success: false,
        message: "An error occurred. Show could not be listed.".into(),
    };

    let Some(start_time) = parse_start_time(&form.start_time) else {
        return Json(failed);
    };

    match queries::insert_show(&state.pool, form.venue_id, form.artist_id, start_time).await {
        Ok(_) => Json(FlashMessage {
            success: true,
            message: "Show was successfully listed!".into(),
        }),
        Err(err) => {
            tracing::error!(error = %err, "show insert failed");
            Json(failed)
        }
    }
}
