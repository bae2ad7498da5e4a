//! Handler functions for the artist endpoints.

use axum::extract::{Path, State};
use axum::{Form, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use super::super::{FlashMessage, SearchForm, SearchResults};
use crate::database::models::{Artist, NewArtist, Summary, VenueShow};
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

/// An artist together with their show history, split on the current time.
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Summary>>, ApiError> {
    let artists = queries::all_artists(&state.pool)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(artists))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResults<Artist>>, ApiError> {
    let data = queries::search_artists(&state.pool, &form.search_term)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(SearchResults {
        count: data.len(),
        data,
    }))
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> Result<Json<ArtistDetail>, ApiError> {
    let artist = queries::artist_by_id(&state.pool, artist_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound)?;

    let now = Utc::now().naive_utc();
    let past_shows = queries::artist_shows(&state.pool, artist_id, now, true)
        .await
        .map_err(ApiError::internal)?;
    let upcoming_shows = queries::artist_shows(&state.pool, artist_id, now, false)
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(ArtistDetail {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

pub async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<NewArtist>,
) -> Json<FlashMessage> {
    match queries::insert_artist(&state.pool, &form).await {
        Ok(_) => Json(FlashMessage::listed("Artist", &form.name)),
        Err(err) => {
            tracing::error!(error = %err, "artist insert failed");
            Json(FlashMessage::failed("Artist", &form.name))
        }
    }
}

pub async fn edit_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
    Form(form): Form<NewArtist>,
) -> Result<Json<Value>, ApiError> {
    let updated = queries::update_artist(&state.pool, artist_id, &form)
        .await
        .map_err(ApiError::internal)?;
    if !updated {
        return Err(ApiError::NotFound);
    }
    let artist = queries::artist_by_id(&state.pool, artist_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(json!({ "success": true, "artist": artist })))
}
