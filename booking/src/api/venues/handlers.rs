//! Handler functions for the venue endpoints.
//!
//! Venues are listed grouped into city/state areas, searched by name
//! substring, and shown with their past and upcoming shows.

use axum::extract::{Path, State};
use axum::{Form, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use super::super::{FlashMessage, SearchForm, SearchResults};
use crate::database::models::{ArtistShow, NewVenue, Summary, Venue};
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

/// One distinct (city, state) pair and the venues in it.
#[derive(Debug, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

/// A venue together with its show history, split on the current time.
#[derive(Debug, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

pub async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<Area>>, ApiError> {
    let venues = queries::all_venues(&state.pool)
        .await
        .map_err(ApiError::internal)?;

    // The query orders by (city, state), so grouping is a single pass.
    let mut areas: Vec<Area> = Vec::new();
    for venue in venues {
        let summary = Summary {
            id: venue.id,
            name: venue.name,
        };
        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(summary);
            }
            _ => areas.push(Area {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }
    Ok(Json(areas))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResults<Venue>>, ApiError> {
    let data = queries::search_venues(&state.pool, &form.search_term)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(SearchResults {
        count: data.len(),
        data,
    }))
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> Result<Json<VenueDetail>, ApiError> {
    let venue = queries::venue_by_id(&state.pool, venue_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound)?;

    let now = Utc::now().naive_utc();
    let past_shows = queries::venue_shows(&state.pool, venue_id, now, true)
        .await
        .map_err(ApiError::internal)?;
    let upcoming_shows = queries::venue_shows(&state.pool, venue_id, now, false)
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(VenueDetail {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

pub async fn create_venue(
    State(state): State<AppState>,
    Form(form): Form<NewVenue>,
) -> Json<FlashMessage> {
    match queries::insert_venue(&state.pool, &form).await {
        Ok(_) => Json(FlashMessage::listed("Venue", &form.name)),
        Err(err) => {
            tracing::error!(error = %err, "venue insert failed");
            Json(FlashMessage::failed("Venue", &form.name))
        }
    }
}

pub async fn edit_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
    Form(form): Form<NewVenue>,
) -> Result<Json<Value>, ApiError> {
    let updated = queries::update_venue(&state.pool, venue_id, &form)
        .await
        .map_err(ApiError::internal)?;
    if !updated {
        return Err(ApiError::NotFound);
    }
    let venue = queries::venue_by_id(&state.pool, venue_id)
        .await
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(json!({ "success": true, "venue": venue })))
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = queries::delete_venue(&state.pool, venue_id)
        .await
        .map_err(ApiError::internal)?;
    if !deleted {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}
