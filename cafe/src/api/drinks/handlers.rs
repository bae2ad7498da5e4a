//! Handler functions for the drink endpoints.
//!
//! Listing is public; everything else checks the caller's permissions.
//! Failures collapse to the endpoint's fixed code: 404 on the read and
//! create paths, 422 on update and delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::Claims;
use crate::database::models::{Drink, DrinkPayload};
use crate::database::queries;
use crate::errors::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DrinkBody {
    pub title: Option<String>,
    pub recipe: Option<Value>,
}

impl DrinkBody {
    /// Both fields are required; the recipe is flattened back to its
    /// stored string form.
    fn into_parts(self) -> Option<(String, String)> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let recipe = serde_json::to_string(&self.recipe?).ok()?;
        Some((title, recipe))
    }
}

fn into_payloads(drinks: Vec<Drink>) -> Result<Vec<DrinkPayload>, serde_json::Error> {
    drinks.into_iter().map(Drink::into_payload).collect()
}

pub async fn list_drinks(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    // The one endpoint without a collapse code of its own; failures are a 500.
    let drinks = queries::all_drinks(&state.pool)
        .await
        .map_err(ApiError::internal)?;
    let drinks = into_payloads(drinks).map_err(ApiError::internal)?;
    Ok(Json(json!({ "success": true, "drinks": drinks })))
}

pub async fn drinks_detail(
    State(state): State<AppState>,
    claims: Claims,
) -> Result<Json<Value>, ApiError> {
    claims.require("get:drinks-detail")?;
    let drinks = queries::all_drinks(&state.pool)
        .await
        .map_err(ApiError::not_found)?;
    let drinks = into_payloads(drinks).map_err(ApiError::not_found)?;
    Ok(Json(json!({ "success": true, "drinks": drinks })))
}

pub async fn create_drink(
    State(state): State<AppState>,
    claims: Claims,
    payload: Result<Json<DrinkBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    claims.require("post:drinks")?;
    let Json(body) = payload.map_err(ApiError::not_found)?;
    let (title, recipe) = body.into_parts().ok_or(ApiError::NotFound)?;

    // A duplicate title collapses to the create path's 404 like every
    // other failure here.
    if queries::drink_by_title(&state.pool, &title)
        .await
        .map_err(ApiError::not_found)?
        .is_some()
    {
        return Err(ApiError::NotFound);
    }

    let drink = queries::insert_drink(&state.pool, &title, &recipe)
        .await
        .map_err(ApiError::not_found)?;
    let drink = drink.into_payload().map_err(ApiError::not_found)?;
    Ok(Json(json!({ "success": true, "drinks": [drink] })))
}

pub async fn update_drink(
    State(state): State<AppState>,
    claims: Claims,
    Path(drink_id): Path<i64>,
    payload: Result<Json<DrinkBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    claims.require("patch:drinks")?;
    let Json(body) = payload.map_err(ApiError::unprocessable)?;
    let (title, recipe) = body.into_parts().ok_or(ApiError::Unprocessable)?;

    let updated = queries::update_drink(&state.pool, drink_id, &title, &recipe)
        .await
        .map_err(ApiError::unprocessable)?;
    if !updated {
        return Err(ApiError::Unprocessable);
    }

    let drink = queries::drink_by_id(&state.pool, drink_id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or(ApiError::Unprocessable)?;
    let drink = drink.into_payload().map_err(ApiError::unprocessable)?;
    // The update response carries the bare object, unlike the create
    // endpoint's one-element list.
    Ok(Json(json!({ "success": true, "drinks": drink })))
}

pub async fn delete_drink(
    State(state): State<AppState>,
    claims: Claims,
    Path(drink_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    claims.require("delete:drinks")?;
    let deleted = queries::delete_drink(&state.pool, drink_id)
        .await
        .map_err(ApiError::unprocessable)?;
    if !deleted {
        return Err(ApiError::Unprocessable);
    }
    Ok(Json(json!({ "success": true, "delete": drink_id })))
}
