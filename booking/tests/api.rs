//! Integration tests driving the booking router end to end.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use booking::database::models::{NewArtist, NewVenue};
use booking::database::queries;
use booking::{app, database, AppState};
use chrono::NaiveDateTime;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

async fn test_state() -> (AppState, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("booking.db").display());
    let pool = common::db::connect(&url).await.expect("pool");
    database::init_schema(&pool).await.expect("schema");
    (AppState { pool }, dir)
}

fn venue(name: &str, city: &str, state: &str) -> NewVenue {
    NewVenue {
        name: name.into(),
        city: city.into(),
        state: state.into(),
        address: "1 Main St".into(),
        phone: None,
        image_link: None,
        facebook_link: None,
    }
}

fn artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        phone: None,
        image_link: Some("https://example.com/band.png".into()),
        facebook_link: None,
    }
}

fn at(datetime: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(datetime, "%Y-%m-%dT%H:%M:%S").expect("datetime")
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn post_form(app: &Router, path: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn delete(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn venues_are_grouped_by_area() {
    let (state, _dir) = test_state().await;
    queries::insert_venue(&state.pool, &venue("The Dive", "Austin", "TX"))
        .await
        .unwrap();
    queries::insert_venue(&state.pool, &venue("Mohawk", "Austin", "TX"))
        .await
        .unwrap();
    queries::insert_venue(&state.pool, &venue("The Fillmore", "San Francisco", "CA"))
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = get(&app, "/venues").await;
    assert_eq!(status, StatusCode::OK);
    let areas = body.as_array().expect("area list");
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0]["city"], "Austin");
    assert_eq!(areas[0]["venues"].as_array().unwrap().len(), 2);
    assert_eq!(areas[1]["city"], "San Francisco");
    assert_eq!(areas[1]["venues"][0]["name"], "The Fillmore");
}

#[tokio::test]
async fn venue_search_is_case_insensitive() {
    let (state, _dir) = test_state().await;
    queries::insert_venue(&state.pool, &venue("The Musical Hop", "New York", "NY"))
        .await
        .unwrap();
    queries::insert_venue(&state.pool, &venue("Park Square", "New York", "NY"))
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = post_form(&app, "/venues/search", "search_term=musical").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "The Musical Hop");
}

#[tokio::test]
async fn venue_detail_splits_past_and_upcoming_shows() {
    let (state, _dir) = test_state().await;
    let venue_id = queries::insert_venue(&state.pool, &venue("The Dive", "Austin", "TX"))
        .await
        .unwrap();
    let artist_id = queries::insert_artist(&state.pool, &artist("Night Owls"))
        .await
        .unwrap();
    queries::insert_show(&state.pool, venue_id, artist_id, at("2020-05-01T20:00:00"))
        .await
        .unwrap();
    queries::insert_show(&state.pool, venue_id, artist_id, at("2099-05-01T20:00:00"))
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = get(&app, &format!("/venues/{venue_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "The Dive");
    assert_eq!(body["past_shows_count"], 1);
    assert_eq!(body["upcoming_shows_count"], 1);
    assert_eq!(body["past_shows"][0]["artist_name"], "Night Owls");
    assert_eq!(body["upcoming_shows"][0]["artist_id"], artist_id);
}

#[tokio::test]
async fn unknown_venue_is_a_404_envelope() {
    let (state, _dir) = test_state().await;
    let app = app(state);

    let (status, body) = get(&app, "/venues/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn created_venue_shows_up_in_the_listing() {
    let (state, _dir) = test_state().await;
    let app = app(state);

    let (status, body) = post_form(
        &app,
        "/venues/create",
        "name=The%20Dive&city=Austin&state=TX&address=1%20Main%20St&phone=555-0101",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Venue The Dive was successfully listed!");

    let (_, areas) = get(&app, "/venues").await;
    assert_eq!(areas[0]["venues"][0]["name"], "The Dive");
}

#[tokio::test]
async fn deleting_a_venue_removes_it_and_its_shows() {
    let (state, _dir) = test_state().await;
    let venue_id = queries::insert_venue(&state.pool, &venue("The Dive", "Austin", "TX"))
        .await
        .unwrap();
    let artist_id = queries::insert_artist(&state.pool, &artist("Night Owls"))
        .await
        .unwrap();
    queries::insert_show(&state.pool, venue_id, artist_id, at("2099-05-01T20:00:00"))
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = delete(&app, &format!("/venues/{venue_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, shows) = get(&app, "/shows").await;
    assert_eq!(shows.as_array().unwrap().len(), 0);

    let (status, _) = delete(&app, &format!("/venues/{venue_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn editing_an_artist_rewrites_its_columns() {
    let (state, _dir) = test_state().await;
    let artist_id = queries::insert_artist(&state.pool, &artist("Night Owls"))
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = post_form(
        &app,
        &format!("/artists/{artist_id}/edit"),
        "name=Day%20Owls&city=Oakland&state=CA",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["artist"]["name"], "Day Owls");
    assert_eq!(body["artist"]["city"], "Oakland");
    // Columns absent from the form are cleared, matching a full rewrite.
    assert_eq!(body["artist"]["image_link"], Value::Null);
}

#[tokio::test]
async fn show_listing_joins_both_sides() {
    let (state, _dir) = test_state().await;
    let venue_id = queries::insert_venue(&state.pool, &venue("The Dive", "Austin", "TX"))
        .await
        .unwrap();
    let artist_id = queries::insert_artist(&state.pool, &artist("Night Owls"))
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = post_form(
        &app,
        "/shows/create",
        &format!("artist_id={artist_id}&venue_id={venue_id}&start_time=2099-05-01T20:00:00"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Show was successfully listed!");

    let (status, shows) = get(&app, "/shows").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shows[0]["venue_name"], "The Dive");
    assert_eq!(shows[0]["artist_name"], "Night Owls");
    assert_eq!(shows[0]["artist_image_link"], "https://example.com/band.png");
}

#[tokio::test]
async fn show_with_unknown_artist_reports_the_flash_failure() {
    let (state, _dir) = test_state().await;
    let venue_id = queries::insert_venue(&state.pool, &venue("The Dive", "Austin", "TX"))
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = post_form(
        &app,
        "/shows/create",
        &format!("artist_id=999&venue_id={venue_id}&start_time=2099-05-01T20:00:00"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "An error occurred. Show could not be listed."
    );
}

#[tokio::test]
async fn unknown_routes_fall_back_to_the_404_envelope() {
    let (state, _dir) = test_state().await;
    let app = app(state);

    let (status, body) = get(&app, "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}
