//! Integration tests driving the trivia router end to end.
//!
//! Covers listing, delete, add, search, category listing, quiz play, and
//! the error edges around pagination and exhaustion.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;
use trivia::database::queries;
use trivia::{app, database, AppState};

async fn test_state() -> (AppState, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("trivia.db").display());
    let pool = common::db::connect(&url).await.expect("pool");
    database::init_schema(&pool).await.expect("schema");
    (AppState { pool }, dir)
}

/// Two categories; twelve science questions and one history question, so
/// the science list spills onto a second page.
async fn seed(state: &AppState) -> (i64, i64) {
    let science = queries::insert_category(&state.pool, "Science")
        .await
        .unwrap();
    let history = queries::insert_category(&state.pool, "History")
        .await
        .unwrap();
    for n in 1..=12 {
        queries::insert_question(
            &state.pool,
            &format!("Science question {n}?"),
            &format!("Answer {n}."),
            science,
            1,
        )
        .await
        .unwrap();
    }
    queries::insert_question(
        &state.pool,
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        history,
        2,
    )
    .await
    .unwrap();
    (science, history)
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

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
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
async fn categories_are_served_as_an_id_map() {
    let (state, _dir) = test_state().await;
    seed(&state).await;
    let app = app(state);

    let (status, body) = get(&app, "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["2"], "History");
}

#[tokio::test]
async fn questions_are_paginated_ten_to_a_page() {
    let (state, _dir) = test_state().await;
    seed(&state).await;
    let app = app(state);

    let (status, body) = get(&app, "/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["total_questions"], 13);
    assert_eq!(body["current_category"], Value::Null);
    assert_eq!(body["categories"]["1"], "Science");

    let (status, body) = get(&app, "/questions?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn a_page_past_the_data_is_a_404() {
    let (state, _dir) = test_state().await;
    seed(&state).await;
    let app = app(state);

    let (status, body) = get(&app, "/questions?page=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found");
}

#[tokio::test]
async fn an_unparseable_page_falls_back_to_page_one() {
    let (state, _dir) = test_state().await;
    seed(&state).await;
    let app = app(state);

    let (status, body) = get(&app, "/questions?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn deleting_a_question_removes_it() {
    let (state, _dir) = test_state().await;
    let (science, _) = seed(&state).await;
    let id = queries::insert_question(&state.pool, "Doomed?", "Yes.", science, 1)
        .await
        .unwrap();
    let app = app(state);

    let (status, body) = delete(&app, &format!("/questions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = delete(&app, &format!("/questions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn a_new_question_lands_on_the_last_page() {
    let (state, _dir) = test_state().await;
    let (science, _) = seed(&state).await;
    let app = app(state);

    let (status, body) = post_json(
        &app,
        "/questions",
        json!({
            "question": "What boils at 100 degrees Celsius?",
            "answer": "Water",
            "category": science,
            "difficulty": 1,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = get(&app, "/questions?page=2").await;
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(
        questions.last().unwrap()["question"],
        "What boils at 100 degrees Celsius?"
    );
}

#[tokio::test]
async fn a_question_missing_fields_collapses_to_404() {
    let (state, _dir) = test_state().await;
    seed(&state).await;
    let app = app(state);

    let (status, _) = post_json(&app, "/questions", json!({ "question": "Only this" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_substrings_case_insensitively() {
    let (state, _dir) = test_state().await;
    seed(&state).await;
    let app = app(state);

    let (status, body) = post_json(&app, "/questions/search", json!({"searchTerm": "caged bird"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["answer"], "Maya Angelou");

    let (status, _) = post_json(&app, "/questions/search", json!({"searchTerm": ""})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_listing_names_the_current_category() {
    let (state, _dir) = test_state().await;
    let (_, history) = seed(&state).await;
    let app = app(state);

    let (status, body) = get(&app, &format!("/categories/{history}/questions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["current_category"], "History");

    let (status, _) = get(&app, "/categories/999/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quiz_play_never_repeats_a_seen_question() {
    let (state, _dir) = test_state().await;
    let (_, history) = seed(&state).await;
    let app = app(state);

    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": {"id": history}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let seen = body["question"]["id"].as_i64().unwrap();

    // The only history question has been seen, so the round is over.
    let (status, _) = post_json(
        &app,
        "/quizzes",
        json!({"previous_questions": [seen], "quiz_category": {"id": history}}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quiz_category_zero_draws_from_all_questions() {
    let (state, _dir) = test_state().await;
    seed(&state).await;
    let app = app(state);

    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": {"id": 0}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["question"]["id"].as_i64().is_some());
}

#[tokio::test]
async fn quiz_without_a_category_collapses_to_404() {
    let (state, _dir) = test_state().await;
    seed(&state).await;
    let app = app(state);

    let (status, _) = post_json(&app, "/quizzes", json!({"previous_questions": []})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
