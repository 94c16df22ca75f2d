//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use kickoff_fixture::infrastructure::static_provider::{FixtureFile, StaticFixtureProvider};
use kickoff_session_store::InMemorySelectionRepository;
use tower::ServiceExt;

use kickoff_api::extract::USER_ID_HEADER;
use kickoff_api::routes;
use kickoff_api::state::AppState;

/// Loads the sample fixture file shipped at the workspace root.
pub fn sample_fixture_file() -> FixtureFile {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures.yaml");
    FixtureFile::load(&path).unwrap()
}

/// Build the full app router over the sample fixtures and an in-memory
/// selection store. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_watching(vec![])
}

/// Build the full app router listing only `watched_leagues`.
pub fn build_test_app_watching(watched_leagues: Vec<u32>) -> Router {
    let file = sample_fixture_file();
    let app_state = AppState::new(
        Arc::new(StaticFixtureProvider::from_file(&file)),
        Arc::new(InMemorySelectionRepository::new()),
        file.catalogue(),
        watched_leagues,
    );

    routes::app_router().with_state(app_state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a POST request with a JSON body as `user` and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    user: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header(USER_ID_HEADER, user)
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a GET request, optionally as `user`, and return the response.
pub async fn get_json(app: Router, uri: &str, user: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_ID_HEADER, user);
    }
    let request = builder.body(Body::empty()).unwrap();

    send(app, request).await
}

/// Send an empty POST request and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}
