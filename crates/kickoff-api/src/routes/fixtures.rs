//! Routes for the Fixture & Events bounded context.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use kickoff_core::ids::FixtureId;
use kickoff_core::provider::FixtureSummary;
use kickoff_fixture::application::query_handlers;
use kickoff_fixture::domain::fixture::Fixture;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
#[instrument(skip(state))]
async fn list_fixtures(
    State(state): State<AppState>,
) -> Result<Json<Vec<FixtureSummary>>, ApiError> {
    let fixtures =
        query_handlers::list_fixtures(&*state.fixture_provider, &state.watched_leagues).await?;
    info!(count = fixtures.len(), "listed fixtures");
    Ok(Json(fixtures))
}

/// GET /{fixture_id}
#[instrument(skip(state))]
async fn get_fixture(
    State(state): State<AppState>,
    Path(fixture_id): Path<String>,
) -> Result<Json<Fixture>, ApiError> {
    let fixture = query_handlers::get_fixture(
        &FixtureId::new(fixture_id),
        &*state.fixture_provider,
        &state.catalogue,
    )
    .await?;
    Ok(Json(fixture))
}

/// Returns the router for the fixture context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fixtures))
        .route("/{fixture_id}", get(get_fixture))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use kickoff_session_store::InMemorySelectionRepository;
    use kickoff_test_support::FailingFixtureProvider;
    use tower::ServiceExt;

    use super::*;
    use crate::routes::test_helpers::{app_state_with, get, json_of, test_app_state};

    #[tokio::test]
    async fn test_get_fixture_returns_generated_events() {
        // Arrange
        let app = router().with_state(test_app_state());

        // Act
        let response = app.oneshot(get("/593320", None)).await.unwrap();

        // Assert
        let (status, json) = json_of(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], "593320");
        assert_eq!(json["home_team_name"], "Barnsley");

        let events = json["events"].as_array().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["name"], "Kaka scores a goal");
        assert_eq!(events[0]["points"], 8);
        assert_eq!(events[0]["has_occured"], true);
        assert_eq!(events[1]["name"], "Zidane makes a tackle");
        assert_eq!(events[1]["has_occured"], false);
        assert_eq!(events[2]["name"], "Figo scores a goal");
    }

    #[tokio::test]
    async fn test_get_fixture_returns_404_for_unknown_fixture() {
        let app = router().with_state(test_app_state());

        let response = app.oneshot(get("/999", None)).await.unwrap();

        let (status, json) = json_of(response).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "fixture_not_found");
    }

    #[tokio::test]
    async fn test_list_fixtures_returns_summaries() {
        let app = router().with_state(test_app_state());

        let response = app.oneshot(get("/", None)).await.unwrap();

        let (status, json) = json_of(response).await;
        assert_eq!(status, StatusCode::OK);
        let fixtures = json.as_array().unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0]["id"], "593320");
        assert_eq!(fixtures[0]["league_id"], 40);
    }

    #[tokio::test]
    async fn test_list_fixtures_returns_502_when_provider_fails() {
        // Arrange
        let state = app_state_with(
            Arc::new(FailingFixtureProvider),
            Arc::new(InMemorySelectionRepository::new()),
        );
        let app = router().with_state(state);

        // Act
        let response = app.oneshot(get("/", None)).await.unwrap();

        // Assert
        let (status, json) = json_of(response).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"], "provider_error");
    }
}
