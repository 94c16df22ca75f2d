//! Routes for the Leaderboard bounded context.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use kickoff_core::ids::FixtureId;
use kickoff_fixture::application::query_handlers as fixture_queries;
use kickoff_leaderboard::application::query_handlers::{self, LeaderboardView, StandingView};
use tracing::instrument;

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

/// GET /{fixture_id}/leaderboard
#[instrument(skip(state, user), fields(user_id = %user.0))]
async fn get_leaderboard(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(fixture_id): Path<String>,
) -> Result<Json<LeaderboardView>, ApiError> {
    let fixture_id = FixtureId::new(fixture_id);
    let fixture =
        fixture_queries::get_fixture(&fixture_id, &*state.fixture_provider, &state.catalogue)
            .await?;
    let view = query_handlers::get_leaderboard(
        &fixture_id,
        &user.0,
        &fixture.events,
        &*state.selection_repository,
    )
    .await?;
    Ok(Json(view))
}

/// GET /{fixture_id}/standings
#[instrument(skip(state))]
async fn get_standings(
    State(state): State<AppState>,
    Path(fixture_id): Path<String>,
) -> Result<Json<Vec<StandingView>>, ApiError> {
    let fixture_id = FixtureId::new(fixture_id);
    let fixture =
        fixture_queries::get_fixture(&fixture_id, &*state.fixture_provider, &state.catalogue)
            .await?;
    let standings = query_handlers::get_standings(
        &fixture_id,
        &fixture.events,
        &*state.selection_repository,
    )
    .await?;
    Ok(Json(standings))
}

/// Returns the router for the leaderboard context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{fixture_id}/leaderboard", get(get_leaderboard))
        .route("/{fixture_id}/standings", get(get_standings))
}
