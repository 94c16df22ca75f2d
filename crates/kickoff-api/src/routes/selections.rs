//! Routes for the Selection bounded context.
//!
//! All routes act on behalf of the current user.

use axum::extract::{Path, State};
use axum::{
    Json, Router,
    routing::{get, post},
};
use kickoff_core::error::DomainError;
use kickoff_core::ids::FixtureId;
use kickoff_fixture::application::query_handlers as fixture_queries;
use kickoff_selection::application::command_handlers;
use kickoff_selection::application::query_handlers::{self, PlayersView, SelectionsView};
use kickoff_selection::domain::commands;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

/// Request body for POST /{fixture_id}/selections/select and /deselect.
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    /// Name of the predicted event.
    pub event_name: String,
}

/// GET /{fixture_id}/selections
#[instrument(skip(state, user), fields(user_id = %user.0))]
async fn get_selections(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(fixture_id): Path<String>,
) -> Result<Json<SelectionsView>, ApiError> {
    let view = query_handlers::get_selections(
        &user.0,
        &FixtureId::new(fixture_id),
        &*state.selection_repository,
    )
    .await?;
    Ok(Json(view))
}

/// POST /{fixture_id}/selections/select
///
/// Only events generated for the fixture can be selected.
#[instrument(skip(state, user, request), fields(user_id = %user.0))]
async fn select_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(fixture_id): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<SelectionsView>, ApiError> {
    let fixture_id = FixtureId::new(fixture_id);
    let fixture = fixture_queries::get_fixture(
        &fixture_id,
        &*state.fixture_provider,
        &state.catalogue,
    )
    .await?;
    if fixture.event(&request.event_name).is_none() {
        return Err(DomainError::Validation(format!(
            "fixture {fixture_id} has no event named {:?}",
            request.event_name
        ))
        .into());
    }

    let command = commands::SelectEvent {
        correlation_id: Uuid::new_v4(),
        user_id: user.0.clone(),
        fixture_id: fixture_id.clone(),
        event_name: request.event_name,
    };

    info!(correlation_id = %command.correlation_id, "handling select_event command");

    command_handlers::handle_select_event(&command, &*state.selection_repository).await?;

    let view =
        query_handlers::get_selections(&user.0, &fixture_id, &*state.selection_repository).await?;
    Ok(Json(view))
}

/// POST /{fixture_id}/selections/deselect
#[instrument(skip(state, user, request), fields(user_id = %user.0))]
async fn deselect_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(fixture_id): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<SelectionsView>, ApiError> {
    let fixture_id = FixtureId::new(fixture_id);
    let command = commands::DeselectEvent {
        correlation_id: Uuid::new_v4(),
        user_id: user.0.clone(),
        fixture_id: fixture_id.clone(),
        event_name: request.event_name,
    };

    info!(correlation_id = %command.correlation_id, "handling deselect_event command");

    command_handlers::handle_deselect_event(&command, &*state.selection_repository).await?;

    let view =
        query_handlers::get_selections(&user.0, &fixture_id, &*state.selection_repository).await?;
    Ok(Json(view))
}

/// GET /{fixture_id}/players
#[instrument(skip(state))]
async fn get_players(
    State(state): State<AppState>,
    Path(fixture_id): Path<String>,
) -> Result<Json<PlayersView>, ApiError> {
    let view =
        query_handlers::get_players(&FixtureId::new(fixture_id), &*state.selection_repository)
            .await?;
    Ok(Json(view))
}

/// Returns the router for the selection context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{fixture_id}/selections", get(get_selections))
        .route("/{fixture_id}/selections/select", post(select_event))
        .route("/{fixture_id}/selections/deselect", post(deselect_event))
        .route("/{fixture_id}/players", get(get_players))
}
