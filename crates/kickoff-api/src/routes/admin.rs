//! Administrative routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::post};
use kickoff_selection::application::command_handlers;
use kickoff_selection::domain::commands;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /reset
///
/// Clears every user's selections.
#[instrument(skip(state))]
async fn reset_selections(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let command = commands::ResetSelections {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling reset_selections command");

    command_handlers::handle_reset_selections(&command, &*state.selection_repository).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for administrative operations.
pub fn router() -> Router<AppState> {
    Router::new().route("/reset", post(reset_selections))
}
