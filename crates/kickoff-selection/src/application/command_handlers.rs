//! Command handlers for the Selection context.
//!
//! This module contains application-level command handler functions that
//! validate a command and apply it to the selection repository.

use kickoff_core::command::Command;
use kickoff_core::error::DomainError;
use kickoff_core::ids::{FixtureId, UserId};
use kickoff_core::repository::SelectionRepository;
use tracing::{info, instrument};

use crate::domain::commands::{DeselectEvent, ResetSelections, SelectEvent};

fn validate_target(
    user_id: &UserId,
    fixture_id: &FixtureId,
    event_name: &str,
) -> Result<(), DomainError> {
    if user_id.is_blank() {
        return Err(DomainError::Validation("user id must not be empty".to_owned()));
    }
    if fixture_id.is_blank() {
        return Err(DomainError::Validation(
            "fixture id must not be empty".to_owned(),
        ));
    }
    if event_name.trim().is_empty() {
        return Err(DomainError::Validation(
            "event name must not be empty".to_owned(),
        ));
    }
    Ok(())
}

/// Handles the `SelectEvent` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if an identifier or the event name is
/// blank, or the repository error if the store fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id))]
pub async fn handle_select_event(
    command: &SelectEvent,
    repo: &dyn SelectionRepository,
) -> Result<(), DomainError> {
    validate_target(&command.user_id, &command.fixture_id, &command.event_name)?;

    repo.select_event(&command.user_id, &command.fixture_id, &command.event_name)
        .await?;

    info!(
        command_type = command.command_type(),
        user_id = %command.user_id,
        fixture_id = %command.fixture_id,
        event_name = %command.event_name,
        "event selected"
    );
    Ok(())
}

/// Handles the `DeselectEvent` command. Deselecting an event that is not
/// selected succeeds without changing anything.
///
/// # Errors
///
/// Returns `DomainError::Validation` if an identifier or the event name is
/// blank, or the repository error if the store fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id))]
pub async fn handle_deselect_event(
    command: &DeselectEvent,
    repo: &dyn SelectionRepository,
) -> Result<(), DomainError> {
    validate_target(&command.user_id, &command.fixture_id, &command.event_name)?;

    repo.deselect_event(&command.user_id, &command.fixture_id, &command.event_name)
        .await?;

    info!(
        command_type = command.command_type(),
        user_id = %command.user_id,
        fixture_id = %command.fixture_id,
        event_name = %command.event_name,
        "event deselected"
    );
    Ok(())
}

/// Handles the `ResetSelections` command.
///
/// # Errors
///
/// Returns the repository error if the store fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id))]
pub async fn handle_reset_selections(
    command: &ResetSelections,
    repo: &dyn SelectionRepository,
) -> Result<(), DomainError> {
    repo.reset().await?;
    info!(command_type = command.command_type(), "selections reset");
    Ok(())
}
