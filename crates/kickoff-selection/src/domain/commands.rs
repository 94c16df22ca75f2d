//! Commands for the Selection context.

use kickoff_core::command::Command;
use kickoff_core::ids::{FixtureId, UserId};
use uuid::Uuid;

/// Command to select a predicted event.
#[derive(Debug, Clone)]
pub struct SelectEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The selecting user.
    pub user_id: UserId,
    /// The fixture the event belongs to.
    pub fixture_id: FixtureId,
    /// Name of the predicted event.
    pub event_name: String,
}

impl Command for SelectEvent {
    fn command_type(&self) -> &'static str {
        "selection.select_event"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to withdraw a selection.
#[derive(Debug, Clone)]
pub struct DeselectEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The user withdrawing the selection.
    pub user_id: UserId,
    /// The fixture the event belongs to.
    pub fixture_id: FixtureId,
    /// Name of the predicted event.
    pub event_name: String,
}

impl Command for DeselectEvent {
    fn command_type(&self) -> &'static str {
        "selection.deselect_event"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to clear every selection in the store.
#[derive(Debug, Clone)]
pub struct ResetSelections {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ResetSelections {
    fn command_type(&self) -> &'static str {
        "selection.reset_selections"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
