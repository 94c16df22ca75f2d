//! Selection repository abstraction.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::DomainError;
use crate::ids::{FixtureId, UserId};

/// Per-user, per-fixture store of selected event names.
///
/// Selections are scoped to a `(fixture, user)` pair and must never leak
/// across fixtures or users. Absent state is normal: reads of an unknown
/// pair return empty results and deselecting something that is not selected
/// is a no-op.
#[async_trait]
pub trait SelectionRepository: Send + Sync {
    /// Returns the user's selected event names for a fixture, in selection
    /// order. Empty if the user has selected nothing.
    async fn get_selected_events(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
    ) -> Result<Vec<String>, DomainError>;

    /// Returns every user with at least one selection for the fixture.
    async fn get_users_playing_fixture(
        &self,
        fixture_id: &FixtureId,
    ) -> Result<BTreeSet<UserId>, DomainError>;

    /// Records an event name as selected. Selecting an already selected
    /// event leaves the selection unchanged.
    async fn select_event(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
        event_name: &str,
    ) -> Result<(), DomainError>;

    /// Removes every occurrence of an event name from the selection.
    async fn deselect_event(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
        event_name: &str,
    ) -> Result<(), DomainError>;

    /// Clears all selections for all users and fixtures.
    async fn reset(&self) -> Result<(), DomainError>;
}
