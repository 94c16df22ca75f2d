//! In-memory implementation of the `SelectionRepository` trait.

use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use kickoff_core::error::DomainError;
use kickoff_core::ids::{FixtureId, UserId};
use kickoff_core::repository::SelectionRepository;
use tracing::debug;

/// Selections are scoped to one user in one fixture.
type SelectionKey = (FixtureId, UserId);

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Infrastructure("selection store lock poisoned".into())
}

/// Process-local selection store.
///
/// Each mutation holds the write lock for its whole read-modify-write, so
/// concurrent selects and deselects on the same key never lose updates and
/// readers never see a half-applied change. A key exists only while it holds
/// at least one selection.
#[derive(Debug, Default)]
pub struct InMemorySelectionRepository {
    selections: RwLock<HashMap<SelectionKey, Vec<String>>>,
}

impl InMemorySelectionRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SelectionRepository for InMemorySelectionRepository {
    async fn get_selected_events(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
    ) -> Result<Vec<String>, DomainError> {
        let selections = self.selections.read().map_err(poisoned)?;
        Ok(selections
            .get(&(fixture_id.clone(), user_id.clone()))
            .cloned()
            .unwrap_or_default())
    }

    async fn get_users_playing_fixture(
        &self,
        fixture_id: &FixtureId,
    ) -> Result<BTreeSet<UserId>, DomainError> {
        let selections = self.selections.read().map_err(poisoned)?;
        Ok(selections
            .keys()
            .filter(|(fixture, _)| fixture == fixture_id)
            .map(|(_, user)| user.clone())
            .collect())
    }

    async fn select_event(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
        event_name: &str,
    ) -> Result<(), DomainError> {
        let mut selections = self.selections.write().map_err(poisoned)?;
        let events = selections
            .entry((fixture_id.clone(), user_id.clone()))
            .or_default();
        if events.iter().any(|selected| selected == event_name) {
            debug!(%user_id, %fixture_id, event_name, "event already selected");
            return Ok(());
        }
        events.push(event_name.to_owned());
        Ok(())
    }

    async fn deselect_event(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
        event_name: &str,
    ) -> Result<(), DomainError> {
        let mut selections = self.selections.write().map_err(poisoned)?;
        let key = (fixture_id.clone(), user_id.clone());
        let Some(events) = selections.get_mut(&key) else {
            return Ok(());
        };
        events.retain(|selected| selected != event_name);
        if events.is_empty() {
            selections.remove(&key);
        }
        Ok(())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        self.selections.write().map_err(poisoned)?.clear();
        Ok(())
    }
}
