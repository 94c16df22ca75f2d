//! Test repositories: mock `SelectionRepository` implementations for tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use kickoff_core::error::DomainError;
use kickoff_core::ids::{FixtureId, UserId};
use kickoff_core::repository::SelectionRepository;

/// A call made against a [`RecordingSelectionRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// `select_event(user, fixture, event)`.
    Select(UserId, FixtureId, String),
    /// `deselect_event(user, fixture, event)`.
    Deselect(UserId, FixtureId, String),
    /// `reset()`.
    Reset,
}

/// A selection repository that serves canned selections and records every
/// mutation. Mutations are recorded only; they do not change what reads
/// return.
#[derive(Debug, Default)]
pub struct RecordingSelectionRepository {
    selections: BTreeMap<(FixtureId, UserId), Vec<String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingSelectionRepository {
    /// Create a repository with no canned selections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds canned selections for a user and fixture.
    #[must_use]
    pub fn with_selections(mut self, user_id: &str, fixture_id: &str, events: &[&str]) -> Self {
        self.selections.insert(
            (FixtureId::new(fixture_id), UserId::new(user_id)),
            events.iter().map(|e| (*e).to_owned()).collect(),
        );
        self
    }

    /// Returns a snapshot of all recorded mutations.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SelectionRepository for RecordingSelectionRepository {
    async fn get_selected_events(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
    ) -> Result<Vec<String>, DomainError> {
        Ok(self
            .selections
            .get(&(fixture_id.clone(), user_id.clone()))
            .cloned()
            .unwrap_or_default())
    }

    async fn get_users_playing_fixture(
        &self,
        fixture_id: &FixtureId,
    ) -> Result<BTreeSet<UserId>, DomainError> {
        Ok(self
            .selections
            .iter()
            .filter(|((fixture, _), events)| fixture == fixture_id && !events.is_empty())
            .map(|((_, user), _)| user.clone())
            .collect())
    }

    async fn select_event(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
        event_name: &str,
    ) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(RecordedCall::Select(
            user_id.clone(),
            fixture_id.clone(),
            event_name.to_owned(),
        ));
        Ok(())
    }

    async fn deselect_event(
        &self,
        user_id: &UserId,
        fixture_id: &FixtureId,
        event_name: &str,
    ) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(RecordedCall::Deselect(
            user_id.clone(),
            fixture_id.clone(),
            event_name.to_owned(),
        ));
        Ok(())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(RecordedCall::Reset);
        Ok(())
    }
}

/// A selection repository that always returns an infrastructure error.
/// Useful for testing error-handling paths.
#[derive(Debug)]
pub struct FailingSelectionRepository;

#[async_trait]
impl SelectionRepository for FailingSelectionRepository {
    async fn get_selected_events(
        &self,
        _user_id: &UserId,
        _fixture_id: &FixtureId,
    ) -> Result<Vec<String>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn get_users_playing_fixture(
        &self,
        _fixture_id: &FixtureId,
    ) -> Result<BTreeSet<UserId>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn select_event(
        &self,
        _user_id: &UserId,
        _fixture_id: &FixtureId,
        _event_name: &str,
    ) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn deselect_event(
        &self,
        _user_id: &UserId,
        _fixture_id: &FixtureId,
        _event_name: &str,
    ) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn reset(&self) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
