//! Test providers: mock `FixtureProvider` implementations for tests.

use async_trait::async_trait;
use kickoff_core::error::DomainError;
use kickoff_core::ids::FixtureId;
use kickoff_core::provider::{FixtureData, FixtureProvider, FixtureSummary};

/// A provider that serves a fixed list of fixtures.
#[derive(Debug, Default)]
pub struct StubFixtureProvider {
    fixtures: Vec<FixtureData>,
}

impl StubFixtureProvider {
    /// Create a provider serving `fixtures`.
    #[must_use]
    pub fn new(fixtures: Vec<FixtureData>) -> Self {
        Self { fixtures }
    }
}

#[async_trait]
impl FixtureProvider for StubFixtureProvider {
    async fn get_fixture(&self, fixture_id: &FixtureId) -> Result<FixtureData, DomainError> {
        self.fixtures
            .iter()
            .find(|data| &data.summary.id == fixture_id)
            .cloned()
            .ok_or_else(|| DomainError::FixtureNotFound(fixture_id.clone()))
    }

    async fn get_fixtures(&self) -> Result<Vec<FixtureSummary>, DomainError> {
        Ok(self.fixtures.iter().map(|data| data.summary.clone()).collect())
    }
}

/// A provider that always fails as if the upstream API were down. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingFixtureProvider;

#[async_trait]
impl FixtureProvider for FailingFixtureProvider {
    async fn get_fixture(&self, _fixture_id: &FixtureId) -> Result<FixtureData, DomainError> {
        Err(DomainError::Provider("upstream unavailable".into()))
    }

    async fn get_fixtures(&self) -> Result<Vec<FixtureSummary>, DomainError> {
        Err(DomainError::Provider("upstream unavailable".into()))
    }
}
