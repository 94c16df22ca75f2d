//! Shared application state.

use std::sync::Arc;

use kickoff_core::provider::FixtureProvider;
use kickoff_core::repository::SelectionRepository;
use kickoff_fixture::domain::actions::ActionCatalogue;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of fixtures and rosters.
    pub fixture_provider: Arc<dyn FixtureProvider>,
    /// Store of user selections.
    pub selection_repository: Arc<dyn SelectionRepository>,
    /// Actions paired with each fixture's roster.
    pub catalogue: Arc<ActionCatalogue>,
    /// Leagues listed by the fixtures endpoint; empty lists all.
    pub watched_leagues: Arc<[u32]>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        fixture_provider: Arc<dyn FixtureProvider>,
        selection_repository: Arc<dyn SelectionRepository>,
        catalogue: ActionCatalogue,
        watched_leagues: Vec<u32>,
    ) -> Self {
        Self {
            fixture_provider,
            selection_repository,
            catalogue: Arc::new(catalogue),
            watched_leagues: watched_leagues.into(),
        }
    }
}
