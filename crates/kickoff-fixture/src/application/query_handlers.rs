//! Query handlers for the Fixture & Events context.
//!
//! This module contains query handlers that fetch fixture data from the
//! provider and return read-only views.

use kickoff_core::error::DomainError;
use kickoff_core::ids::FixtureId;
use kickoff_core::provider::{FixtureProvider, FixtureSummary};
use tracing::debug;

use crate::application::event_generator::generate_events;
use crate::domain::actions::ActionCatalogue;
use crate::domain::fixture::Fixture;

/// Retrieves a fixture and generates its predicted events.
///
/// # Errors
///
/// Returns `DomainError::FixtureNotFound` if the provider has no such fixture.
/// Returns `DomainError::Provider` if the provider fails.
pub async fn get_fixture(
    fixture_id: &FixtureId,
    provider: &dyn FixtureProvider,
    catalogue: &ActionCatalogue,
) -> Result<Fixture, DomainError> {
    let data = provider.get_fixture(fixture_id).await?;
    let events = generate_events(
        &data.actors,
        catalogue.actions(),
        &data.occurred_event_names,
    );

    debug!(
        fixture_id = %fixture_id,
        actors = data.actors.len(),
        events = events.len(),
        "generated fixture events"
    );

    let summary = data.summary;
    Ok(Fixture {
        id: fixture_id.clone(),
        home_team_name: summary.home_team_name,
        away_team_name: summary.away_team_name,
        home_team_logo: summary.home_team_logo,
        away_team_logo: summary.away_team_logo,
        events,
    })
}

/// Lists fixtures in the watched leagues, ordered by kickoff.
///
/// An empty `watched_leagues` slice watches every league.
///
/// # Errors
///
/// Returns `DomainError::Provider` if the provider fails.
pub async fn list_fixtures(
    provider: &dyn FixtureProvider,
    watched_leagues: &[u32],
) -> Result<Vec<FixtureSummary>, DomainError> {
    let mut fixtures: Vec<FixtureSummary> = provider
        .get_fixtures()
        .await?
        .into_iter()
        .filter(|fixture| watched_leagues.is_empty() || watched_leagues.contains(&fixture.league_id))
        .collect();
    fixtures.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then_with(|| a.id.cmp(&b.id)));
    Ok(fixtures)
}
