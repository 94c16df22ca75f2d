//! Fixture provider abstraction.
//!
//! The provider is the boundary to the external sports-data source. It hands
//! back fully resolved fixture data; generating predicted events from it is
//! the fixture context's job.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::FixtureId;

/// A player eligible to be paired with a predicted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Player name, unique within a fixture's roster.
    pub name: String,
    /// Player photo URL.
    pub image_url: String,
}

/// Listing entry for a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSummary {
    /// Provider fixture identifier.
    pub id: FixtureId,
    /// Provider league identifier.
    pub league_id: u32,
    /// Home team name.
    pub home_team_name: String,
    /// Away team name.
    pub away_team_name: String,
    /// Home team logo URL.
    pub home_team_logo: String,
    /// Away team logo URL.
    pub away_team_logo: String,
    /// Scheduled kickoff time.
    pub kickoff: DateTime<Utc>,
}

/// Everything the provider knows about one fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureData {
    /// Listing details for the fixture.
    #[serde(flatten)]
    pub summary: FixtureSummary,
    /// Starting players, home side first, in lineup order.
    #[serde(default)]
    pub actors: Vec<Actor>,
    /// Names of events the provider reports as having happened.
    #[serde(default)]
    pub occurred_event_names: HashSet<String>,
}

/// Source of fixture data.
#[async_trait]
pub trait FixtureProvider: Send + Sync {
    /// Loads one fixture with its roster.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FixtureNotFound` for an unknown id and
    /// `DomainError::Provider` if the source cannot be reached.
    async fn get_fixture(&self, fixture_id: &FixtureId) -> Result<FixtureData, DomainError>;

    /// Lists the fixtures the provider currently offers.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Provider` if the source cannot be reached.
    async fn get_fixtures(&self) -> Result<Vec<FixtureSummary>, DomainError>;
}
