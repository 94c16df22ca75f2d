//! Fixture provider backed by a fixed set of fixtures.
//!
//! Used for local development and demos in place of a live sports-data
//! adapter. Fixtures are loaded from a YAML file of the form:
//!
//! ```yaml
//! actions: [makes_a_save, scores_a_goal]   # optional catalogue override
//! fixtures:
//!   - id: "593320"
//!     league_id: 40
//!     home_team_name: Barnsley
//!     away_team_name: Sheffield Wednesday
//!     home_team_logo: https://media.api-sports.io/football/teams/747.png
//!     away_team_logo: https://media.api-sports.io/football/teams/74.png
//!     kickoff: 2021-01-20T19:45:00Z
//!     actors:
//!       - { name: Bradley Collins, image_url: https://media.api-sports.io/football/players/1.png }
//!     occurred_event_names: [Bradley Collins makes a save]
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use async_trait::async_trait;
use kickoff_core::error::DomainError;
use kickoff_core::ids::FixtureId;
use kickoff_core::provider::{FixtureData, FixtureProvider, FixtureSummary};
use serde::Deserialize;
use tracing::info;

use crate::domain::actions::ActionCatalogue;

/// Parsed contents of a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureFile {
    /// Catalogue to pair rosters with; the standard catalogue when absent.
    #[serde(default)]
    pub actions: Option<ActionCatalogue>,
    /// Fixtures offered by the provider.
    #[serde(default)]
    pub fixtures: Vec<FixtureData>,
}

impl FixtureFile {
    /// Parses a fixture file from YAML.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the YAML is malformed or a
    /// roster names the same player twice.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DomainError> {
        let file: Self = serde_yaml::from_str(yaml)
            .map_err(|e| DomainError::Validation(format!("invalid fixture file: {e}")))?;
        for data in &file.fixtures {
            check_unique_actor_names(data)?;
        }
        Ok(file)
    }

    /// Reads and parses a fixture file from disk.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read and
    /// `DomainError::Validation` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Infrastructure(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Returns the configured catalogue, falling back to the standard one.
    #[must_use]
    pub fn catalogue(&self) -> ActionCatalogue {
        self.actions.clone().unwrap_or_default()
    }
}

/// Event names are derived from player names, so they stay unique only while
/// the roster does.
fn check_unique_actor_names(data: &FixtureData) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    match data.actors.iter().find(|actor| !seen.insert(actor.name.as_str())) {
        Some(actor) => Err(DomainError::Validation(format!(
            "fixture {} lists player {:?} more than once",
            data.summary.id, actor.name
        ))),
        None => Ok(()),
    }
}

/// Serves fixtures from memory.
#[derive(Debug, Clone, Default)]
pub struct StaticFixtureProvider {
    fixtures: HashMap<FixtureId, FixtureData>,
    order: Vec<FixtureId>,
}

impl StaticFixtureProvider {
    /// Creates a provider serving the given fixtures. A later fixture with a
    /// repeated id replaces the earlier one.
    #[must_use]
    pub fn new(fixtures: Vec<FixtureData>) -> Self {
        let mut provider = Self::default();
        for data in fixtures {
            let id = data.summary.id.clone();
            if provider.fixtures.insert(id.clone(), data).is_none() {
                provider.order.push(id);
            }
        }
        provider
    }

    /// Creates a provider from a parsed fixture file.
    #[must_use]
    pub fn from_file(file: &FixtureFile) -> Self {
        let provider = Self::new(file.fixtures.clone());
        info!(fixtures = provider.order.len(), "loaded static fixtures");
        provider
    }
}

#[async_trait]
impl FixtureProvider for StaticFixtureProvider {
    async fn get_fixture(&self, fixture_id: &FixtureId) -> Result<FixtureData, DomainError> {
        self.fixtures
            .get(fixture_id)
            .cloned()
            .ok_or_else(|| DomainError::FixtureNotFound(fixture_id.clone()))
    }

    async fn get_fixtures(&self) -> Result<Vec<FixtureSummary>, DomainError> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.fixtures.get(id))
            .map(|data| data.summary.clone())
            .collect())
    }
}
