//! Fixture and predicted event types.

use kickoff_core::ids::FixtureId;
use serde::{Deserialize, Serialize};

/// One actor paired with one action for a fixture.
///
/// Events are derived on every request and never stored; `name` is the
/// natural key users select by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// `"<actor name> <action description>"`.
    pub name: String,
    /// Point value of the paired action.
    pub points: u32,
    /// Photo of the paired actor.
    pub image_url: String,
    /// Whether the provider reports this event as having happened.
    pub has_occured: bool,
}

/// A fixture together with its generated events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Provider fixture identifier.
    pub id: FixtureId,
    /// Home team name.
    pub home_team_name: String,
    /// Away team name.
    pub away_team_name: String,
    /// Home team logo URL.
    pub home_team_logo: String,
    /// Away team logo URL.
    pub away_team_logo: String,
    /// Predicted events in roster order.
    pub events: Vec<Event>,
}

impl Fixture {
    /// Looks up an event by name.
    #[must_use]
    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.name == name)
    }
}
