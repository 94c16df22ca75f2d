//! Builders for provider data used across tests.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use kickoff_core::ids::FixtureId;
use kickoff_core::provider::{Actor, FixtureData, FixtureSummary};

/// An actor with a photo URL derived from the name.
#[must_use]
pub fn actor(name: &str) -> Actor {
    Actor {
        name: name.to_owned(),
        image_url: format!(
            "https://media.api-sports.io/football/players/{}.png",
            name.to_lowercase().replace(' ', "-")
        ),
    }
}

/// Barnsley vs Sheffield Wednesday with an empty roster, kicking off at a
/// fixed time.
#[must_use]
pub fn fixture_data(id: &str, league_id: u32) -> FixtureData {
    FixtureData {
        summary: FixtureSummary {
            id: FixtureId::new(id),
            league_id,
            home_team_name: "Barnsley".to_owned(),
            away_team_name: "Sheffield Wednesday".to_owned(),
            home_team_logo: "https://media.api-sports.io/football/teams/747.png".to_owned(),
            away_team_logo: "https://media.api-sports.io/football/teams/74.png".to_owned(),
            kickoff: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        },
        actors: Vec::new(),
        occurred_event_names: HashSet::new(),
    }
}
