//! Shared test mocks and utilities for the Kickoff prediction engine.

mod builders;
mod provider;
mod repository;

pub use builders::{actor, fixture_data};
pub use provider::{FailingFixtureProvider, StubFixtureProvider};
pub use repository::{FailingSelectionRepository, RecordedCall, RecordingSelectionRepository};
