//! Kickoff: Fixture & Events bounded context.
//!
//! Responsible for the action catalogue, pairing a fixture's roster with
//! catalogue actions into predicted events, and loading fixture data.

pub mod application;
pub mod domain;
pub mod infrastructure;
