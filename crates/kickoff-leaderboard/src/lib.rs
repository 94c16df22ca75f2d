//! Kickoff: Leaderboard bounded context.
//!
//! Scores users on the selected events that actually happened and ranks
//! them against everyone else playing the same fixture.

pub mod application;
pub mod domain;
