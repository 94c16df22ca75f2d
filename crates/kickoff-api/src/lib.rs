//! Kickoff API: HTTP surface over the fixture, selection and leaderboard
//! contexts.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
