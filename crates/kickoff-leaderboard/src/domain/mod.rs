//! Domain logic for the Leaderboard context.

pub mod scoring;
