//! Application services for the Leaderboard context.

pub mod query_handlers;
