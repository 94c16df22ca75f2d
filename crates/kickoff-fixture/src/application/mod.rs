//! Application services for the Fixture & Events context.

pub mod event_generator;
pub mod query_handlers;
