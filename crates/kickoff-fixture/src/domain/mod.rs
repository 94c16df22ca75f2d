//! Domain types for the Fixture & Events context.

pub mod actions;
pub mod fixture;
