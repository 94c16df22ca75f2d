//! Application services for the Selection context.

pub mod command_handlers;
pub mod query_handlers;
