//! Domain types for the Selection context.

pub mod commands;
