//! Kickoff Core: shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that all bounded
//! contexts depend on. It contains no infrastructure code.

pub mod command;
pub mod error;
pub mod ids;
pub mod provider;
pub mod repository;
