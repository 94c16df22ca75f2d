//! Fixture provider implementations.

pub mod static_provider;
