//! Storage implementations of the `SelectionRepository` contract.

pub mod memory;
pub mod pg_selection_repository;

pub use memory::InMemorySelectionRepository;
pub use pg_selection_repository::PgSelectionRepository;
