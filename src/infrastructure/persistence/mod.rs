//! Concrete repository implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL-backed store
//! - [`InMemoryLinkRepository`] - mutex-guarded map for tests and DB-free runs

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
