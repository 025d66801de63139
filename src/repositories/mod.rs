//! Repository layer: the persistence boundary consumed by the services.
//!
//! The traits in this module are the only view of storage the rest of the
//! crate has. The in-memory implementations are always available; the
//! Postgres implementations are compiled with the `postgres` feature.

mod memory_contact_repository;
mod memory_group_repository;
#[cfg(feature = "postgres")]
mod pg_contact_repository;
#[cfg(feature = "postgres")]
mod pg_group_repository;
mod traits;

pub use memory_contact_repository::InMemoryContactRepository;
pub use memory_group_repository::InMemoryGroupRepository;
#[cfg(feature = "postgres")]
pub use pg_contact_repository::PgContactRepository;
#[cfg(feature = "postgres")]
pub use pg_group_repository::PgGroupRepository;
pub use traits::{ContactRepository, GroupRepository};
