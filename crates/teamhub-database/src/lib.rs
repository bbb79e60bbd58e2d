//! # teamhub-database
//!
//! The [`EntityStore`] interface and its implementations: the PostgreSQL
//! production store built from per-entity repositories, and (behind the
//! `memory` feature) an in-memory fake for tests.

pub mod connection;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryEntityStore;
pub use postgres::PgEntityStore;
pub use store::EntityStore;
