//! # teamhub-storage
//!
//! [`ContentStore`](teamhub_core::traits::ContentStore) implementations for
//! TeamHub: the local filesystem for deployments and an in-memory map for
//! tests.

pub mod builder;
pub mod key;
pub mod providers;

pub use builder::build_content_store;
pub use providers::{LocalContentStore, MemoryContentStore};
