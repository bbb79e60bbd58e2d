//! Core type definitions used across the TeamHub workspace.

pub mod id;
pub mod pagination;

pub use id::*;
pub use pagination::RecentLimit;
