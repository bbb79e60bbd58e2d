//! # teamhub-entity
//!
//! Domain entity models for TeamHub. Every struct in this crate
//! represents a database table row, a creation payload, or a joined
//! read view. Row entities additionally derive `sqlx::FromRow`.

pub mod activity;
pub mod comment;
pub mod file;
pub mod project;
pub mod stats;
pub mod user;
