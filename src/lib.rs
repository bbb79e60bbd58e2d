//! TeamHub: the core of a team file-sharing dashboard.
//!
//! Users upload files into projects, comment on them, and push new
//! versions; every committed change lands in an activity log that feeds
//! the dashboard statistics and contribution shares.
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`core`]: errors, configuration, typed ids, events, storage traits
//! - [`entity`]: row and read-view types
//! - [`database`]: the [`EntityStore`](database::EntityStore) and its
//!   PostgreSQL implementation
//! - [`storage`]: content stores for file bytes
//! - [`service`]: activity recorder, version tracker, entity services,
//!   and the aggregation engine, wired together by [`TeamHub`]

pub use teamhub_core as core;
pub use teamhub_database as database;
pub use teamhub_entity as entity;
pub use teamhub_service as service;
pub use teamhub_storage as storage;

pub use teamhub_core::config::AppConfig;
pub use teamhub_core::error::{AppError, ErrorKind};
pub use teamhub_core::result::AppResult;
pub use teamhub_service::TeamHub;
