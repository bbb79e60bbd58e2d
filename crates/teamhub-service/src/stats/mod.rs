//! Aggregation engine: dashboard statistics, contribution shares, and the
//! per-day activity timeline.
//!
//! Every call recomputes from the entity store; nothing is cached.

pub mod aggregate;
pub mod model;
pub mod service;

pub use model::{Contribution, DailyActivity, DashboardStats};
pub use service::StatsService;
