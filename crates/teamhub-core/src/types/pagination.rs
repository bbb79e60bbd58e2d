//! Bounded "most recent N" limits for feed-style list queries.

use serde::{Deserialize, Serialize};

/// Maximum number of rows a recent-items query may return.
const MAX_RECENT_LIMIT: u32 = 200;

/// Number of most-recent rows to return from a list query.
///
/// Values are clamped to `1..=200` on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentLimit(u32);

impl RecentLimit {
    /// Create a new clamped limit.
    pub fn new(limit: u32) -> Self {
        Self(limit.clamp(1, MAX_RECENT_LIMIT))
    }

    /// Return the SQL `LIMIT` value.
    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }

    /// Return the limit as a `usize` for in-memory truncation.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}
