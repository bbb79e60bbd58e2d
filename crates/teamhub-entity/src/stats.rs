//! Raw aggregate rows returned by the store for the statistics engine.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use teamhub_core::types::id::UserId;

use crate::activity::ActivityType;
use crate::user::UserSummary;

/// A labelled count, used for histogram entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NamedCount {
    /// Bucket label.
    pub name: String,
    /// Number of items in the bucket.
    pub value: i64,
}

impl NamedCount {
    /// Create a labelled count.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Number of activities of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ActivityTypeCount {
    /// The activity type.
    pub activity_type: ActivityType,
    /// Number of activities of that type.
    pub count: i64,
}

/// Files and comments authored by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCounts {
    /// The author.
    pub user: UserSummary,
    /// Number of files uploaded.
    pub files_count: i64,
    /// Number of comments posted.
    pub comments_count: i64,
}

impl AuthorCounts {
    /// The author's user ID.
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}
