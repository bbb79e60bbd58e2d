//! Compact user identity embedded in joined read views.

use serde::{Deserialize, Serialize};

use teamhub_core::types::id::UserId;

/// Display name shown when a referenced user no longer exists.
pub const UNKNOWN_USER_NAME: &str = "Unknown";

/// The `{ id, name, avatar_url }` identity attached to files, versions,
/// comments, and activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// The user ID.
    pub id: UserId,
    /// Full name or username.
    pub name: String,
    /// Avatar reference.
    pub avatar_url: Option<String>,
}

impl UserSummary {
    /// Placeholder identity for a dangling user reference.
    pub fn unknown(id: UserId) -> Self {
        Self {
            id,
            name: UNKNOWN_USER_NAME.to_string(),
            avatar_url: None,
        }
    }
}
