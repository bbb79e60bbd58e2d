//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use teamhub_core::types::id::UserId;

use super::summary::UserSummary;

/// A registered team member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name (compared case-insensitively).
    pub username: String,
    /// Opaque credential; hashing is done before it reaches the store.
    #[serde(skip_serializing)]
    pub password: String,
    /// Full name (optional).
    pub full_name: Option<String>,
    /// E-mail address.
    pub email: Option<String>,
    /// Avatar image reference.
    pub avatar_url: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The name shown in listings: the full name when set, else the username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }

    /// Compact identity used in joined read views.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.display_name().to_string(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUser {
    /// Desired username.
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    /// Opaque credential.
    #[validate(length(min = 1))]
    pub password: String,
    /// Full name (optional).
    pub full_name: Option<String>,
    /// E-mail address (defaulted at registration when absent).
    pub email: Option<String>,
    /// Avatar reference (defaulted at registration when absent).
    pub avatar_url: Option<String>,
}

impl NewUser {
    /// Create a registration payload with only the required fields.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            full_name: None,
            email: None,
            avatar_url: None,
        }
    }

    /// Set the full name.
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}
