//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use teamhub_core::types::id::{CommentId, FileId, UserId};

use crate::user::UserSummary;

/// A comment posted on a file.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: CommentId,
    /// Comment text.
    pub text: String,
    /// The file commented on.
    pub file_id: FileId,
    /// The author.
    pub user_id: UserId,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

/// Data required to post a comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewComment {
    /// Comment text; must contain non-whitespace characters.
    #[validate(length(min = 1, max = 10000), custom(function = "not_blank"))]
    pub text: String,
    /// The file commented on.
    pub file_id: FileId,
    /// The author.
    pub user_id: UserId,
}

fn not_blank(text: &str) -> Result<(), validator::ValidationError> {
    if text.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// A comment joined with its author's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentWithAuthor {
    /// The comment row.
    #[serde(flatten)]
    pub comment: Comment,
    /// The author (or the `Unknown` placeholder).
    pub user: UserSummary,
}

/// A comment joined with its author and the commented file's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDetail {
    /// The comment row.
    #[serde(flatten)]
    pub comment: Comment,
    /// The author (or the `Unknown` placeholder).
    pub user: UserSummary,
    /// Name of the commented file.
    pub file_name: String,
}
