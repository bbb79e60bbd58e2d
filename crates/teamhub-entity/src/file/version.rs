//! File version entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use teamhub_core::types::id::{FileId, FileVersionId, UserId};

use crate::user::UserSummary;

/// Action label of the version recorded together with a new file.
pub const ACTION_UPLOADED: &str = "uploaded";
/// Action label of a version replacing the content of an existing file.
pub const ACTION_UPDATED: &str = "updated";

/// An immutable snapshot of a file's content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileVersion {
    /// Unique version identifier.
    pub id: FileVersionId,
    /// The file this version belongs to.
    pub file_id: FileId,
    /// Version number, 1-based and strictly increasing per file.
    pub version: i32,
    /// Content location reference of this version.
    pub location: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// User who created this version.
    pub user_id: UserId,
    /// Action label (`"uploaded"`, `"updated"`, ...).
    pub action: String,
    /// Optional notes describing the change.
    pub notes: Option<String>,
    /// When this version was created.
    pub created_at: DateTime<Utc>,
}

/// Data for a new version; the store assigns the version number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFileVersion {
    /// The parent file.
    pub file_id: FileId,
    /// Content location reference.
    pub location: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Author of the version.
    pub user_id: UserId,
    /// Action label.
    pub action: String,
    /// Optional notes.
    pub notes: Option<String>,
}

/// A version joined with its author's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileVersionWithAuthor {
    /// The version row.
    #[serde(flatten)]
    pub version: FileVersion,
    /// The author (or the `Unknown` placeholder).
    pub user: UserSummary,
}
