//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use teamhub_core::types::id::{FileId, ProjectId, UserId};

use super::version::FileVersion;
use crate::user::UserSummary;

/// A file shared with the team.
///
/// `size_bytes` and `location` describe the originally uploaded content;
/// later versions are tracked in `file_versions` and only move
/// `updated_at` forward.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// The file name (including extension).
    pub name: String,
    /// Coarse declared type, e.g. `"Image"` or `"Spreadsheet"`.
    pub file_type: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Content location reference in the content store.
    pub location: String,
    /// Optional description.
    pub description: Option<String>,
    /// The uploading user.
    pub user_id: UserId,
    /// The owning project.
    pub project_id: ProjectId,
    /// When the file was uploaded.
    pub created_at: DateTime<Utc>,
    /// When the latest version was recorded.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFile {
    /// The file name.
    pub name: String,
    /// Declared type.
    pub file_type: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Content location reference.
    pub location: String,
    /// Optional description.
    pub description: Option<String>,
    /// The uploading user.
    pub user_id: UserId,
    /// The owning project.
    pub project_id: ProjectId,
}

/// A freshly created file together with its version 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedFile {
    /// The file row.
    pub file: File,
    /// Version 1, written in the same transaction as the file.
    pub initial_version: FileVersion,
}

/// A file joined with its uploader's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileWithUploader {
    /// The file row.
    #[serde(flatten)]
    pub file: File,
    /// The uploader (or the `Unknown` placeholder).
    pub user: UserSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> File {
        File {
            id: FileId(1),
            name: name.into(),
            file_type: "Text".into(),
            size_bytes: 3,
            location: "uploads/x".into(),
            description: None,
            user_id: UserId(1),
            project_id: ProjectId(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(file("notes.TXT").extension(), Some("txt".into()));
        assert_eq!(file("archive.tar.gz").extension(), Some("gz".into()));
        assert_eq!(file("Makefile").extension(), None);
    }

    #[test]
    fn test_uploader_view_flattens_file() {
        let view = FileWithUploader {
            file: file("a.txt"),
            user: UserSummary::unknown(UserId(1)),
        };
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["name"], "a.txt");
        assert_eq!(json["user"]["name"], "Unknown");
    }
}
