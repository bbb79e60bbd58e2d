//! File version repository implementation.

use sqlx::{FromRow, PgPool};
use tracing::debug;

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::result::AppResult;
use teamhub_core::types::id::FileId;
use teamhub_entity::file::{FileVersion, FileVersionWithAuthor, NewFileVersion};

use super::{AuthorColumns, db_error};

#[derive(Debug, FromRow)]
struct VersionAuthorRow {
    #[sqlx(flatten)]
    version: FileVersion,
    #[sqlx(flatten)]
    author: AuthorColumns,
}

/// Repository for the per-file version history.
#[derive(Debug, Clone)]
pub struct FileVersionRepository {
    pool: PgPool,
}

impl FileVersionRepository {
    /// Create a new version repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append the next version of a file.
    ///
    /// The parent row is locked with `FOR UPDATE` so concurrent writers for
    /// the same file take turns computing `MAX(version) + 1`.
    pub async fn create(&self, data: &NewFileVersion) -> AppResult<FileVersion> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

        let locked: Option<FileId> =
            sqlx::query_scalar("SELECT id FROM files WHERE id = $1 FOR UPDATE")
                .bind(data.file_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock file", e))?;
        if locked.is_none() {
            return Err(AppError::not_found(format!("File {} not found", data.file_id)));
        }

        let next: i32 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(version), 0) + 1 FROM file_versions WHERE file_id = $1",
        )
        .bind(data.file_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to compute next version", e)
        })?;

        let version = sqlx::query_as::<_, FileVersion>(
            "INSERT INTO file_versions (file_id, version, location, size_bytes, user_id, action, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.file_id)
        .bind(next)
        .bind(&data.location)
        .bind(data.size_bytes)
        .bind(data.user_id)
        .bind(&data.action)
        .bind(&data.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error(format!("Failed to record version {next}"), e))?;

        sqlx::query("UPDATE files SET updated_at = NOW() WHERE id = $1")
            .bind(data.file_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch file", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit version", e))?;

        debug!(file_id = %data.file_id, version = next, "Inserted file version");
        Ok(version)
    }

    /// List a file's versions, highest first, with their authors.
    pub async fn find_by_file(&self, file_id: FileId) -> AppResult<Vec<FileVersionWithAuthor>> {
        let rows = sqlx::query_as::<_, VersionAuthorRow>(
            "SELECT v.*, \
                    COALESCE(NULLIF(BTRIM(u.full_name), ''), u.username, 'Unknown') AS author_name, \
                    u.avatar_url AS author_avatar \
             FROM file_versions v LEFT JOIN users u ON u.id = v.user_id \
             WHERE v.file_id = $1 \
             ORDER BY v.version DESC",
        )
        .bind(file_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list file versions", e))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let user = row.author.into_summary(row.version.user_id);
                FileVersionWithAuthor {
                    version: row.version,
                    user,
                }
            })
            .collect())
    }

    /// Find one version of a file.
    pub async fn find(&self, file_id: FileId, version: i32) -> AppResult<Option<FileVersion>> {
        sqlx::query_as::<_, FileVersion>(
            "SELECT * FROM file_versions WHERE file_id = $1 AND version = $2",
        )
        .bind(file_id)
        .bind(version)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file version", e))
    }
}
