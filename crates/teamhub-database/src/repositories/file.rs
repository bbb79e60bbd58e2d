//! File repository implementation.

use sqlx::{FromRow, PgPool};
use tracing::debug;

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::result::AppResult;
use teamhub_core::types::RecentLimit;
use teamhub_core::types::id::FileId;
use teamhub_entity::file::{
    ACTION_UPLOADED, CreatedFile, File, FileVersion, FileWithUploader, NewFile,
};

use super::{AuthorColumns, db_error};

#[derive(Debug, FromRow)]
struct FileUploaderRow {
    #[sqlx(flatten)]
    file: File,
    #[sqlx(flatten)]
    author: AuthorColumns,
}

impl From<FileUploaderRow> for FileWithUploader {
    fn from(row: FileUploaderRow) -> Self {
        let user = row.author.into_summary(row.file.user_id);
        Self {
            file: row.file,
            user,
        }
    }
}

/// Repository for file records.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a file and its version 1 in one transaction.
    pub async fn create(&self, data: &NewFile) -> AppResult<CreatedFile> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

        let file = sqlx::query_as::<_, File>(
            "INSERT INTO files (name, file_type, size_bytes, location, description, user_id, project_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.file_type)
        .bind(data.size_bytes)
        .bind(&data.location)
        .bind(&data.description)
        .bind(data.user_id)
        .bind(data.project_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error(format!("Failed to create file '{}'", data.name), e))?;

        let initial_version = sqlx::query_as::<_, FileVersion>(
            "INSERT INTO file_versions (file_id, version, location, size_bytes, user_id, action) \
             VALUES ($1, 1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(file.id)
        .bind(&file.location)
        .bind(file.size_bytes)
        .bind(file.user_id)
        .bind(ACTION_UPLOADED)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to record initial file version", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit file", e))?;

        debug!(file_id = %file.id, "Inserted file with version 1");
        Ok(CreatedFile {
            file,
            initial_version,
        })
    }

    /// Find a file by ID.
    pub async fn find_by_id(&self, id: FileId) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// Find a file by ID together with its uploader.
    pub async fn find_with_uploader(&self, id: FileId) -> AppResult<Option<FileWithUploader>> {
        let row = sqlx::query_as::<_, FileUploaderRow>(
            "SELECT f.*, \
                    COALESCE(NULLIF(BTRIM(u.full_name), ''), u.username, 'Unknown') AS author_name, \
                    u.avatar_url AS author_avatar \
             FROM files f LEFT JOIN users u ON u.id = f.user_id \
             WHERE f.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))?;

        Ok(row.map(FileWithUploader::from))
    }

    /// List files newest first. `None` lists every file.
    pub async fn find_recent(&self, limit: Option<RecentLimit>) -> AppResult<Vec<FileWithUploader>> {
        let rows = sqlx::query_as::<_, FileUploaderRow>(
            "SELECT f.*, \
                    COALESCE(NULLIF(BTRIM(u.full_name), ''), u.username, 'Unknown') AS author_name, \
                    u.avatar_url AS author_avatar \
             FROM files f LEFT JOIN users u ON u.id = f.user_id \
             ORDER BY f.created_at DESC, f.id DESC \
             LIMIT $1",
        )
        .bind(limit.map(|l| l.as_i64()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))?;

        Ok(rows.into_iter().map(FileWithUploader::from).collect())
    }
}
