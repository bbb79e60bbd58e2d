//! Comment repository implementation.

use sqlx::{FromRow, PgPool};

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::result::AppResult;
use teamhub_core::types::id::FileId;
use teamhub_entity::comment::{Comment, CommentDetail, CommentWithAuthor, NewComment};

use super::{AuthorColumns, db_error};

#[derive(Debug, FromRow)]
struct CommentRow {
    #[sqlx(flatten)]
    comment: Comment,
    #[sqlx(flatten)]
    author: AuthorColumns,
    file_name: String,
}

/// Repository for comments on files.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a comment. A missing file or author surfaces as `NotFound`.
    pub async fn create(&self, data: &NewComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (text, file_id, user_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.text)
        .bind(data.file_id)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error(format!("Cannot comment on file {}", data.file_id), e))
    }

    /// List every comment newest first, with author and file name.
    pub async fn find_all(&self) -> AppResult<Vec<CommentDetail>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.*, \
                    COALESCE(NULLIF(BTRIM(u.full_name), ''), u.username, 'Unknown') AS author_name, \
                    u.avatar_url AS author_avatar, \
                    f.name AS file_name \
             FROM comments c \
             JOIN files f ON f.id = c.file_id \
             LEFT JOIN users u ON u.id = c.user_id \
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let user = row.author.into_summary(row.comment.user_id);
                CommentDetail {
                    comment: row.comment,
                    user,
                    file_name: row.file_name,
                }
            })
            .collect())
    }

    /// List a file's comments newest first, with author.
    pub async fn find_by_file(&self, file_id: FileId) -> AppResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.*, \
                    COALESCE(NULLIF(BTRIM(u.full_name), ''), u.username, 'Unknown') AS author_name, \
                    u.avatar_url AS author_avatar, \
                    f.name AS file_name \
             FROM comments c \
             JOIN files f ON f.id = c.file_id \
             LEFT JOIN users u ON u.id = c.user_id \
             WHERE c.file_id = $1 \
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .bind(file_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list file comments", e))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let user = row.author.into_summary(row.comment.user_id);
                CommentWithAuthor {
                    comment: row.comment,
                    user,
                }
            })
            .collect())
    }
}
