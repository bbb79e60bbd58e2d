//! Read-only aggregate queries backing the statistics engine.

use sqlx::{FromRow, PgPool};

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::result::AppResult;
use teamhub_core::types::id::UserId;
use teamhub_entity::stats::{ActivityTypeCount, AuthorCounts, NamedCount};
use teamhub_entity::user::UserSummary;

#[derive(Debug, FromRow)]
struct AuthorCountsRow {
    id: UserId,
    name: String,
    avatar_url: Option<String>,
    files_count: i64,
    comments_count: i64,
}

/// Repository of counting queries. Never writes.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    /// Create a new stats repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn scalar(&self, sql: &'static str, what: &str) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to count {what}"), e)
            })
    }

    /// Total number of files.
    pub async fn count_files(&self) -> AppResult<i64> {
        self.scalar("SELECT COUNT(*) FROM files", "files").await
    }

    /// Total number of comments.
    pub async fn count_comments(&self) -> AppResult<i64> {
        self.scalar("SELECT COUNT(*) FROM comments", "comments").await
    }

    /// Distinct users holding a membership in any project.
    pub async fn count_members(&self) -> AppResult<i64> {
        self.scalar(
            "SELECT COUNT(DISTINCT user_id) FROM project_members",
            "members",
        )
        .await
    }

    /// Distinct UTC calendar dates carrying at least one activity.
    pub async fn count_active_days(&self) -> AppResult<i64> {
        self.scalar(
            "SELECT COUNT(DISTINCT (\"timestamp\" AT TIME ZONE 'UTC')::date) FROM activities",
            "active days",
        )
        .await
    }

    /// File counts per declared type.
    pub async fn file_type_counts(&self) -> AppResult<Vec<NamedCount>> {
        sqlx::query_as::<_, NamedCount>(
            "SELECT file_type AS name, COUNT(*) AS value FROM files GROUP BY file_type",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count file types", e))
    }

    /// Activity counts per activity type.
    pub async fn activity_type_counts(&self) -> AppResult<Vec<ActivityTypeCount>> {
        sqlx::query_as::<_, ActivityTypeCount>(
            "SELECT activity_type, COUNT(*) AS count FROM activities GROUP BY activity_type",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count activity types", e)
        })
    }

    /// Authored files and comments per user, in user ID order.
    pub async fn author_counts(&self) -> AppResult<Vec<AuthorCounts>> {
        let rows = sqlx::query_as::<_, AuthorCountsRow>(
            "SELECT u.id, \
                    COALESCE(NULLIF(BTRIM(u.full_name), ''), u.username) AS name, \
                    u.avatar_url, \
                    (SELECT COUNT(*) FROM files f WHERE f.user_id = u.id) AS files_count, \
                    (SELECT COUNT(*) FROM comments c WHERE c.user_id = u.id) AS comments_count \
             FROM users u \
             ORDER BY u.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count authorship", e))?;

        Ok(rows
            .into_iter()
            .map(|row| AuthorCounts {
                user: UserSummary {
                    id: row.id,
                    name: row.name,
                    avatar_url: row.avatar_url,
                },
                files_count: row.files_count,
                comments_count: row.comments_count,
            })
            .collect())
    }
}
