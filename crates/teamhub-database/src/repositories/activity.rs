//! Activity log repository implementation.
//!
//! The activity log is append-only; this repository offers no update or
//! delete operations.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::result::AppResult;
use teamhub_core::types::RecentLimit;
use teamhub_entity::activity::{Activity, ActivityDetail, NewActivity};

use super::{AuthorColumns, db_error};

#[derive(Debug, FromRow)]
struct ActivityRow {
    #[sqlx(flatten)]
    activity: Activity,
    #[sqlx(flatten)]
    author: AuthorColumns,
    file_name: Option<String>,
}

/// Repository for activity feed entries.
#[derive(Debug, Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    /// Create a new activity repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an activity stamped with the database clock.
    pub async fn create(&self, data: &NewActivity) -> AppResult<Activity> {
        sqlx::query_as::<_, Activity>(
            "INSERT INTO activities (activity_type, user_id, file_id, project_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.activity_type)
        .bind(data.user_id)
        .bind(data.file_id)
        .bind(data.project_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error(format!("Failed to record {} activity", data.activity_type), e))
    }

    /// Most recent activities first, with actor identity and file name.
    pub async fn find_recent(&self, limit: RecentLimit) -> AppResult<Vec<ActivityDetail>> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            "SELECT a.*, \
                    COALESCE(NULLIF(BTRIM(u.full_name), ''), u.username, 'Unknown') AS author_name, \
                    u.avatar_url AS author_avatar, \
                    f.name AS file_name \
             FROM activities a \
             LEFT JOIN users u ON u.id = a.user_id \
             LEFT JOIN files f ON f.id = a.file_id \
             ORDER BY a.\"timestamp\" DESC, a.id DESC \
             LIMIT $1",
        )
        .bind(limit.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list activities", e))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let user = row.author.into_summary(row.activity.user_id);
                ActivityDetail {
                    activity: row.activity,
                    user,
                    file_name: row.file_name,
                }
            })
            .collect())
    }

    /// Activities at or after `since`, oldest first.
    pub async fn find_since(&self, since: DateTime<Utc>) -> AppResult<Vec<Activity>> {
        sqlx::query_as::<_, Activity>(
            "SELECT * FROM activities WHERE \"timestamp\" >= $1 ORDER BY \"timestamp\", id",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list activities", e))
    }
}
