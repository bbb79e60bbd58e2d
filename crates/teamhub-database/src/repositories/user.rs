//! User repository implementation.

use sqlx::PgPool;
use tracing::debug;

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::result::AppResult;
use teamhub_core::types::id::{ProjectId, UserId};
use teamhub_entity::project::{DEFAULT_MEMBER_ROLE, EnrolledUser, ProjectMember};
use teamhub_entity::user::{NewUser, User};

use super::db_error;

/// Repository for user creation and lookup.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user. The case-insensitive username index turns a
    /// duplicate into `AlreadyExists`.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, full_name, email, avatar_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.password)
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error(format!("Username '{}' is not available", data.username), e))
    }

    /// Insert a user and their default-role membership of `project_id` in
    /// one transaction.
    pub async fn create_in_project(
        &self,
        data: &NewUser,
        project_id: ProjectId,
    ) -> AppResult<EnrolledUser> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, full_name, email, avatar_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.password)
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.avatar_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error(format!("Username '{}' is not available", data.username), e))?;

        let membership = sqlx::query_as::<_, ProjectMember>(
            "INSERT INTO project_members (user_id, project_id, role) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user.id)
        .bind(project_id)
        .bind(DEFAULT_MEMBER_ROLE)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error(format!("Project {project_id} not found"), e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit user", e))?;

        debug!(user_id = %user.id, project_id = %project_id, "Inserted user with membership");
        Ok(EnrolledUser { user, membership })
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// List all users in ID order.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Fetch the users with the given IDs, in ID order.
    pub async fn find_many(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        let raw: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ANY($1) ORDER BY id")
            .bind(raw)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load users", e))
    }
}
