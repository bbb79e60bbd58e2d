//! Project and membership repository implementation.

use std::collections::HashMap;

use sqlx::PgPool;
use tracing::warn;

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::result::AppResult;
use teamhub_core::types::id::{ProjectId, UserId};
use teamhub_entity::project::{
    NewProject, NewProjectMember, Project, ProjectMember, ProjectMemberDetail,
};

use super::{UserRepository, db_error};

/// Repository for projects and their memberships.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
    users: UserRepository,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    /// Insert a project.
    pub async fn create(&self, data: &NewProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    /// Find a project by ID.
    pub async fn find_by_id(&self, id: ProjectId) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find project", e))
    }

    /// Find the oldest project with the given name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find project by name", e)
        })
    }

    /// List all projects in ID order.
    pub async fn find_all(&self) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// Insert a membership row.
    pub async fn add_member(&self, data: &NewProjectMember) -> AppResult<ProjectMember> {
        sqlx::query_as::<_, ProjectMember>(
            "INSERT INTO project_members (user_id, project_id, role) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.project_id)
        .bind(&data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            db_error(
                format!(
                    "Cannot add user {} to project {}",
                    data.user_id, data.project_id
                ),
                e,
            )
        })
    }

    /// List a project's members, earliest first, with their user records.
    pub async fn find_members(&self, project_id: ProjectId) -> AppResult<Vec<ProjectMemberDetail>> {
        let members = sqlx::query_as::<_, ProjectMember>(
            "SELECT * FROM project_members WHERE project_id = $1 ORDER BY joined_at, id",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list project members", e)
        })?;

        let ids: Vec<UserId> = members.iter().map(|m| m.user_id).collect();
        let mut users: HashMap<UserId, _> = self
            .users
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(members
            .into_iter()
            .filter_map(|member| match users.remove(&member.user_id) {
                Some(user) => Some(ProjectMemberDetail { member, user }),
                None => {
                    warn!(user_id = %member.user_id, "Membership references a missing user");
                    None
                }
            })
            .collect())
    }
}
