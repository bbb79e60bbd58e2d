//! Project service: the default project, project creation, and membership.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use teamhub_core::config::ProjectsConfig;
use teamhub_core::error::AppError;
use teamhub_core::events::CollaborationEvent;
use teamhub_core::result::AppResult;
use teamhub_core::types::id::{ProjectId, UserId};
use teamhub_database::EntityStore;
use teamhub_entity::project::{
    NewProject, NewProjectMember, Project, ProjectMember, ProjectMemberDetail,
};

use crate::events::EventBus;

/// Manages projects and who belongs to them.
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn EntityStore>,
    bus: Arc<EventBus>,
    config: ProjectsConfig,
}

impl std::fmt::Debug for ProjectService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectService")
            .field("default_project", &self.config.default_name)
            .finish()
    }
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(store: Arc<dyn EntityStore>, bus: Arc<EventBus>, config: ProjectsConfig) -> Self {
        Self { store, bus, config }
    }

    /// Returns the default project, creating it on first use.
    pub async fn ensure_default_project(&self) -> AppResult<Project> {
        if let Some(project) = self
            .store
            .find_project_by_name(&self.config.default_name)
            .await?
        {
            return Ok(project);
        }

        let project = self
            .create_project(NewProject {
                name: self.config.default_name.clone(),
                description: self.config.default_description.clone(),
            })
            .await?;
        info!(project_id = %project.id, name = %project.name, "Default project created");
        Ok(project)
    }

    /// Creates a project.
    pub async fn create_project(&self, data: NewProject) -> AppResult<Project> {
        data.validate()?;
        if data.name.trim().is_empty() {
            return Err(AppError::invalid_input("Project name is required"));
        }
        let project = self.store.create_project(&data).await?;
        info!(project_id = %project.id, name = %project.name, "Project created");
        Ok(project)
    }

    /// Gets a project by ID.
    pub async fn get_project(&self, project_id: ProjectId) -> AppResult<Project> {
        self.store
            .find_project(project_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Project {project_id} not found")))
    }

    /// Lists all projects.
    pub async fn list_projects(&self) -> AppResult<Vec<Project>> {
        self.store.list_projects().await
    }

    /// Adds a user to a project with the default role and announces the join.
    pub async fn add_member(
        &self,
        user_id: UserId,
        project_id: ProjectId,
    ) -> AppResult<ProjectMember> {
        let member = self
            .store
            .add_project_member(&NewProjectMember::member(user_id, project_id))
            .await?;
        self.announce_join(&member).await?;
        Ok(member)
    }

    /// Publishes `MemberJoined` for a membership that has been committed.
    pub(crate) async fn announce_join(&self, member: &ProjectMember) -> AppResult<()> {
        info!(
            user_id = %member.user_id,
            project_id = %member.project_id,
            "User joined project"
        );
        self.bus
            .emit(
                member.user_id,
                CollaborationEvent::MemberJoined {
                    user_id: member.user_id,
                    project_id: member.project_id,
                },
            )
            .await
    }

    /// Lists a project's members with their user records.
    pub async fn list_members(&self, project_id: ProjectId) -> AppResult<Vec<ProjectMemberDetail>> {
        self.get_project(project_id).await?;
        self.store.list_project_members(project_id).await
    }
}

#[cfg(test)]
mod tests {
    use teamhub_core::error::ErrorKind;

    use super::*;
    use crate::testing::Fixture;

    #[tokio::test]
    async fn test_default_project_is_idempotent() {
        let fx = Fixture::new().await;
        let again = fx.hub.projects.ensure_default_project().await.unwrap();
        assert_eq!(again.id, fx.default_project.id);
        assert_eq!(fx.hub.projects.list_projects().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_member_to_second_project() {
        let fx = Fixture::new().await;
        let ada = fx.register("ada").await;
        let side = fx
            .hub
            .projects
            .create_project(NewProject {
                name: "Side Quest".into(),
                description: None,
            })
            .await
            .unwrap();

        let before = fx.activity_count().await;
        fx.hub.projects.add_member(ada.id, side.id).await.unwrap();
        assert_eq!(fx.activity_count().await, before + 1);

        let members = fx.hub.projects.list_members(side.id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].user.username, "ada");

        let err = fx.hub.projects.add_member(ada.id, side.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyExists);
        assert_eq!(fx.activity_count().await, before + 1);
    }

    #[tokio::test]
    async fn test_blank_project_name_rejected() {
        let fx = Fixture::new().await;
        let err = fx
            .hub
            .projects
            .create_project(NewProject {
                name: "   ".into(),
                description: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_missing_project_is_not_found() {
        let fx = Fixture::new().await;
        let err = fx
            .hub
            .projects
            .list_members(ProjectId(9999))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
