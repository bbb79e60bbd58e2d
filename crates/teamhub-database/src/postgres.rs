//! PostgreSQL-backed [`EntityStore`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use teamhub_core::result::AppResult;
use teamhub_core::types::RecentLimit;
use teamhub_core::types::id::{FileId, ProjectId, UserId};
use teamhub_entity::activity::{Activity, ActivityDetail, NewActivity};
use teamhub_entity::comment::{Comment, CommentDetail, CommentWithAuthor, NewComment};
use teamhub_entity::file::{
    CreatedFile, File, FileVersion, FileVersionWithAuthor, FileWithUploader, NewFile,
    NewFileVersion,
};
use teamhub_entity::project::{
    EnrolledUser, NewProject, NewProjectMember, Project, ProjectMember, ProjectMemberDetail,
};
use teamhub_entity::stats::{ActivityTypeCount, AuthorCounts, NamedCount};
use teamhub_entity::user::{NewUser, User};

use crate::connection::DatabasePool;
use crate::repositories::{
    ActivityRepository, CommentRepository, FileRepository, FileVersionRepository,
    ProjectRepository, StatsRepository, UserRepository,
};
use crate::store::EntityStore;

/// The production entity store: one repository per entity family over a
/// shared connection pool.
#[derive(Debug, Clone)]
pub struct PgEntityStore {
    users: UserRepository,
    projects: ProjectRepository,
    files: FileRepository,
    versions: FileVersionRepository,
    comments: CommentRepository,
    activities: ActivityRepository,
    stats: StatsRepository,
}

impl PgEntityStore {
    /// Build the store over an open pool.
    pub fn new(db: &DatabasePool) -> Self {
        Self::from_pool(db.pool().clone())
    }

    /// Build the store over a raw sqlx pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            projects: ProjectRepository::new(pool.clone()),
            files: FileRepository::new(pool.clone()),
            versions: FileVersionRepository::new(pool.clone()),
            comments: CommentRepository::new(pool.clone()),
            activities: ActivityRepository::new(pool.clone()),
            stats: StatsRepository::new(pool),
        }
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    async fn create_user(&self, data: &NewUser) -> AppResult<User> {
        self.users.create(data).await
    }

    async fn create_user_in_project(
        &self,
        data: &NewUser,
        project_id: ProjectId,
    ) -> AppResult<EnrolledUser> {
        self.users.create_in_project(data, project_id).await
    }

    async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.users.find_by_username(username).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    async fn create_project(&self, data: &NewProject) -> AppResult<Project> {
        self.projects.create(data).await
    }

    async fn find_project(&self, id: ProjectId) -> AppResult<Option<Project>> {
        self.projects.find_by_id(id).await
    }

    async fn find_project_by_name(&self, name: &str) -> AppResult<Option<Project>> {
        self.projects.find_by_name(name).await
    }

    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        self.projects.find_all().await
    }

    async fn add_project_member(&self, data: &NewProjectMember) -> AppResult<ProjectMember> {
        self.projects.add_member(data).await
    }

    async fn list_project_members(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectMemberDetail>> {
        self.projects.find_members(project_id).await
    }

    async fn create_file(&self, data: &NewFile) -> AppResult<CreatedFile> {
        self.files.create(data).await
    }

    async fn find_file(&self, id: FileId) -> AppResult<Option<File>> {
        self.files.find_by_id(id).await
    }

    async fn find_file_with_uploader(&self, id: FileId) -> AppResult<Option<FileWithUploader>> {
        self.files.find_with_uploader(id).await
    }

    async fn list_files(&self, limit: Option<RecentLimit>) -> AppResult<Vec<FileWithUploader>> {
        self.files.find_recent(limit).await
    }

    async fn create_file_version(&self, data: &NewFileVersion) -> AppResult<FileVersion> {
        self.versions.create(data).await
    }

    async fn list_file_versions(&self, file_id: FileId) -> AppResult<Vec<FileVersionWithAuthor>> {
        self.versions.find_by_file(file_id).await
    }

    async fn find_file_version(
        &self,
        file_id: FileId,
        version: i32,
    ) -> AppResult<Option<FileVersion>> {
        self.versions.find(file_id, version).await
    }

    async fn create_comment(&self, data: &NewComment) -> AppResult<Comment> {
        self.comments.create(data).await
    }

    async fn list_comments(&self) -> AppResult<Vec<CommentDetail>> {
        self.comments.find_all().await
    }

    async fn list_file_comments(&self, file_id: FileId) -> AppResult<Vec<CommentWithAuthor>> {
        self.comments.find_by_file(file_id).await
    }

    async fn create_activity(&self, data: &NewActivity) -> AppResult<Activity> {
        self.activities.create(data).await
    }

    async fn list_activities(&self, limit: RecentLimit) -> AppResult<Vec<ActivityDetail>> {
        self.activities.find_recent(limit).await
    }

    async fn list_activities_since(&self, since: DateTime<Utc>) -> AppResult<Vec<Activity>> {
        self.activities.find_since(since).await
    }

    async fn count_files(&self) -> AppResult<i64> {
        self.stats.count_files().await
    }

    async fn count_comments(&self) -> AppResult<i64> {
        self.stats.count_comments().await
    }

    async fn count_members(&self) -> AppResult<i64> {
        self.stats.count_members().await
    }

    async fn count_active_days(&self) -> AppResult<i64> {
        self.stats.count_active_days().await
    }

    async fn file_type_counts(&self) -> AppResult<Vec<NamedCount>> {
        self.stats.file_type_counts().await
    }

    async fn activity_type_counts(&self) -> AppResult<Vec<ActivityTypeCount>> {
        self.stats.activity_type_counts().await
    }

    async fn author_counts(&self) -> AppResult<Vec<AuthorCounts>> {
        self.stats.author_counts().await
    }
}
