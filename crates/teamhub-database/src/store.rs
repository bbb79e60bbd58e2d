//! The entity store interface shared by the PostgreSQL store and the
//! in-memory fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

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

/// Create/read access to every TeamHub entity plus the raw counts the
/// aggregation engine builds on.
///
/// Writes that reference a missing parent fail with `NotFound`; a duplicate
/// username (compared case-insensitively) fails with `AlreadyExists`.
/// Joined reads never fail on a dangling user reference and substitute the
/// `Unknown` identity instead.
#[async_trait]
pub trait EntityStore: Send + Sync {
    // -- users --

    /// Insert a user.
    async fn create_user(&self, data: &NewUser) -> AppResult<User>;

    /// Insert a user and their membership of `project_id` (default role)
    /// atomically: either both rows exist afterwards or neither does.
    async fn create_user_in_project(
        &self,
        data: &NewUser,
        project_id: ProjectId,
    ) -> AppResult<EnrolledUser>;

    /// Find a user by ID.
    async fn find_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by username, ignoring case.
    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// List all users in ID order.
    async fn list_users(&self) -> AppResult<Vec<User>>;

    // -- projects --

    /// Insert a project.
    async fn create_project(&self, data: &NewProject) -> AppResult<Project>;

    /// Find a project by ID.
    async fn find_project(&self, id: ProjectId) -> AppResult<Option<Project>>;

    /// Find the first project (lowest ID) with exactly this name.
    async fn find_project_by_name(&self, name: &str) -> AppResult<Option<Project>>;

    /// List all projects in ID order.
    async fn list_projects(&self) -> AppResult<Vec<Project>>;

    /// Add a user to a project. A second membership for the same pair
    /// fails with `AlreadyExists`.
    async fn add_project_member(&self, data: &NewProjectMember) -> AppResult<ProjectMember>;

    /// List a project's members, earliest first, with their user records.
    async fn list_project_members(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectMemberDetail>>;

    // -- files and versions --

    /// Insert a file together with its version 1 (action `"uploaded"`).
    async fn create_file(&self, data: &NewFile) -> AppResult<CreatedFile>;

    /// Find a file by ID.
    async fn find_file(&self, id: FileId) -> AppResult<Option<File>>;

    /// Find a file by ID together with its uploader.
    async fn find_file_with_uploader(&self, id: FileId) -> AppResult<Option<FileWithUploader>>;

    /// List files newest first, optionally limited.
    async fn list_files(&self, limit: Option<RecentLimit>) -> AppResult<Vec<FileWithUploader>>;

    /// Append a version numbered one above the file's highest existing
    /// version and move the file's `updated_at` to now. Number assignment
    /// is serialized per file.
    async fn create_file_version(&self, data: &NewFileVersion) -> AppResult<FileVersion>;

    /// List a file's versions, highest version first.
    async fn list_file_versions(&self, file_id: FileId) -> AppResult<Vec<FileVersionWithAuthor>>;

    /// Find one version of a file by number.
    async fn find_file_version(
        &self,
        file_id: FileId,
        version: i32,
    ) -> AppResult<Option<FileVersion>>;

    // -- comments --

    /// Insert a comment.
    async fn create_comment(&self, data: &NewComment) -> AppResult<Comment>;

    /// List every comment newest first, with author and file name.
    async fn list_comments(&self) -> AppResult<Vec<CommentDetail>>;

    /// List a file's comments newest first, with author.
    async fn list_file_comments(&self, file_id: FileId) -> AppResult<Vec<CommentWithAuthor>>;

    // -- activities --

    /// Append an activity stamped with the current time.
    async fn create_activity(&self, data: &NewActivity) -> AppResult<Activity>;

    /// List the most recent activities, newest first, with actor and file name.
    async fn list_activities(&self, limit: RecentLimit) -> AppResult<Vec<ActivityDetail>>;

    /// List activities at or after `since`, oldest first.
    async fn list_activities_since(&self, since: DateTime<Utc>) -> AppResult<Vec<Activity>>;

    // -- aggregation primitives --

    /// Total number of files.
    async fn count_files(&self) -> AppResult<i64>;

    /// Total number of comments.
    async fn count_comments(&self) -> AppResult<i64>;

    /// Number of distinct users holding at least one membership.
    async fn count_members(&self) -> AppResult<i64>;

    /// Number of distinct UTC calendar dates with at least one activity.
    async fn count_active_days(&self) -> AppResult<i64>;

    /// File counts grouped by declared type, in no particular order.
    async fn file_type_counts(&self) -> AppResult<Vec<NamedCount>>;

    /// Activity counts grouped by type; types without activities are absent.
    async fn activity_type_counts(&self) -> AppResult<Vec<ActivityTypeCount>>;

    /// Authored files and comments for every user, in user ID order.
    async fn author_counts(&self) -> AppResult<Vec<AuthorCounts>>;
}
