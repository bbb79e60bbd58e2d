//! In-memory [`EntityStore`] used by service and scenario tests.
//!
//! Mirrors the PostgreSQL store's observable behavior: foreign keys are
//! checked on every write, usernames are unique ignoring case, version
//! numbers are assigned under the store's write lock, and joined reads
//! fall back to the `Unknown` identity.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use teamhub_core::error::AppError;
use teamhub_core::result::AppResult;
use teamhub_core::types::RecentLimit;
use teamhub_core::types::id::{
    ActivityId, CommentId, FileId, FileVersionId, IdSequence, ProjectId, ProjectMemberId, UserId,
};
use teamhub_entity::activity::{Activity, ActivityDetail, ActivityType, NewActivity};
use teamhub_entity::comment::{Comment, CommentDetail, CommentWithAuthor, NewComment};
use teamhub_entity::file::{
    ACTION_UPLOADED, CreatedFile, File, FileVersion, FileVersionWithAuthor, FileWithUploader,
    NewFile, NewFileVersion,
};
use teamhub_entity::project::{
    DEFAULT_MEMBER_ROLE, EnrolledUser, NewProject, NewProjectMember, Project, ProjectMember,
    ProjectMemberDetail,
};
use teamhub_entity::stats::{ActivityTypeCount, AuthorCounts, NamedCount};
use teamhub_entity::user::{NewUser, User, UserSummary};

use crate::store::EntityStore;

#[derive(Debug, Default)]
struct State {
    users: BTreeMap<UserId, User>,
    projects: BTreeMap<ProjectId, Project>,
    members: BTreeMap<ProjectMemberId, ProjectMember>,
    files: BTreeMap<FileId, File>,
    versions: BTreeMap<FileVersionId, FileVersion>,
    comments: BTreeMap<CommentId, Comment>,
    activities: BTreeMap<ActivityId, Activity>,
}

impl State {
    fn summary(&self, id: UserId) -> UserSummary {
        self.users
            .get(&id)
            .map(User::summary)
            .unwrap_or_else(|| UserSummary::unknown(id))
    }

    fn require_user(&self, id: UserId) -> AppResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::not_found(format!("User {id} not found")))
        }
    }

    fn require_project(&self, id: ProjectId) -> AppResult<()> {
        if self.projects.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Project {id} not found")))
        }
    }

    fn require_file(&self, id: FileId) -> AppResult<()> {
        if self.files.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::not_found(format!("File {id} not found")))
        }
    }

    fn with_uploader(&self, file: &File) -> FileWithUploader {
        FileWithUploader {
            file: file.clone(),
            user: self.summary(file.user_id),
        }
    }

    fn insert_user(&mut self, ids: &IdSequence, data: &NewUser) -> AppResult<User> {
        let wanted = data.username.to_lowercase();
        if self
            .users
            .values()
            .any(|u| u.username.to_lowercase() == wanted)
        {
            return Err(AppError::already_exists(format!(
                "Username '{}' is not available",
                data.username
            )));
        }
        let user = User {
            id: ids.next(),
            username: data.username.clone(),
            password: data.password.clone(),
            full_name: data.full_name.clone(),
            email: data.email.clone(),
            avatar_url: data.avatar_url.clone(),
            created_at: Utc::now(),
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn insert_member(
        &mut self,
        ids: &IdSequence,
        data: &NewProjectMember,
    ) -> AppResult<ProjectMember> {
        self.require_user(data.user_id)?;
        self.require_project(data.project_id)?;
        if self
            .members
            .values()
            .any(|m| m.user_id == data.user_id && m.project_id == data.project_id)
        {
            return Err(AppError::already_exists(format!(
                "User {} is already a member of project {}",
                data.user_id, data.project_id
            )));
        }
        let member = ProjectMember {
            id: ids.next(),
            user_id: data.user_id,
            project_id: data.project_id,
            role: data.role.clone(),
            joined_at: Utc::now(),
        };
        self.members.insert(member.id, member.clone());
        Ok(member)
    }

    fn insert_activity(
        &mut self,
        ids: &IdSequence,
        data: &NewActivity,
        timestamp: DateTime<Utc>,
    ) -> AppResult<Activity> {
        self.require_user(data.user_id)?;
        self.require_project(data.project_id)?;
        if let Some(file_id) = data.file_id {
            self.require_file(file_id)?;
        }
        let activity = Activity {
            id: ids.next(),
            activity_type: data.activity_type,
            user_id: data.user_id,
            file_id: data.file_id,
            project_id: data.project_id,
            timestamp,
        };
        self.activities.insert(activity.id, activity.clone());
        Ok(activity)
    }
}

/// Entity store kept entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryEntityStore {
    ids: Arc<IdSequence>,
    state: RwLock<State>,
}

impl MemoryEntityStore {
    /// Create an empty store with its own id sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store drawing ids from a shared sequence.
    pub fn with_sequence(ids: Arc<IdSequence>) -> Self {
        Self {
            ids,
            state: RwLock::default(),
        }
    }

    /// Append an activity with an explicit timestamp, for seeding history.
    pub async fn create_activity_at(
        &self,
        data: &NewActivity,
        timestamp: DateTime<Utc>,
    ) -> AppResult<Activity> {
        let mut state = self.state.write().await;
        state.insert_activity(&self.ids, data, timestamp)
    }
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    async fn create_user(&self, data: &NewUser) -> AppResult<User> {
        let mut state = self.state.write().await;
        state.insert_user(&self.ids, data)
    }

    async fn create_user_in_project(
        &self,
        data: &NewUser,
        project_id: ProjectId,
    ) -> AppResult<EnrolledUser> {
        let mut state = self.state.write().await;
        // Checked up front so a failure leaves no user behind.
        state.require_project(project_id)?;
        let user = state.insert_user(&self.ids, data)?;
        let membership = state.insert_member(
            &self.ids,
            &NewProjectMember {
                user_id: user.id,
                project_id,
                role: DEFAULT_MEMBER_ROLE.to_string(),
            },
        )?;
        Ok(EnrolledUser { user, membership })
    }

    async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let wanted = username.to_lowercase();
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .find(|u| u.username.to_lowercase() == wanted)
            .cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn create_project(&self, data: &NewProject) -> AppResult<Project> {
        let mut state = self.state.write().await;
        let project = Project {
            id: self.ids.next(),
            name: data.name.clone(),
            description: data.description.clone(),
            created_at: Utc::now(),
        };
        state.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn find_project(&self, id: ProjectId) -> AppResult<Option<Project>> {
        Ok(self.state.read().await.projects.get(&id).cloned())
    }

    async fn find_project_by_name(&self, name: &str) -> AppResult<Option<Project>> {
        Ok(self
            .state
            .read()
            .await
            .projects
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        Ok(self.state.read().await.projects.values().cloned().collect())
    }

    async fn add_project_member(&self, data: &NewProjectMember) -> AppResult<ProjectMember> {
        let mut state = self.state.write().await;
        state.insert_member(&self.ids, data)
    }

    async fn list_project_members(
        &self,
        project_id: ProjectId,
    ) -> AppResult<Vec<ProjectMemberDetail>> {
        let state = self.state.read().await;
        Ok(state
            .members
            .values()
            .filter(|m| m.project_id == project_id)
            .filter_map(|m| {
                state.users.get(&m.user_id).map(|user| ProjectMemberDetail {
                    member: m.clone(),
                    user: user.clone(),
                })
            })
            .collect())
    }

    async fn create_file(&self, data: &NewFile) -> AppResult<CreatedFile> {
        let mut state = self.state.write().await;
        state.require_user(data.user_id)?;
        state.require_project(data.project_id)?;
        let now = Utc::now();
        let file = File {
            id: self.ids.next(),
            name: data.name.clone(),
            file_type: data.file_type.clone(),
            size_bytes: data.size_bytes,
            location: data.location.clone(),
            description: data.description.clone(),
            user_id: data.user_id,
            project_id: data.project_id,
            created_at: now,
            updated_at: now,
        };
        let initial_version = FileVersion {
            id: self.ids.next(),
            file_id: file.id,
            version: 1,
            location: file.location.clone(),
            size_bytes: file.size_bytes,
            user_id: file.user_id,
            action: ACTION_UPLOADED.to_string(),
            notes: None,
            created_at: now,
        };
        state.files.insert(file.id, file.clone());
        state
            .versions
            .insert(initial_version.id, initial_version.clone());
        Ok(CreatedFile {
            file,
            initial_version,
        })
    }

    async fn find_file(&self, id: FileId) -> AppResult<Option<File>> {
        Ok(self.state.read().await.files.get(&id).cloned())
    }

    async fn find_file_with_uploader(&self, id: FileId) -> AppResult<Option<FileWithUploader>> {
        let state = self.state.read().await;
        Ok(state.files.get(&id).map(|f| state.with_uploader(f)))
    }

    async fn list_files(&self, limit: Option<RecentLimit>) -> AppResult<Vec<FileWithUploader>> {
        let state = self.state.read().await;
        let mut files: Vec<&File> = state.files.values().collect();
        files.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        let take = limit.map_or(files.len(), |l| l.as_usize());
        Ok(files
            .into_iter()
            .take(take)
            .map(|f| state.with_uploader(f))
            .collect())
    }

    async fn create_file_version(&self, data: &NewFileVersion) -> AppResult<FileVersion> {
        let mut state = self.state.write().await;
        state.require_file(data.file_id)?;
        state.require_user(data.user_id)?;
        let next = state
            .versions
            .values()
            .filter(|v| v.file_id == data.file_id)
            .map(|v| v.version)
            .max()
            .unwrap_or(0)
            + 1;
        let now = Utc::now();
        let version = FileVersion {
            id: self.ids.next(),
            file_id: data.file_id,
            version: next,
            location: data.location.clone(),
            size_bytes: data.size_bytes,
            user_id: data.user_id,
            action: data.action.clone(),
            notes: data.notes.clone(),
            created_at: now,
        };
        state.versions.insert(version.id, version.clone());
        if let Some(file) = state.files.get_mut(&data.file_id) {
            file.updated_at = now;
        }
        Ok(version)
    }

    async fn list_file_versions(&self, file_id: FileId) -> AppResult<Vec<FileVersionWithAuthor>> {
        let state = self.state.read().await;
        let mut versions: Vec<FileVersionWithAuthor> = state
            .versions
            .values()
            .filter(|v| v.file_id == file_id)
            .map(|v| FileVersionWithAuthor {
                version: v.clone(),
                user: state.summary(v.user_id),
            })
            .collect();
        versions.sort_by(|a, b| b.version.version.cmp(&a.version.version));
        Ok(versions)
    }

    async fn find_file_version(
        &self,
        file_id: FileId,
        version: i32,
    ) -> AppResult<Option<FileVersion>> {
        Ok(self
            .state
            .read()
            .await
            .versions
            .values()
            .find(|v| v.file_id == file_id && v.version == version)
            .cloned())
    }

    async fn create_comment(&self, data: &NewComment) -> AppResult<Comment> {
        let mut state = self.state.write().await;
        state.require_file(data.file_id)?;
        state.require_user(data.user_id)?;
        let comment = Comment {
            id: self.ids.next(),
            text: data.text.clone(),
            file_id: data.file_id,
            user_id: data.user_id,
            created_at: Utc::now(),
        };
        state.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn list_comments(&self) -> AppResult<Vec<CommentDetail>> {
        let state = self.state.read().await;
        let mut comments: Vec<CommentDetail> = state
            .comments
            .values()
            .filter_map(|c| {
                state.files.get(&c.file_id).map(|f| CommentDetail {
                    comment: c.clone(),
                    user: state.summary(c.user_id),
                    file_name: f.name.clone(),
                })
            })
            .collect();
        comments.sort_by(|a, b| {
            (b.comment.created_at, b.comment.id).cmp(&(a.comment.created_at, a.comment.id))
        });
        Ok(comments)
    }

    async fn list_file_comments(&self, file_id: FileId) -> AppResult<Vec<CommentWithAuthor>> {
        let state = self.state.read().await;
        let mut comments: Vec<CommentWithAuthor> = state
            .comments
            .values()
            .filter(|c| c.file_id == file_id)
            .map(|c| CommentWithAuthor {
                comment: c.clone(),
                user: state.summary(c.user_id),
            })
            .collect();
        comments.sort_by(|a, b| {
            (b.comment.created_at, b.comment.id).cmp(&(a.comment.created_at, a.comment.id))
        });
        Ok(comments)
    }

    async fn create_activity(&self, data: &NewActivity) -> AppResult<Activity> {
        let mut state = self.state.write().await;
        state.insert_activity(&self.ids, data, Utc::now())
    }

    async fn list_activities(&self, limit: RecentLimit) -> AppResult<Vec<ActivityDetail>> {
        let state = self.state.read().await;
        let mut activities: Vec<&Activity> = state.activities.values().collect();
        activities.sort_by(|a, b| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));
        Ok(activities
            .into_iter()
            .take(limit.as_usize())
            .map(|a| ActivityDetail {
                activity: a.clone(),
                user: state.summary(a.user_id),
                file_name: a
                    .file_id
                    .and_then(|id| state.files.get(&id))
                    .map(|f| f.name.clone()),
            })
            .collect())
    }

    async fn list_activities_since(&self, since: DateTime<Utc>) -> AppResult<Vec<Activity>> {
        let state = self.state.read().await;
        let mut activities: Vec<Activity> = state
            .activities
            .values()
            .filter(|a| a.timestamp >= since)
            .cloned()
            .collect();
        activities.sort_by(|a, b| (a.timestamp, a.id).cmp(&(b.timestamp, b.id)));
        Ok(activities)
    }

    async fn count_files(&self) -> AppResult<i64> {
        Ok(self.state.read().await.files.len() as i64)
    }

    async fn count_comments(&self) -> AppResult<i64> {
        Ok(self.state.read().await.comments.len() as i64)
    }

    async fn count_members(&self) -> AppResult<i64> {
        let state = self.state.read().await;
        let distinct: BTreeSet<UserId> = state.members.values().map(|m| m.user_id).collect();
        Ok(distinct.len() as i64)
    }

    async fn count_active_days(&self) -> AppResult<i64> {
        let state = self.state.read().await;
        let days: BTreeSet<_> = state
            .activities
            .values()
            .map(|a| a.timestamp.date_naive())
            .collect();
        Ok(days.len() as i64)
    }

    async fn file_type_counts(&self) -> AppResult<Vec<NamedCount>> {
        let state = self.state.read().await;
        let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
        for file in state.files.values() {
            *counts.entry(file.file_type.as_str()).or_insert(0) += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(name, value)| NamedCount::new(name, value))
            .collect())
    }

    async fn activity_type_counts(&self) -> AppResult<Vec<ActivityTypeCount>> {
        let state = self.state.read().await;
        let mut counts: HashMap<ActivityType, i64> = HashMap::new();
        for activity in state.activities.values() {
            *counts.entry(activity.activity_type).or_insert(0) += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(activity_type, count)| ActivityTypeCount {
                activity_type,
                count,
            })
            .collect())
    }

    async fn author_counts(&self) -> AppResult<Vec<AuthorCounts>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .map(|user| AuthorCounts {
                user: user.summary(),
                files_count: state.files.values().filter(|f| f.user_id == user.id).count() as i64,
                comments_count: state
                    .comments
                    .values()
                    .filter(|c| c.user_id == user.id)
                    .count() as i64,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use teamhub_core::error::ErrorKind;

    use super::*;

    async fn seed() -> (MemoryEntityStore, User, Project) {
        let store = MemoryEntityStore::new();
        let user = store
            .create_user(&NewUser::new("ada", "pw").with_full_name("Ada Lovelace"))
            .await
            .unwrap();
        let project = store
            .create_project(&NewProject {
                name: "Team Project".into(),
                description: None,
            })
            .await
            .unwrap();
        (store, user, project)
    }

    #[tokio::test]
    async fn test_user_in_project_is_all_or_nothing() {
        let (store, _, project) = seed().await;

        let err = store
            .create_user_in_project(&NewUser::new("bob", "pw"), ProjectId(9999))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(store.find_user_by_username("bob").await.unwrap().is_none());

        let enrolled = store
            .create_user_in_project(&NewUser::new("bob", "pw"), project.id)
            .await
            .unwrap();
        assert_eq!(enrolled.membership.user_id, enrolled.user.id);
        assert_eq!(enrolled.membership.role, "member");
        assert_eq!(store.list_project_members(project.id).await.unwrap().len(), 1);

        let err = store
            .create_user_in_project(&NewUser::new("ADA", "pw"), project.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyExists);
        assert_eq!(store.list_project_members(project.id).await.unwrap().len(), 1);
    }

    fn new_file(user: &User, project: &Project, name: &str, file_type: &str) -> NewFile {
        NewFile {
            name: name.into(),
            file_type: file_type.into(),
            size_bytes: 12,
            location: format!("uploads/{name}"),
            description: None,
            user_id: user.id,
            project_id: project.id,
        }
    }

    fn new_version(file_id: FileId, user_id: UserId) -> NewFileVersion {
        NewFileVersion {
            file_id,
            location: "versions/x".into(),
            size_bytes: 20,
            user_id,
            action: "updated".into(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_username_unique_ignoring_case() {
        let (store, _, _) = seed().await;
        let err = store
            .create_user(&NewUser::new("ADA", "pw"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyExists);

        let found = store.find_user_by_username("aDa").await.unwrap();
        assert_eq!(found.map(|u| u.username), Some("ada".to_string()));
    }

    #[tokio::test]
    async fn test_writes_check_parents() {
        let (store, user, project) = seed().await;

        let mut orphan = new_file(&user, &project, "a.txt", "Text");
        orphan.project_id = ProjectId(999);
        let err = store.create_file(&orphan).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let err = store
            .create_comment(&NewComment {
                text: "hi".into(),
                file_id: FileId(999),
                user_id: user.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let err = store
            .create_file_version(&new_version(FileId(999), user.id))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let err = store
            .add_project_member(&NewProjectMember::member(UserId(999), project.id))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_duplicate_membership_rejected() {
        let (store, user, project) = seed().await;
        store
            .add_project_member(&NewProjectMember::member(user.id, project.id))
            .await
            .unwrap();
        let err = store
            .add_project_member(&NewProjectMember::member(user.id, project.id))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyExists);
        assert_eq!(store.count_members().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_versions_increment_and_touch_file() {
        let (store, user, project) = seed().await;
        let created = store
            .create_file(&new_file(&user, &project, "plan.md", "Text"))
            .await
            .unwrap();
        assert_eq!(created.initial_version.version, 1);
        assert_eq!(created.initial_version.action, ACTION_UPLOADED);

        let v2 = store
            .create_file_version(&new_version(created.file.id, user.id))
            .await
            .unwrap();
        let v3 = store
            .create_file_version(&new_version(created.file.id, user.id))
            .await
            .unwrap();
        assert_eq!((v2.version, v3.version), (2, 3));

        let listed: Vec<i32> = store
            .list_file_versions(created.file.id)
            .await
            .unwrap()
            .iter()
            .map(|v| v.version.version)
            .collect();
        assert_eq!(listed, vec![3, 2, 1]);

        let file = store.find_file(created.file.id).await.unwrap().unwrap();
        assert_eq!(file.updated_at, v3.created_at);
        assert_eq!(file.size_bytes, 12);
        assert!(
            store
                .find_file_version(created.file.id, 2)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_joined_reads_fall_back_to_unknown() {
        let (store, user, project) = seed().await;
        let created = store
            .create_file(&new_file(&user, &project, "a.png", "Image"))
            .await
            .unwrap();
        let view = store
            .find_file_with_uploader(created.file.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(view.user.name, "Ada Lovelace");

        store.state.write().await.users.remove(&user.id);

        let view = store
            .find_file_with_uploader(created.file.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(view.user, UserSummary::unknown(user.id));
    }

    #[tokio::test]
    async fn test_list_files_newest_first_with_limit() {
        let (store, user, project) = seed().await;
        for name in ["a.txt", "b.txt", "c.txt"] {
            store
                .create_file(&new_file(&user, &project, name, "Text"))
                .await
                .unwrap();
        }
        let names: Vec<String> = store
            .list_files(Some(RecentLimit::new(2)))
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.file.name)
            .collect();
        assert_eq!(names, vec!["c.txt", "b.txt"]);
        assert_eq!(store.list_files(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_active_days_counts_distinct_dates() {
        let (store, user, project) = seed().await;
        assert_eq!(store.count_active_days().await.unwrap(), 0);

        let join = NewActivity {
            activity_type: ActivityType::Join,
            user_id: user.id,
            file_id: None,
            project_id: project.id,
        };
        let now = Utc::now();
        store.create_activity_at(&join, now).await.unwrap();
        store.create_activity_at(&join, now).await.unwrap();
        store
            .create_activity_at(&join, now - Duration::days(3))
            .await
            .unwrap();
        assert_eq!(store.count_active_days().await.unwrap(), 2);

        let recent = store
            .list_activities_since(now - Duration::days(1))
            .await
            .unwrap();
        assert_eq!(recent.len(), 2);
    }

    #[tokio::test]
    async fn test_author_counts_in_user_order() {
        let (store, ada, project) = seed().await;
        let bob = store.create_user(&NewUser::new("bob", "pw")).await.unwrap();
        let created = store
            .create_file(&new_file(&ada, &project, "a.txt", "Text"))
            .await
            .unwrap();
        store
            .create_comment(&NewComment {
                text: "nice".into(),
                file_id: created.file.id,
                user_id: bob.id,
            })
            .await
            .unwrap();

        let counts = store.author_counts().await.unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].user_id(), ada.id);
        assert_eq!((counts[0].files_count, counts[0].comments_count), (1, 0));
        assert_eq!(counts[1].user.name, "bob");
        assert_eq!((counts[1].files_count, counts[1].comments_count), (0, 1));
    }
}
