//! Wiring of the TeamHub services around one entity store and one content
//! store.

use std::sync::Arc;

use tracing::info;

use teamhub_core::config::AppConfig;
use teamhub_core::result::AppResult;
use teamhub_core::traits::ContentStore;
use teamhub_database::EntityStore;
use teamhub_entity::project::Project;

use crate::activity::{ActivityRecorder, ActivityService};
use crate::comment::CommentService;
use crate::events::EventBus;
use crate::file::{FileService, VersionService};
use crate::project::ProjectService;
use crate::stats::StatsService;
use crate::team::TeamService;
use crate::user::UserService;

/// Every TeamHub service, sharing one store, one content store, and one
/// event bus with the activity recorder subscribed.
#[derive(Clone)]
pub struct TeamHub {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Entity store
    pub store: Arc<dyn EntityStore>,
    /// Blob storage for file and version content
    pub content: Arc<dyn ContentStore>,
    /// Post-commit domain event bus
    pub bus: Arc<EventBus>,
    /// Activity recorder (subscribed to `bus`)
    pub recorder: Arc<ActivityRecorder>,

    // ── Services ─────────────────────────────────────────────
    /// User registration and lookup
    pub users: Arc<UserService>,
    /// Projects and membership
    pub projects: Arc<ProjectService>,
    /// File uploads and downloads
    pub files: Arc<FileService>,
    /// Version tracker
    pub versions: Arc<VersionService>,
    /// Comments
    pub comments: Arc<CommentService>,
    /// Activity feed
    pub activities: Arc<ActivityService>,
    /// Aggregation engine
    pub stats: Arc<StatsService>,
    /// Team listing
    pub team: Arc<TeamService>,
}

impl std::fmt::Debug for TeamHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamHub")
            .field("content", &self.content)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}

impl TeamHub {
    /// Builds every service, subscribes the activity recorder, and makes
    /// sure the default project exists.
    pub async fn bootstrap(
        store: Arc<dyn EntityStore>,
        content: Arc<dyn ContentStore>,
        config: AppConfig,
    ) -> AppResult<Self> {
        let hub = Self::build(store, content, config).await;
        let project = hub.default_project().await?;
        info!(
            project_id = %project.id,
            storage = hub.content.provider_type(),
            "TeamHub ready"
        );
        Ok(hub)
    }

    async fn build(
        store: Arc<dyn EntityStore>,
        content: Arc<dyn ContentStore>,
        config: AppConfig,
    ) -> Self {
        let bus = Arc::new(EventBus::new());
        let recorder = Arc::new(ActivityRecorder::new(Arc::clone(&store)));
        bus.subscribe(recorder.clone()).await;

        let projects = ProjectService::new(
            Arc::clone(&store),
            Arc::clone(&bus),
            config.projects.clone(),
        );
        let users = UserService::new(
            Arc::clone(&store),
            projects.clone(),
            config.accounts.clone(),
        );
        let files = FileService::new(
            Arc::clone(&store),
            Arc::clone(&content),
            Arc::clone(&bus),
            config.storage.clone(),
            config.stats.recent_files_limit,
        );
        let versions = VersionService::new(
            Arc::clone(&store),
            Arc::clone(&content),
            Arc::clone(&bus),
            config.storage.clone(),
        );
        let comments = CommentService::new(Arc::clone(&store), Arc::clone(&bus));
        let activities = ActivityService::new(Arc::clone(&store), config.stats.activity_feed_limit);
        let stats = StatsService::new(Arc::clone(&store), config.stats.clone());
        let team = TeamService::new(Arc::clone(&store), config.accounts.clone());

        Self {
            config: Arc::new(config),
            store,
            content,
            bus,
            recorder,
            users: Arc::new(users),
            projects: Arc::new(projects),
            files: Arc::new(files),
            versions: Arc::new(versions),
            comments: Arc::new(comments),
            activities: Arc::new(activities),
            stats: Arc::new(stats),
            team: Arc::new(team),
        }
    }

    /// The project every registered user joins.
    pub async fn default_project(&self) -> AppResult<Project> {
        self.projects.ensure_default_project().await
    }
}

#[cfg(test)]
mod tests {
    use teamhub_database::MemoryEntityStore;
    use teamhub_storage::MemoryContentStore;

    use super::*;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let store: Arc<dyn EntityStore> = Arc::new(MemoryEntityStore::new());
        let content: Arc<dyn ContentStore> = Arc::new(MemoryContentStore::new());

        let first = TeamHub::bootstrap(store.clone(), content.clone(), AppConfig::default())
            .await
            .unwrap();
        let second = TeamHub::bootstrap(store.clone(), content, AppConfig::default())
            .await
            .unwrap();

        assert_eq!(first.bus.observer_count().await, 1);
        let projects = store.list_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Team Project");
        assert_eq!(
            second.default_project().await.unwrap().id,
            projects[0].id
        );
    }
}
