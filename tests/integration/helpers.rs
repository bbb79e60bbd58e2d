//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use bytes::Bytes;

use teamhub::core::config::AppConfig;
use teamhub::core::traits::ContentStore;
use teamhub::database::{EntityStore, MemoryEntityStore};
use teamhub::entity::activity::{Activity, ActivityType};
use teamhub::entity::file::CreatedFile;
use teamhub::entity::project::Project;
use teamhub::entity::user::{NewUser, User};
use teamhub::service::{FileUpload, RequestContext};
use teamhub::storage::MemoryContentStore;
use teamhub::TeamHub;

/// Test application context
pub struct TestApp {
    /// Wired services
    pub hub: TeamHub,
    /// The store behind `hub`, for seeding and direct reads
    pub store: Arc<MemoryEntityStore>,
    /// The default project
    pub project: Project,
}

impl TestApp {
    /// Create a hub over in-memory stores with default configuration.
    pub async fn new() -> Self {
        let content: Arc<dyn ContentStore> = Arc::new(MemoryContentStore::new());
        Self::with_content(content, AppConfig::default()).await
    }

    /// Create a hub over the given content store and configuration.
    pub async fn with_content(content: Arc<dyn ContentStore>, config: AppConfig) -> Self {
        let store = Arc::new(MemoryEntityStore::new());
        let hub = TeamHub::bootstrap(store.clone(), content, config)
            .await
            .expect("Failed to bootstrap hub");
        let project = hub
            .default_project()
            .await
            .expect("Failed to load default project");
        Self {
            hub,
            store,
            project,
        }
    }

    /// Register a user with a throwaway password.
    pub async fn register(&self, username: &str) -> User {
        self.hub
            .users
            .register(NewUser::new(username, "password123"))
            .await
            .expect("Failed to register user")
    }

    /// Upload `data` as `name` into the default project.
    pub async fn upload(&self, user: &User, name: &str, data: &'static [u8]) -> CreatedFile {
        self.hub
            .files
            .upload(
                &RequestContext::new(user.id),
                FileUpload::new(self.project.id, name, Bytes::from_static(data))
                    .with_mime_type(mime_for(name)),
            )
            .await
            .expect("Failed to upload file")
    }

    /// Every recorded activity, oldest first.
    pub async fn activities(&self) -> Vec<Activity> {
        self.store
            .list_activities_since(chrono::DateTime::<chrono::Utc>::MIN_UTC)
            .await
            .expect("Failed to list activities")
    }

    /// Number of recorded activities of `kind`.
    pub async fn count_of(&self, kind: ActivityType) -> usize {
        self.activities()
            .await
            .iter()
            .filter(|a| a.activity_type == kind)
            .count()
    }
}

/// The MIME type a browser would report for `name`.
pub fn mime_for(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()).as_deref() {
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        Some("txt" | "md") => "text/plain",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}
