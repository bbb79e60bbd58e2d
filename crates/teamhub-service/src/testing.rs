//! Shared fixture for service tests: a hub over in-memory stores.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use teamhub_core::config::AppConfig;
use teamhub_database::{EntityStore, MemoryEntityStore};
use teamhub_entity::file::CreatedFile;
use teamhub_entity::project::Project;
use teamhub_entity::user::{NewUser, User};
use teamhub_storage::MemoryContentStore;

use crate::context::RequestContext;
use crate::file::FileUpload;
use crate::hub::TeamHub;

pub(crate) struct Fixture {
    pub store: Arc<MemoryEntityStore>,
    pub content: Arc<MemoryContentStore>,
    pub hub: TeamHub,
    pub default_project: Project,
}

impl Fixture {
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    pub async fn with_config(mut config: AppConfig) -> Self {
        config.storage.provider = "memory".to_string();
        let store = Arc::new(MemoryEntityStore::new());
        let content = Arc::new(MemoryContentStore::new());
        let hub = TeamHub::bootstrap(store.clone(), content.clone(), config)
            .await
            .expect("bootstrap");
        let default_project = hub.default_project().await.expect("default project");
        Self {
            store,
            content,
            hub,
            default_project,
        }
    }

    pub async fn register(&self, username: &str) -> User {
        self.hub
            .users
            .register(NewUser::new(username, "secret"))
            .await
            .expect("register")
    }

    pub async fn upload(&self, user: &User, name: &str, data: &'static [u8]) -> CreatedFile {
        self.hub
            .files
            .upload(
                &RequestContext::new(user.id),
                FileUpload::new(self.default_project.id, name, Bytes::from_static(data))
                    .with_mime_type(mime_for(name)),
            )
            .await
            .expect("upload")
    }

    pub async fn activity_count(&self) -> usize {
        self.store
            .list_activities_since(DateTime::<Utc>::MIN_UTC)
            .await
            .expect("activities")
            .len()
    }
}

/// The MIME type a browser would report for `name`.
pub(crate) fn mime_for(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("pdf") => "application/pdf",
        Some("json") => "application/json",
        Some("css") => "text/css",
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("txt" | "md") => "text/plain",
        _ => "application/octet-stream",
    }
}
