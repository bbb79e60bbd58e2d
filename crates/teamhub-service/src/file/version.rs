//! File versioning service: record, list, and download versions.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use teamhub_core::config::StorageConfig;
use teamhub_core::error::AppError;
use teamhub_core::events::CollaborationEvent;
use teamhub_core::result::AppResult;
use teamhub_core::traits::ContentStore;
use teamhub_core::types::id::FileId;
use teamhub_database::EntityStore;
use teamhub_entity::file::{ACTION_UPDATED, File, FileVersion, FileVersionWithAuthor, NewFileVersion};

use super::service::{FileDownload, check_size, discard_content};
use crate::context::RequestContext;
use crate::events::EventBus;

/// Manages file version history.
#[derive(Clone)]
pub struct VersionService {
    store: Arc<dyn EntityStore>,
    content: Arc<dyn ContentStore>,
    bus: Arc<EventBus>,
    config: StorageConfig,
}

impl std::fmt::Debug for VersionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionService").finish()
    }
}

impl VersionService {
    /// Creates a new version service.
    pub fn new(
        store: Arc<dyn EntityStore>,
        content: Arc<dyn ContentStore>,
        bus: Arc<EventBus>,
        config: StorageConfig,
    ) -> Self {
        Self {
            store,
            content,
            bus,
            config,
        }
    }

    async fn require_file(&self, file_id: FileId) -> AppResult<File> {
        self.store
            .find_file(file_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))
    }

    /// Records new content for an existing file.
    ///
    /// The version number is one above the highest existing version. The
    /// file's `updated_at` moves forward; its name, size, and location stay
    /// as uploaded. An empty `action` defaults to `"updated"`.
    pub async fn create_file_version(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
        data: Bytes,
        action: &str,
        notes: Option<String>,
    ) -> AppResult<FileVersion> {
        let file = self.require_file(file_id).await?;
        check_size(&data, &self.config)?;

        let size_bytes = data.len() as i64;
        let location = self
            .content
            .store(&format!("versions/{file_id}/{}", file.name), data)
            .await?;

        let action = match action.trim() {
            "" => ACTION_UPDATED.to_string(),
            other => other.to_string(),
        };
        let new_version = NewFileVersion {
            file_id,
            location: location.clone(),
            size_bytes,
            user_id: ctx.user_id,
            action,
            notes: notes.filter(|n| !n.trim().is_empty()),
        };

        let version = match self.store.create_file_version(&new_version).await {
            Ok(version) => version,
            Err(e) => {
                discard_content(self.content.as_ref(), &location).await;
                return Err(e);
            }
        };

        info!(
            user_id = %ctx.user_id,
            file_id = %file_id,
            version = version.version,
            "File version created"
        );

        self.bus
            .emit(
                ctx.user_id,
                CollaborationEvent::VersionCreated {
                    file_id,
                    project_id: file.project_id,
                    version_number: version.version,
                },
            )
            .await?;

        Ok(version)
    }

    /// Lists a file's versions, current version first.
    pub async fn list_versions(&self, file_id: FileId) -> AppResult<Vec<FileVersionWithAuthor>> {
        self.require_file(file_id).await?;
        self.store.list_file_versions(file_id).await
    }

    /// Reads back the content of one version.
    pub async fn download_version(&self, file_id: FileId, version: i32) -> AppResult<FileDownload> {
        let file = self.require_file(file_id).await?;
        let found = self
            .store
            .find_file_version(file_id, version)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Version {version} of file {file_id} not found"))
            })?;
        let data = self.content.retrieve(&found.location).await?;
        Ok(FileDownload::for_file(&file, data))
    }
}

#[cfg(test)]
mod tests {
    use teamhub_core::error::ErrorKind;
    use teamhub_entity::activity::ActivityType;

    use super::*;
    use crate::testing::Fixture;

    #[tokio::test]
    async fn test_versions_increment_and_emit_updates() {
        let fx = Fixture::new().await;
        let ada = fx.register("ada").await;
        let ctx = RequestContext::new(ada.id);
        let created = fx.upload(&ada, "plan.md", b"v1").await;
        let before = fx.activity_count().await;

        let v2 = fx
            .hub
            .versions
            .create_file_version(&ctx, created.file.id, Bytes::from_static(b"v2!"), "", None)
            .await
            .unwrap();
        let v3 = fx
            .hub
            .versions
            .create_file_version(
                &ctx,
                created.file.id,
                Bytes::from_static(b"v3"),
                "edited",
                Some("typo fixes".into()),
            )
            .await
            .unwrap();

        assert_eq!(v2.version, 2);
        assert_eq!(v2.action, "updated");
        assert_eq!(v2.size_bytes, 3);
        assert_eq!(v3.version, 3);
        assert_eq!(v3.notes.as_deref(), Some("typo fixes"));

        assert_eq!(fx.activity_count().await, before + 2);
        let feed = fx.hub.activities.recent_activities(Some(2)).await.unwrap();
        assert!(
            feed.iter()
                .all(|a| a.activity.activity_type == ActivityType::Update)
        );

        let file = fx.hub.files.get_file(created.file.id).await.unwrap().file;
        assert_eq!(file.size_bytes, 2);
        assert_eq!(file.location, created.file.location);
        assert!(file.updated_at >= created.file.updated_at);
    }

    #[tokio::test]
    async fn test_list_and_download_versions() {
        let fx = Fixture::new().await;
        let ada = fx.register("ada").await;
        let ctx = RequestContext::new(ada.id);
        let created = fx.upload(&ada, "notes.txt", b"one").await;
        fx.hub
            .versions
            .create_file_version(&ctx, created.file.id, Bytes::from_static(b"two"), "", None)
            .await
            .unwrap();

        let listed = fx.hub.versions.list_versions(created.file.id).await.unwrap();
        let numbers: Vec<i32> = listed.iter().map(|v| v.version.version).collect();
        assert_eq!(numbers, vec![2, 1]);
        assert_eq!(listed[0].user.name, "ada");

        let first = fx
            .hub
            .versions
            .download_version(created.file.id, 1)
            .await
            .unwrap();
        assert_eq!(first.data, Bytes::from_static(b"one"));
        let second = fx
            .hub
            .versions
            .download_version(created.file.id, 2)
            .await
            .unwrap();
        assert_eq!(second.data, Bytes::from_static(b"two"));
        assert_eq!(second.file_name, "notes.txt");

        let err = fx
            .hub
            .versions
            .download_version(created.file.id, 3)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let fx = Fixture::new().await;
        let ada = fx.register("ada").await;
        let err = fx
            .hub
            .versions
            .create_file_version(
                &RequestContext::new(ada.id),
                FileId(9999),
                Bytes::from_static(b"x"),
                "",
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(fx.content.is_empty());

        let err = fx.hub.versions.list_versions(FileId(9999)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
