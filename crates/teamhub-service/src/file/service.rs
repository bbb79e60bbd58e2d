//! File service: upload, lookup, listing, and download.

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use teamhub_core::config::StorageConfig;
use teamhub_core::error::AppError;
use teamhub_core::events::CollaborationEvent;
use teamhub_core::result::AppResult;
use teamhub_core::traits::ContentStore;
use teamhub_core::types::RecentLimit;
use teamhub_core::types::id::{FileId, ProjectId};
use teamhub_database::EntityStore;
use teamhub_entity::file::{CreatedFile, File, FileWithUploader, NewFile};

use super::classify::{classify_file_type, content_type_for};
use crate::context::RequestContext;
use crate::events::EventBus;

/// An upload handed over by the request boundary.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Target project.
    pub project_id: ProjectId,
    /// File name, including extension.
    pub name: String,
    /// MIME type reported by the client.
    pub mime_type: Option<String>,
    /// Declared type; derived from `mime_type` and `name` when absent.
    pub file_type: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// File content.
    pub data: Bytes,
}

impl FileUpload {
    /// An upload of `data` named `name` into `project_id`.
    pub fn new(project_id: ProjectId, name: impl Into<String>, data: Bytes) -> Self {
        Self {
            project_id,
            name: name.into(),
            mime_type: None,
            file_type: None,
            description: None,
            data,
        }
    }

    /// Sets the client-reported MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Sets the declared type explicitly.
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn declared_type(&self) -> String {
        match self.file_type.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => classify_file_type(self.mime_type.as_deref(), &self.name),
        }
    }
}

/// Content ready to be served to a client.
#[derive(Debug, Clone, Serialize)]
pub struct FileDownload {
    /// Name to present to the client.
    pub file_name: String,
    /// Content type derived from the declared file type.
    pub content_type: &'static str,
    /// The bytes.
    #[serde(skip)]
    pub data: Bytes,
}

impl FileDownload {
    pub(crate) fn for_file(file: &File, data: Bytes) -> Self {
        Self {
            file_name: file.name.clone(),
            content_type: content_type_for(&file.file_type),
            data,
        }
    }
}

/// Uploads files and serves them back.
#[derive(Clone)]
pub struct FileService {
    store: Arc<dyn EntityStore>,
    content: Arc<dyn ContentStore>,
    bus: Arc<EventBus>,
    config: StorageConfig,
    recent_limit: u32,
}

impl std::fmt::Debug for FileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileService")
            .field("content", &self.content.provider_type())
            .finish()
    }
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        store: Arc<dyn EntityStore>,
        content: Arc<dyn ContentStore>,
        bus: Arc<EventBus>,
        config: StorageConfig,
        recent_limit: u32,
    ) -> Self {
        Self {
            store,
            content,
            bus,
            config,
            recent_limit,
        }
    }

    /// Uploads a new file.
    ///
    /// Stores the bytes, records the file together with version 1, then
    /// publishes `FileUploaded` followed by `VersionCreated { 1 }`.
    pub async fn upload(&self, ctx: &RequestContext, upload: FileUpload) -> AppResult<CreatedFile> {
        let name = upload.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("File name is required"));
        }
        check_size(&upload.data, &self.config)?;

        if self.store.find_project(upload.project_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Project {} not found",
                upload.project_id
            )));
        }

        let file_type = upload.declared_type();
        let size_bytes = upload.data.len() as i64;
        let location = self
            .content
            .store(&format!("uploads/{name}"), upload.data)
            .await?;

        let new_file = NewFile {
            name: name.to_string(),
            file_type,
            size_bytes,
            location: location.clone(),
            description: upload.description.filter(|d| !d.trim().is_empty()),
            user_id: ctx.user_id,
            project_id: upload.project_id,
        };

        let created = match self.store.create_file(&new_file).await {
            Ok(created) => created,
            Err(e) => {
                discard_content(self.content.as_ref(), &location).await;
                return Err(e);
            }
        };

        info!(
            user_id = %ctx.user_id,
            file_id = %created.file.id,
            name = %created.file.name,
            file_type = %created.file.file_type,
            size = size_bytes,
            "File uploaded"
        );

        let file = &created.file;
        self.bus
            .emit(
                ctx.user_id,
                CollaborationEvent::FileUploaded {
                    file_id: file.id,
                    project_id: file.project_id,
                },
            )
            .await?;
        self.bus
            .emit(
                ctx.user_id,
                CollaborationEvent::VersionCreated {
                    file_id: file.id,
                    project_id: file.project_id,
                    version_number: created.initial_version.version,
                },
            )
            .await?;

        Ok(created)
    }

    /// Gets a file with its uploader.
    pub async fn get_file(&self, file_id: FileId) -> AppResult<FileWithUploader> {
        self.store
            .find_file_with_uploader(file_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))
    }

    /// Lists every file, newest first.
    pub async fn list_files(&self) -> AppResult<Vec<FileWithUploader>> {
        self.store.list_files(None).await
    }

    /// The most recently uploaded files (4 unless configured otherwise).
    pub async fn recent_files(&self, limit: Option<u32>) -> AppResult<Vec<FileWithUploader>> {
        let limit = RecentLimit::new(limit.unwrap_or(self.recent_limit));
        self.store.list_files(Some(limit)).await
    }

    /// Reads back a file's originally uploaded content.
    pub async fn download(&self, file_id: FileId) -> AppResult<FileDownload> {
        let file = self
            .store
            .find_file(file_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))?;
        let data = self.content.retrieve(&file.location).await?;
        Ok(FileDownload::for_file(&file, data))
    }
}

/// Rejects content above the configured upload limit.
pub(crate) fn check_size(data: &Bytes, config: &StorageConfig) -> AppResult<()> {
    if data.len() as u64 > config.max_upload_size_bytes {
        return Err(AppError::invalid_input(format!(
            "File exceeds maximum upload size of {} bytes",
            config.max_upload_size_bytes
        )));
    }
    Ok(())
}

/// Best-effort removal of content whose database record was not written.
pub(crate) async fn discard_content(content: &dyn ContentStore, location: &str) {
    if let Err(e) = content.delete(location).await {
        warn!(location, error = %e, "Failed to discard orphaned content");
    }
}
