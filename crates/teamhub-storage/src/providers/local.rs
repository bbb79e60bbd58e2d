//! Local filesystem content store.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::result::AppResult;
use teamhub_core::traits::ContentStore;

use crate::key::object_key;

/// Stores each object as a file below a root directory.
#[derive(Debug, Clone)]
pub struct LocalContentStore {
    /// Root directory for all stored objects.
    root: PathBuf,
}

impl LocalContentStore {
    /// Create a store rooted at `root_path`, creating the directory if needed.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a location to a path inside the root. Locations that would
    /// escape the root are rejected.
    fn resolve(&self, location: &str) -> AppResult<PathBuf> {
        let relative = Path::new(location.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(AppError::invalid_input(format!(
                "Invalid content location: {location}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

fn read_error(location: &str, err: std::io::Error) -> AppError {
    if err.kind() == std::io::ErrorKind::NotFound {
        AppError::not_found(format!("Content not found: {location}"))
    } else {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to read content: {location}"),
            err,
        )
    }
}

#[async_trait]
impl ContentStore for LocalContentStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn store(&self, name_hint: &str, data: Bytes) -> AppResult<String> {
        let location = object_key(name_hint);
        let full_path = self.resolve(&location)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write content: {location}"),
                e,
            )
        })?;

        debug!(location = %location, bytes = data.len(), "Stored content");
        Ok(location)
    }

    async fn retrieve(&self, location: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(location)?;
        let data = fs::read(&full_path)
            .await
            .map_err(|e| read_error(location, e))?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, location: &str) -> AppResult<()> {
        let full_path = self.resolve(location)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(location, "Deleted content");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete content: {location}"),
                e,
            )),
        }
    }

    async fn exists(&self, location: &str) -> AppResult<bool> {
        let full_path = self.resolve(location)?;
        Ok(fs::try_exists(&full_path).await.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_retrieve() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalContentStore::new(dir.path().join("uploads"))
            .await
            .unwrap();
        assert!(store.health_check().await.unwrap());

        let location = store
            .store("uploads/notes.txt", Bytes::from_static(b"hello"))
            .await
            .unwrap();
        assert!(location.starts_with("uploads/"));
        assert!(store.exists(&location).await.unwrap());
        assert_eq!(
            store.retrieve(&location).await.unwrap(),
            Bytes::from_static(b"hello")
        );
        assert!(store.root().join(&location).is_file());
    }

    #[tokio::test]
    async fn test_same_hint_yields_distinct_locations() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalContentStore::new(dir.path()).await.unwrap();
        let a = store.store("a.txt", Bytes::from_static(b"1")).await.unwrap();
        let b = store.store("a.txt", Bytes::from_static(b"2")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.retrieve(&a).await.unwrap(), Bytes::from_static(b"1"));
    }

    #[tokio::test]
    async fn test_missing_content_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalContentStore::new(dir.path()).await.unwrap();
        let err = store.retrieve("uploads/nope.txt").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(!store.exists("uploads/nope.txt").await.unwrap());
        store.delete("uploads/nope.txt").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalContentStore::new(dir.path()).await.unwrap();
        let location = store.store("x.bin", Bytes::from_static(b"x")).await.unwrap();
        store.delete(&location).await.unwrap();
        assert!(!store.exists(&location).await.unwrap());
    }

    #[tokio::test]
    async fn test_escaping_locations_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalContentStore::new(dir.path()).await.unwrap();
        let err = store.retrieve("../secret").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }
}
