//! In-memory content store.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use teamhub_core::error::AppError;
use teamhub_core::result::AppResult;
use teamhub_core::traits::ContentStore;

use crate::key::object_key;

/// Keeps every object in a concurrent map. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    objects: DashMap<String, Bytes>,
}

impl MemoryContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn store(&self, name_hint: &str, data: Bytes) -> AppResult<String> {
        let location = object_key(name_hint);
        self.objects.insert(location.clone(), data);
        Ok(location)
    }

    async fn retrieve(&self, location: &str) -> AppResult<Bytes> {
        self.objects
            .get(location)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Content not found: {location}")))
    }

    async fn delete(&self, location: &str) -> AppResult<()> {
        self.objects.remove(location);
        Ok(())
    }

    async fn exists(&self, location: &str) -> AppResult<bool> {
        Ok(self.objects.contains_key(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_and_delete() {
        let store = MemoryContentStore::new();
        let location = store
            .store("versions/3/a.txt", Bytes::from_static(b"abc"))
            .await
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.retrieve(&location).await.unwrap(),
            Bytes::from_static(b"abc")
        );

        store.delete(&location).await.unwrap();
        assert!(store.is_empty());
        assert!(store.retrieve(&location).await.unwrap_err().is_not_found());
    }
}
