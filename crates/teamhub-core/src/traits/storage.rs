//! Content store trait for pluggable byte persistence backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the backends that persist uploaded file content.
///
/// The entity store keeps only the opaque location reference returned by
/// [`ContentStore::store`]; the bytes themselves are owned by the backend.
/// Implementations exist for the local filesystem and for memory.
#[async_trait]
pub trait ContentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "memory").
    fn provider_type(&self) -> &str;

    /// Check whether the backend is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Persist `data` and return a fresh location reference.
    ///
    /// `name_hint` (e.g. `"versions/report.pdf"`) only shapes the location;
    /// every call yields a distinct location.
    async fn store(&self, name_hint: &str, data: Bytes) -> AppResult<String>;

    /// Read back the bytes stored at `location`.
    async fn retrieve(&self, location: &str) -> AppResult<Bytes>;

    /// Delete the object at `location`.
    async fn delete(&self, location: &str) -> AppResult<()>;

    /// Check whether an object exists at `location`.
    async fn exists(&self, location: &str) -> AppResult<bool>;
}
