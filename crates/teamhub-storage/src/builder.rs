//! Content store selection from configuration.

use std::sync::Arc;

use tracing::info;

use teamhub_core::config::StorageConfig;
use teamhub_core::error::AppError;
use teamhub_core::result::AppResult;
use teamhub_core::traits::ContentStore;

use crate::providers::{LocalContentStore, MemoryContentStore};

/// Build the content store named by `config.provider`.
pub async fn build_content_store(config: &StorageConfig) -> AppResult<Arc<dyn ContentStore>> {
    let store: Arc<dyn ContentStore> = match config.provider.as_str() {
        "local" => Arc::new(LocalContentStore::new(&config.local.root_path).await?),
        "memory" => Arc::new(MemoryContentStore::new()),
        other => {
            return Err(AppError::configuration(format!(
                "Unknown storage provider '{other}', expected 'local' or 'memory'"
            )));
        }
    };
    info!(provider = store.provider_type(), "Content store ready");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamhub_core::config::LocalStorageConfig;
    use teamhub_core::error::ErrorKind;

    #[tokio::test]
    async fn test_builds_configured_provider() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            provider: "local".into(),
            local: LocalStorageConfig {
                root_path: dir.path().to_string_lossy().into_owned(),
            },
            ..StorageConfig::default()
        };
        let store = build_content_store(&config).await.unwrap();
        assert_eq!(store.provider_type(), "local");

        let config = StorageConfig {
            provider: "memory".into(),
            ..StorageConfig::default()
        };
        assert_eq!(
            build_content_store(&config).await.unwrap().provider_type(),
            "memory"
        );
    }

    #[tokio::test]
    async fn test_unknown_provider_is_a_configuration_error() {
        let config = StorageConfig {
            provider: "s3".into(),
            ..StorageConfig::default()
        };
        let err = build_content_store(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
