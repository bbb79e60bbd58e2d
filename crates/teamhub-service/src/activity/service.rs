//! Dashboard activity feed.

use std::sync::Arc;

use teamhub_core::result::AppResult;
use teamhub_core::types::RecentLimit;
use teamhub_database::EntityStore;
use teamhub_entity::activity::ActivityDetail;

/// Reads the activity feed, newest first.
#[derive(Clone)]
pub struct ActivityService {
    store: Arc<dyn EntityStore>,
    default_limit: u32,
}

impl std::fmt::Debug for ActivityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityService")
            .field("default_limit", &self.default_limit)
            .finish()
    }
}

impl ActivityService {
    /// Creates a feed service returning `default_limit` entries unless
    /// told otherwise.
    pub fn new(store: Arc<dyn EntityStore>, default_limit: u32) -> Self {
        Self {
            store,
            default_limit,
        }
    }

    /// The most recent activities with actor identity and file name.
    pub async fn recent_activities(&self, limit: Option<u32>) -> AppResult<Vec<ActivityDetail>> {
        let limit = RecentLimit::new(limit.unwrap_or(self.default_limit));
        self.store.list_activities(limit).await
    }
}
