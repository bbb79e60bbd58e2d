//! Statistics service: read-only reports over the entity store.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::debug;
use validator::Validate;

use teamhub_core::config::{ActivityWindow, StatsConfig};
use teamhub_core::result::AppResult;
use teamhub_database::EntityStore;

use super::aggregate;
use super::model::{Contribution, DailyActivity, DashboardStats};

/// Computes dashboard statistics. Never writes.
#[derive(Clone)]
pub struct StatsService {
    store: Arc<dyn EntityStore>,
    config: StatsConfig,
}

impl std::fmt::Debug for StatsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsService")
            .field("window_days", &self.config.window_days)
            .finish()
    }
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(store: Arc<dyn EntityStore>, config: StatsConfig) -> Self {
        Self { store, config }
    }

    /// Headline counts and histograms.
    pub async fn get_stats(&self) -> AppResult<DashboardStats> {
        let uploads = self.store.count_files().await?;
        let comments = self.store.count_comments().await?;
        let members = self.store.count_members().await?;
        let days_active = self.store.count_active_days().await?.max(1);
        let file_types = aggregate::sort_file_types(self.store.file_type_counts().await?);
        let activity_by_category =
            aggregate::activity_by_category(&self.store.activity_type_counts().await?);

        debug!(uploads, comments, members, days_active, "Computed dashboard stats");
        Ok(DashboardStats {
            uploads,
            comments,
            members,
            days_active,
            file_types,
            activity_by_category,
        })
    }

    /// Every user's weighted contribution share, largest first.
    pub async fn get_contributions(&self) -> AppResult<Vec<Contribution>> {
        let authors = self.store.author_counts().await?;
        Ok(aggregate::contributions(authors))
    }

    /// Per-day file and comment activity over a trailing window ending today
    /// (UTC). `None` uses the configured window.
    pub async fn activity_by_day(
        &self,
        window: Option<ActivityWindow>,
    ) -> AppResult<Vec<DailyActivity>> {
        self.activity_by_day_ending(Utc::now().date_naive(), window)
            .await
    }

    /// Like [`activity_by_day`](Self::activity_by_day), with the last day of
    /// the window given explicitly.
    pub async fn activity_by_day_ending(
        &self,
        today: NaiveDate,
        window: Option<ActivityWindow>,
    ) -> AppResult<Vec<DailyActivity>> {
        let window = window.unwrap_or_else(|| self.config.default_window());
        window.validate()?;

        let since = aggregate::window_start(today, window.window_days);
        let activities = self.store.list_activities_since(since).await?;
        Ok(aggregate::bucket_activity_by_day(
            &activities,
            today,
            window.window_days,
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use teamhub_core::error::ErrorKind;
    use teamhub_entity::activity::{ActivityType, NewActivity};

    use super::*;
    use crate::context::RequestContext;
    use crate::testing::Fixture;

    #[tokio::test]
    async fn test_empty_store_reports_one_active_day() {
        let fx = Fixture::new().await;
        let stats = fx.hub.stats.get_stats().await.unwrap();
        assert_eq!(stats.uploads, 0);
        assert_eq!(stats.members, 0);
        assert_eq!(stats.days_active, 1);
        assert!(stats.file_types.is_empty());
        assert_eq!(stats.activity_by_category.len(), 3);
        assert!(stats.activity_by_category.iter().all(|c| c.value == 0));
    }

    #[tokio::test]
    async fn test_stats_reflect_activity() {
        let fx = Fixture::new().await;
        let ada = fx.register("ada").await;
        let bob = fx.register("bob").await;
        let img = fx.upload(&ada, "a.png", b"1").await;
        fx.upload(&ada, "b.png", b"2").await;
        fx.upload(&bob, "c.css", b"3").await;
        fx.hub
            .versions
            .create_file_version(
                &RequestContext::new(bob.id),
                img.file.id,
                bytes::Bytes::from_static(b"4"),
                "",
                None,
            )
            .await
            .unwrap();
        fx.hub
            .comments
            .post_comment(&RequestContext::new(bob.id), img.file.id, "nice")
            .await
            .unwrap();

        let stats = fx.hub.stats.get_stats().await.unwrap();
        assert_eq!(stats.uploads, 3);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.members, 2);
        assert_eq!(stats.days_active, 1);
        assert_eq!(stats.file_types[0].name, "Image");
        assert_eq!(stats.file_types[0].value, 2);
        let categories: Vec<(&str, i64)> = stats
            .activity_by_category
            .iter()
            .map(|c| (c.name.as_str(), c.value))
            .collect();
        assert_eq!(
            categories,
            vec![("Uploads", 3), ("Updates", 1), ("Comments", 1)]
        );
    }

    #[tokio::test]
    async fn test_days_active_counts_distinct_dates() {
        let fx = Fixture::new().await;
        let ada = fx.register("ada").await;
        let join = NewActivity {
            activity_type: ActivityType::Join,
            user_id: ada.id,
            file_id: None,
            project_id: fx.default_project.id,
        };
        for days_ago in [3, 3, 10] {
            fx.store
                .create_activity_at(&join, Utc::now() - Duration::days(days_ago))
                .await
                .unwrap();
        }
        // Registration's own join happened today.
        assert_eq!(fx.hub.stats.get_stats().await.unwrap().days_active, 3);
    }

    #[tokio::test]
    async fn test_activity_by_day_window() {
        let fx = Fixture::new().await;
        let ada = fx.register("ada").await;
        let created = fx.upload(&ada, "a.txt", b"x").await;
        let today = Utc::now().date_naive();

        let comment = NewActivity {
            activity_type: ActivityType::Comment,
            user_id: ada.id,
            file_id: Some(created.file.id),
            project_id: fx.default_project.id,
        };
        fx.store
            .create_activity_at(&comment, Utc::now() - Duration::days(2))
            .await
            .unwrap();
        fx.store
            .create_activity_at(&comment, Utc::now() - Duration::days(40))
            .await
            .unwrap();

        let days = fx.hub.stats.activity_by_day(None).await.unwrap();
        assert_eq!(days.len(), 30);
        assert_eq!(days[29].date, today);
        assert_eq!(days[29].files, 1);
        assert_eq!(days[27].comments, 1);
        assert_eq!(days.iter().map(|d| d.comments).sum::<i64>(), 1);
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));

        let short = fx
            .hub
            .stats
            .activity_by_day(Some(ActivityWindow::days(14)))
            .await
            .unwrap();
        assert_eq!(short.len(), 14);
    }

    #[tokio::test]
    async fn test_zero_window_is_invalid() {
        let fx = Fixture::new().await;
        let err = fx
            .hub
            .stats
            .activity_by_day(Some(ActivityWindow::days(0)))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_contributions_sum_to_about_100() {
        let fx = Fixture::new().await;
        let users = [
            fx.register("ada").await,
            fx.register("bob").await,
            fx.register("cy").await,
        ];
        let first = fx.upload(&users[0], "a.txt", b"x").await;
        fx.upload(&users[1], "b.txt", b"x").await;
        for user in &users {
            fx.hub
                .comments
                .post_comment(&RequestContext::new(user.id), first.file.id, "+1")
                .await
                .unwrap();
        }

        let contributions = fx.hub.stats.get_contributions().await.unwrap();
        assert_eq!(contributions.len(), 3);
        let total: i64 = contributions.iter().map(|c| c.percentage).sum();
        assert!((99..=101).contains(&total));
        assert!(
            contributions
                .windows(2)
                .all(|w| w[0].percentage >= w[1].percentage)
        );
    }
}
