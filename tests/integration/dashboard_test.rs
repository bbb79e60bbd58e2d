//! Integration tests for the dashboard statistics.

mod helpers;

use teamhub::core::config::{ActivityWindow, AppConfig};
use teamhub::service::RequestContext;

#[tokio::test]
async fn test_two_uploads_three_comments() {
    let app = helpers::TestApp::new().await;
    let a = app.register("alice").await;
    let b = app.register("bob").await;

    let first = app.upload(&a, "design.png", b"png").await;
    app.upload(&a, "notes.txt", b"txt").await;
    for text in ["Looks good", "Nit: colours", "Approved"] {
        app.hub
            .comments
            .post_comment(&RequestContext::new(b.id), first.file.id, text)
            .await
            .expect("comment");
    }

    let stats = app.hub.stats.get_stats().await.expect("stats");
    assert_eq!(stats.uploads, 2);
    assert_eq!(stats.comments, 3);
    assert_eq!(stats.members, 2);
    let names: Vec<&str> = stats.file_types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Image", "Text"]);

    let contributions = app.hub.stats.get_contributions().await.expect("contributions");
    assert_eq!(contributions.len(), 2);
    assert_eq!(contributions[0].user.id, a.id);
    assert_eq!(contributions[0].score, 6);
    assert_eq!(contributions[0].percentage, 67);
    assert_eq!(contributions[1].user.id, b.id);
    assert_eq!(contributions[1].score, 3);
    assert_eq!(contributions[1].percentage, 33);
}

#[tokio::test]
async fn test_contributions_are_zero_without_content() {
    let app = helpers::TestApp::new().await;
    app.register("alice").await;
    app.register("bob").await;

    let contributions = app.hub.stats.get_contributions().await.expect("contributions");
    assert_eq!(contributions.len(), 2);
    assert!(contributions.iter().all(|c| c.percentage == 0));
}

#[tokio::test]
async fn test_days_active_is_at_least_one() {
    let app = helpers::TestApp::new().await;
    let stats = app.hub.stats.get_stats().await.expect("stats");
    assert_eq!(stats.days_active, 1);
}

#[tokio::test]
async fn test_activity_by_day_has_one_bucket_per_day() {
    let app = helpers::TestApp::new().await;
    let a = app.register("alice").await;
    app.upload(&a, "a.txt", b"a").await;

    for days in [1, 14, 30, 366] {
        let buckets = app
            .hub
            .stats
            .activity_by_day(Some(ActivityWindow::days(days)))
            .await
            .expect("buckets");
        assert_eq!(buckets.len(), days as usize);
        assert!(
            buckets
                .windows(2)
                .all(|w| w[0].date.succ_opt() == Some(w[1].date))
        );
        assert_eq!(buckets.last().map(|d| d.files), Some(1));
    }
}

#[tokio::test]
async fn test_configured_window_is_the_default() {
    let mut config = AppConfig::default();
    config.stats.window_days = 14;
    let content = std::sync::Arc::new(teamhub::storage::MemoryContentStore::new());
    let app = helpers::TestApp::with_content(content, config).await;

    let buckets = app.hub.stats.activity_by_day(None).await.expect("buckets");
    assert_eq!(buckets.len(), 14);
}

#[tokio::test]
async fn test_feed_lists_newest_first() {
    let app = helpers::TestApp::new().await;
    let a = app.register("alice").await;
    let created = app.upload(&a, "report.pdf", b"%PDF").await;

    let feed = app.hub.activities.recent_activities(None).await.expect("feed");
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].file_name.as_deref(), Some("report.pdf"));
    assert_eq!(feed[0].activity.file_id, Some(created.file.id));
    assert_eq!(feed[0].user.name, "alice");
    assert_eq!(feed[1].file_name, None);
}
