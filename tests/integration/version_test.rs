//! Integration tests for the version tracker.

mod helpers;

use std::sync::Arc;

use bytes::Bytes;

use teamhub::core::config::AppConfig;
use teamhub::core::traits::ContentStore;
use teamhub::entity::activity::ActivityType;
use teamhub::service::RequestContext;
use teamhub::storage::LocalContentStore;

#[tokio::test]
async fn test_versions_are_listed_newest_first() {
    let app = helpers::TestApp::new().await;
    let a = app.register("alice").await;
    let created = app.upload(&a, "plan.docx", b"v1").await;
    assert_eq!(created.initial_version.version, 1);

    let ctx = RequestContext::new(a.id);
    for data in [b"v2", b"v3"] {
        app.hub
            .versions
            .create_file_version(&ctx, created.file.id, Bytes::from_static(data), "", None)
            .await
            .expect("version");
    }

    let versions = app
        .hub
        .versions
        .list_versions(created.file.id)
        .await
        .expect("versions");
    let numbers: Vec<i32> = versions.iter().map(|v| v.version.version).collect();
    assert_eq!(numbers, vec![3, 2, 1]);
    assert_eq!(versions[2].version.action, "uploaded");
    assert_eq!(versions[0].version.action, "updated");
}

#[tokio::test]
async fn test_only_later_versions_record_updates() {
    let app = helpers::TestApp::new().await;
    let a = app.register("alice").await;
    let created = app.upload(&a, "plan.docx", b"v1").await;
    assert_eq!(app.count_of(ActivityType::Upload).await, 1);
    assert_eq!(app.count_of(ActivityType::Update).await, 0);

    let ctx = RequestContext::new(a.id);
    for n in 2..=4 {
        let version = app
            .hub
            .versions
            .create_file_version(&ctx, created.file.id, Bytes::from_static(b"x"), "edited", None)
            .await
            .expect("version");
        assert_eq!(version.version, n);
        assert_eq!(app.count_of(ActivityType::Update).await, (n - 1) as usize);
    }
}

#[tokio::test]
async fn test_concurrent_versions_get_distinct_numbers() {
    let app = Arc::new(helpers::TestApp::new().await);
    let a = app.register("alice").await;
    let created = app.upload(&a, "shared.txt", b"v1").await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let app = Arc::clone(&app);
        let file_id = created.file.id;
        let user_id = a.id;
        handles.push(tokio::spawn(async move {
            app.hub
                .versions
                .create_file_version(
                    &RequestContext::new(user_id),
                    file_id,
                    Bytes::from_static(b"x"),
                    "",
                    None,
                )
                .await
                .map(|v| v.version)
        }));
    }

    let mut numbers = Vec::new();
    for handle in handles {
        numbers.push(handle.await.expect("join").expect("version"));
    }
    numbers.sort_unstable();
    assert_eq!(numbers, (2..=9).collect::<Vec<i32>>());
}

#[tokio::test]
async fn test_version_bytes_round_trip_through_local_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let content: Arc<dyn ContentStore> = Arc::new(
        LocalContentStore::new(dir.path())
            .await
            .expect("local store"),
    );
    let app = helpers::TestApp::with_content(content, AppConfig::default()).await;
    let a = app.register("alice").await;
    let created = app.upload(&a, "readme.md", b"first").await;

    app.hub
        .versions
        .create_file_version(
            &RequestContext::new(a.id),
            created.file.id,
            Bytes::from_static(b"second"),
            "updated",
            Some("typo fixes".to_string()),
        )
        .await
        .expect("version");

    let first = app
        .hub
        .versions
        .download_version(created.file.id, 1)
        .await
        .expect("download v1");
    let second = app
        .hub
        .versions
        .download_version(created.file.id, 2)
        .await
        .expect("download v2");
    assert_eq!(first.data, Bytes::from_static(b"first"));
    assert_eq!(second.data, Bytes::from_static(b"second"));
    assert_eq!(second.file_name, "readme.md");
}
