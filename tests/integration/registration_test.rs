//! Integration tests for user registration and the team listing.

mod helpers;

use teamhub::ErrorKind;
use teamhub::entity::activity::ActivityType;
use teamhub::entity::user::NewUser;

#[tokio::test]
async fn test_register_joins_default_project() {
    let app = helpers::TestApp::new().await;
    let user = app.register("carol").await;

    let joins: Vec<_> = app
        .activities()
        .await
        .into_iter()
        .filter(|a| a.activity_type == ActivityType::Join)
        .collect();
    assert_eq!(joins.len(), 1);
    assert_eq!(joins[0].user_id, user.id);
    assert_eq!(joins[0].project_id, app.project.id);
    assert_eq!(joins[0].file_id, None);

    let members = app
        .hub
        .projects
        .list_members(app.project.id)
        .await
        .expect("members");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user.id, user.id);
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let app = helpers::TestApp::new().await;
    app.register("carol").await;

    let err = app
        .hub
        .users
        .register(NewUser::new("CAROL", "password123"))
        .await
        .expect_err("duplicate");
    assert_eq!(err.kind, ErrorKind::AlreadyExists);
    assert_eq!(app.count_of(ActivityType::Join).await, 1);
}

#[tokio::test]
async fn test_team_listing() {
    let app = helpers::TestApp::new().await;
    let a = app.register("alice").await;
    app.register("bob").await;
    app.upload(&a, "a.txt", b"a").await;

    let team = app.hub.team.list_team(app.project.id).await.expect("team");
    assert_eq!(team.len(), 2);
    assert_eq!(team[0].username, "alice");
    assert_eq!(team[0].files_percentage, 100.0);
    assert_eq!(team[0].contribution_percentage, 100);
    assert_eq!(team[1].email, "bob@example.com");
    assert_eq!(team[1].contribution_percentage, 0);
}
