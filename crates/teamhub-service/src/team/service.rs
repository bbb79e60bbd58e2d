//! Team service.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use teamhub_core::config::AccountsConfig;
use teamhub_core::error::AppError;
use teamhub_core::result::AppResult;
use teamhub_core::types::id::{ProjectId, UserId};
use teamhub_database::EntityStore;
use teamhub_entity::project::ProjectMemberDetail;

use crate::stats::aggregate;

/// One row of the team page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// The member's user ID.
    pub user_id: UserId,
    /// Full name or username.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Stored e-mail, or the generated fallback.
    pub email: String,
    /// Avatar reference.
    pub avatar_url: Option<String>,
    /// Membership role.
    pub role: String,
    /// When the member joined the project.
    pub joined_at: DateTime<Utc>,
    /// Files uploaded.
    pub files_count: i64,
    /// Comments posted.
    pub comments_count: i64,
    /// Share of all uploaded files, unrounded.
    pub files_percentage: f64,
    /// Share of all posted comments, unrounded.
    pub comments_percentage: f64,
    /// Weighted contribution share, as reported by the contribution ranking.
    pub contribution_percentage: i64,
}

/// Lists project members alongside their activity figures.
#[derive(Clone)]
pub struct TeamService {
    store: Arc<dyn EntityStore>,
    accounts: AccountsConfig,
}

impl std::fmt::Debug for TeamService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamService").finish()
    }
}

impl TeamService {
    /// Creates a new team service.
    pub fn new(store: Arc<dyn EntityStore>, accounts: AccountsConfig) -> Self {
        Self { store, accounts }
    }

    /// The members of `project_id` in join order.
    pub async fn list_team(&self, project_id: ProjectId) -> AppResult<Vec<TeamMember>> {
        if self.store.find_project(project_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Project {project_id} not found"
            )));
        }

        let members = self.store.list_project_members(project_id).await?;
        let authors = self.store.author_counts().await?;
        let total_files: i64 = authors.iter().map(|a| a.files_count).sum();
        let total_comments: i64 = authors.iter().map(|a| a.comments_count).sum();

        let counts: HashMap<UserId, (i64, i64)> = authors
            .iter()
            .map(|a| (a.user_id(), (a.files_count, a.comments_count)))
            .collect();
        let weighted: HashMap<UserId, i64> = aggregate::contributions(authors)
            .into_iter()
            .map(|c| (c.user.id, c.percentage))
            .collect();

        Ok(members
            .into_iter()
            .map(|detail| {
                let user_id = detail.user.id;
                let (files_count, comments_count) =
                    counts.get(&user_id).copied().unwrap_or((0, 0));
                self.row(
                    detail,
                    files_count,
                    comments_count,
                    aggregate::share_percentage(files_count, total_files),
                    aggregate::share_percentage(comments_count, total_comments),
                    weighted.get(&user_id).copied().unwrap_or(0),
                )
            })
            .collect())
    }

    fn row(
        &self,
        detail: ProjectMemberDetail,
        files_count: i64,
        comments_count: i64,
        files_percentage: f64,
        comments_percentage: f64,
        contribution_percentage: i64,
    ) -> TeamMember {
        let ProjectMemberDetail { member, user } = detail;
        let email = user
            .email
            .clone()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| self.accounts.fallback_email(&user.username));
        TeamMember {
            user_id: user.id,
            name: user.display_name().to_string(),
            email,
            avatar_url: user.avatar_url.clone(),
            username: user.username,
            role: member.role,
            joined_at: member.joined_at,
            files_count,
            comments_count,
            files_percentage,
            comments_percentage,
            contribution_percentage,
        }
    }
}
