//! Project membership entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use teamhub_core::types::id::{ProjectId, ProjectMemberId, UserId};

use crate::user::User;

/// Role assigned when none is given.
pub const DEFAULT_MEMBER_ROLE: &str = "member";

/// Links a user to a project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectMember {
    /// Unique membership identifier.
    pub id: ProjectMemberId,
    /// The member.
    pub user_id: UserId,
    /// The project.
    pub project_id: ProjectId,
    /// Member role (e.g. `"member"`, `"owner"`).
    pub role: String,
    /// When the user joined.
    pub joined_at: DateTime<Utc>,
}

/// Data required to add a member to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProjectMember {
    /// The joining user.
    pub user_id: UserId,
    /// The project joined.
    pub project_id: ProjectId,
    /// Member role.
    pub role: String,
}

impl NewProjectMember {
    /// Membership with the default `"member"` role.
    pub fn member(user_id: UserId, project_id: ProjectId) -> Self {
        Self {
            user_id,
            project_id,
            role: DEFAULT_MEMBER_ROLE.to_string(),
        }
    }
}

/// A newly created user together with the membership created alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledUser {
    /// The user.
    pub user: User,
    /// The user's first membership.
    pub membership: ProjectMember,
}

/// A membership together with the member's user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMemberDetail {
    /// The membership row.
    #[serde(flatten)]
    pub member: ProjectMember,
    /// The member.
    pub user: User,
}
