//! Activity log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use teamhub_core::types::id::{ActivityId, FileId, ProjectId, UserId};

use super::kind::ActivityType;
use crate::user::UserSummary;

/// An immutable activity feed entry. Never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: ActivityId,
    /// What happened.
    pub activity_type: ActivityType,
    /// The acting user.
    pub user_id: UserId,
    /// The file involved (absent for `join`).
    pub file_id: Option<FileId>,
    /// The project the action happened in.
    pub project_id: ProjectId,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
}

/// Data required to append an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    /// What happened.
    pub activity_type: ActivityType,
    /// The acting user.
    pub user_id: UserId,
    /// The file involved.
    pub file_id: Option<FileId>,
    /// The project.
    pub project_id: ProjectId,
}

/// An activity joined with the actor's identity and the file name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDetail {
    /// The activity row.
    #[serde(flatten)]
    pub activity: Activity,
    /// The actor (or the `Unknown` placeholder).
    pub user: UserSummary,
    /// Name of the file involved, when there is one.
    pub file_name: Option<String>,
}
