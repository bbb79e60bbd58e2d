//! Report records produced by the aggregation engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use teamhub_entity::stats::NamedCount;
use teamhub_entity::user::UserSummary;

/// Headline dashboard numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total number of files.
    pub uploads: i64,
    /// Total number of comments.
    pub comments: i64,
    /// Distinct users holding a project membership.
    pub members: i64,
    /// Distinct UTC dates with activity; never below 1.
    pub days_active: i64,
    /// Files per declared type, largest bucket first.
    pub file_types: Vec<NamedCount>,
    /// Activities per category: `Uploads`, `Updates`, `Comments`.
    pub activity_by_category: Vec<NamedCount>,
}

/// One user's share of the team's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    /// The contributor.
    pub user: UserSummary,
    /// Files uploaded.
    pub files_count: i64,
    /// Comments posted.
    pub comments_count: i64,
    /// Weighted score: three points per file, one per comment.
    pub score: i64,
    /// Rounded share of the total score, 0 to 100.
    pub percentage: i64,
}

/// Activity counts for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// The UTC date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Uploads plus updates.
    pub files: i64,
    /// Comments.
    pub comments: i64,
}
