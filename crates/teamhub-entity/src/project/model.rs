//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use teamhub_core::types::id::ProjectId;

/// A team project grouping files and members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a project.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewProject {
    /// Project name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}
