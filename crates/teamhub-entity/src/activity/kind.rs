//! Activity type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of user action recorded in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "activity_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// A file was uploaded.
    Upload,
    /// A comment was posted.
    Comment,
    /// A new version of a file was recorded.
    Update,
    /// A user joined a project.
    Join,
}

impl ActivityType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Comment => "comment",
            Self::Update => "update",
            Self::Join => "join",
        }
    }

    /// Whether the activity changes file content (upload or update).
    pub fn is_file_change(&self) -> bool {
        matches!(self, Self::Upload | Self::Update)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = teamhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upload" => Ok(Self::Upload),
            "comment" => Ok(Self::Comment),
            "update" => Ok(Self::Update),
            "join" => Ok(Self::Join),
            _ => Err(teamhub_core::AppError::invalid_input(format!(
                "Invalid activity type: '{s}'. Expected one of: upload, comment, update, join"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("UPLOAD".parse::<ActivityType>().unwrap(), ActivityType::Upload);
        assert_eq!("join".parse::<ActivityType>().unwrap(), ActivityType::Join);
        assert!("download".parse::<ActivityType>().is_err());
    }

    #[test]
    fn test_file_change_classification() {
        assert!(ActivityType::Upload.is_file_change());
        assert!(ActivityType::Update.is_file_change());
        assert!(!ActivityType::Comment.is_file_change());
        assert!(!ActivityType::Join.is_file_change());
    }
}
