//! PostgreSQL repositories, one per entity family.

pub mod activity;
pub mod comment;
pub mod file;
pub mod project;
pub mod stats;
pub mod user;
pub mod version;

pub use activity::ActivityRepository;
pub use comment::CommentRepository;
pub use file::FileRepository;
pub use project::ProjectRepository;
pub use stats::StatsRepository;
pub use user::UserRepository;
pub use version::FileVersionRepository;

use sqlx::FromRow;

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::types::id::UserId;
use teamhub_entity::user::UserSummary;

/// Map a sqlx error to an [`AppError`], classifying constraint violations.
///
/// Unique violations become `AlreadyExists`, foreign-key violations become
/// `NotFound`, and everything else is a `Database` error.
pub(crate) fn db_error(context: impl Into<String>, err: sqlx::Error) -> AppError {
    let (unique, foreign_key) = match &err {
        sqlx::Error::Database(db) => (db.is_unique_violation(), db.is_foreign_key_violation()),
        _ => (false, false),
    };
    let kind = if unique {
        ErrorKind::AlreadyExists
    } else if foreign_key {
        ErrorKind::NotFound
    } else {
        ErrorKind::Database
    };
    AppError::with_source(kind, context, err)
}

/// Author columns selected alongside a joined row.
///
/// Queries select `author_name` as
/// `COALESCE(NULLIF(BTRIM(u.full_name), ''), u.username, 'Unknown')` and
/// `author_avatar` as `u.avatar_url` over a `LEFT JOIN users u`, so a
/// dangling user reference yields the `Unknown` placeholder.
#[derive(Debug, FromRow)]
pub(crate) struct AuthorColumns {
    pub author_name: String,
    pub author_avatar: Option<String>,
}

impl AuthorColumns {
    pub(crate) fn into_summary(self, id: UserId) -> UserSummary {
        UserSummary {
            id,
            name: self.author_name,
            avatar_url: self.author_avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_errors_map_to_database() {
        let err = db_error("Failed to find file", sqlx::Error::RowNotFound);
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to find file");
        assert!(err.source.is_some());
    }

    #[test]
    fn test_author_columns_into_summary() {
        let cols = AuthorColumns {
            author_name: "Unknown".into(),
            author_avatar: None,
        };
        assert_eq!(cols.into_summary(UserId(4)), UserSummary::unknown(UserId(4)));
    }
}
