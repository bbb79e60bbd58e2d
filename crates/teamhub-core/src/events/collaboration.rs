//! Events describing team collaboration: joins, uploads, versions, comments.

use serde::{Deserialize, Serialize};

use crate::types::id::{CommentId, FileId, ProjectId, UserId};

/// Events published by the entity services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CollaborationEvent {
    /// A user became a member of a project.
    MemberJoined {
        /// The joining user.
        user_id: UserId,
        /// The project joined.
        project_id: ProjectId,
    },
    /// A new file was uploaded.
    FileUploaded {
        /// The new file.
        file_id: FileId,
        /// The owning project.
        project_id: ProjectId,
    },
    /// A file version was recorded (version 1 accompanies every upload).
    VersionCreated {
        /// The parent file.
        file_id: FileId,
        /// The owning project.
        project_id: ProjectId,
        /// The newly assigned version number.
        version_number: i32,
    },
    /// A comment was posted on a file.
    CommentPosted {
        /// The new comment.
        comment_id: CommentId,
        /// The file commented on.
        file_id: FileId,
        /// The project owning the file.
        project_id: ProjectId,
    },
}

impl CollaborationEvent {
    /// Short machine name of the event, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MemberJoined { .. } => "member_joined",
            Self::FileUploaded { .. } => "file_uploaded",
            Self::VersionCreated { .. } => "version_created",
            Self::CommentPosted { .. } => "comment_posted",
        }
    }

    /// The project the event belongs to.
    pub fn project_id(&self) -> ProjectId {
        match self {
            Self::MemberJoined { project_id, .. }
            | Self::FileUploaded { project_id, .. }
            | Self::VersionCreated { project_id, .. }
            | Self::CommentPosted { project_id, .. } => *project_id,
        }
    }

    /// The file the event refers to, if any.
    pub fn file_id(&self) -> Option<FileId> {
        match self {
            Self::MemberJoined { .. } => None,
            Self::FileUploaded { file_id, .. }
            | Self::VersionCreated { file_id, .. }
            | Self::CommentPosted { file_id, .. } => Some(*file_id),
        }
    }
}
