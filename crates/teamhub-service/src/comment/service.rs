//! Comment service: post and list comments.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use teamhub_core::error::AppError;
use teamhub_core::events::CollaborationEvent;
use teamhub_core::result::AppResult;
use teamhub_core::types::id::FileId;
use teamhub_database::EntityStore;
use teamhub_entity::comment::{Comment, CommentDetail, CommentWithAuthor, NewComment};

use crate::context::RequestContext;
use crate::events::EventBus;

/// Posts and lists comments.
#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn EntityStore>,
    bus: Arc<EventBus>,
}

impl std::fmt::Debug for CommentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentService").finish()
    }
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(store: Arc<dyn EntityStore>, bus: Arc<EventBus>) -> Self {
        Self { store, bus }
    }

    /// Posts a comment on a file as the acting user.
    pub async fn post_comment(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
        text: &str,
    ) -> AppResult<Comment> {
        let data = NewComment {
            text: text.trim().to_string(),
            file_id,
            user_id: ctx.user_id,
        };
        data.validate()?;

        let file = self
            .store
            .find_file(file_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))?;

        let comment = self.store.create_comment(&data).await?;
        info!(
            user_id = %ctx.user_id,
            file_id = %file_id,
            comment_id = %comment.id,
            "Comment posted"
        );

        self.bus
            .emit(
                ctx.user_id,
                CollaborationEvent::CommentPosted {
                    comment_id: comment.id,
                    file_id,
                    project_id: file.project_id,
                },
            )
            .await?;
        Ok(comment)
    }

    /// Every comment, newest first, with author and file name.
    pub async fn list_comments(&self) -> AppResult<Vec<CommentDetail>> {
        self.store.list_comments().await
    }

    /// A file's comments, newest first.
    pub async fn list_file_comments(&self, file_id: FileId) -> AppResult<Vec<CommentWithAuthor>> {
        if self.store.find_file(file_id).await?.is_none() {
            return Err(AppError::not_found(format!("File {file_id} not found")));
        }
        self.store.list_file_comments(file_id).await
    }
}
