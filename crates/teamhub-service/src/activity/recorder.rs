//! Activity recorder: turns committed collaboration events into activity
//! feed entries.
//!
//! | Event                               | Activity  |
//! |-------------------------------------|-----------|
//! | `MemberJoined`                      | `join`    |
//! | `FileUploaded`                      | `upload`  |
//! | `VersionCreated`, version 1         | (none)    |
//! | `VersionCreated`, version 2 or more | `update`  |
//! | `CommentPosted`                     | `comment` |
//!
//! Version 1 is written together with every upload, so the upload entry
//! already covers it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use teamhub_core::error::AppError;
use teamhub_core::events::{CollaborationEvent, DomainEvent};
use teamhub_core::result::AppResult;
use teamhub_core::traits::EventObserver;
use teamhub_core::types::id::{FileId, ProjectId, UserId};
use teamhub_database::EntityStore;
use teamhub_entity::activity::{Activity, ActivityType, NewActivity};

/// Appends activity entries to the store.
#[derive(Clone)]
pub struct ActivityRecorder {
    store: Arc<dyn EntityStore>,
}

impl std::fmt::Debug for ActivityRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityRecorder").finish()
    }
}

impl ActivityRecorder {
    /// Creates a recorder writing to `store`.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Appends one activity stamped with the current time.
    ///
    /// `join` entries never reference a file.
    pub async fn record_activity(
        &self,
        activity_type: ActivityType,
        user_id: UserId,
        project_id: ProjectId,
        file_id: Option<FileId>,
    ) -> AppResult<Activity> {
        if activity_type == ActivityType::Join && file_id.is_some() {
            return Err(AppError::invalid_input(
                "Join activities cannot reference a file",
            ));
        }

        let activity = self
            .store
            .create_activity(&NewActivity {
                activity_type,
                user_id,
                file_id,
                project_id,
            })
            .await?;

        info!(
            activity_id = %activity.id,
            activity_type = %activity.activity_type,
            user_id = %user_id,
            project_id = %project_id,
            "Activity recorded"
        );
        Ok(activity)
    }

    /// The activity an event calls for, if any.
    pub fn activity_for(event: &DomainEvent) -> Option<NewActivity> {
        let (activity_type, file_id) = match &event.payload {
            CollaborationEvent::MemberJoined { .. } => (ActivityType::Join, None),
            CollaborationEvent::FileUploaded { file_id, .. } => {
                (ActivityType::Upload, Some(*file_id))
            }
            CollaborationEvent::VersionCreated {
                file_id,
                version_number,
                ..
            } => {
                if *version_number <= 1 {
                    return None;
                }
                (ActivityType::Update, Some(*file_id))
            }
            CollaborationEvent::CommentPosted { file_id, .. } => {
                (ActivityType::Comment, Some(*file_id))
            }
        };

        let user_id = match &event.payload {
            CollaborationEvent::MemberJoined { user_id, .. } => *user_id,
            _ => event.actor_id,
        };

        Some(NewActivity {
            activity_type,
            user_id,
            file_id,
            project_id: event.payload.project_id(),
        })
    }
}

#[async_trait]
impl EventObserver for ActivityRecorder {
    fn name(&self) -> &str {
        "activity_recorder"
    }

    async fn on_event(&self, event: &DomainEvent) -> AppResult<()> {
        match Self::activity_for(event) {
            Some(activity) => {
                self.record_activity(
                    activity.activity_type,
                    activity.user_id,
                    activity.project_id,
                    activity.file_id,
                )
                .await?;
            }
            None => debug!(event = event.payload.name(), "No activity for event"),
        }
        Ok(())
    }
}
