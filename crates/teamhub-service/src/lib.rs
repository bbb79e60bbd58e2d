//! # teamhub-service
//!
//! Business logic for TeamHub. Services write through the
//! [`EntityStore`](teamhub_database::EntityStore), persist bytes through a
//! [`ContentStore`](teamhub_core::traits::ContentStore), and publish a
//! [`DomainEvent`](teamhub_core::events::DomainEvent) after every committed
//! mutation. The [`ActivityRecorder`] observes those events and appends the
//! activity feed; the [`StatsService`] reads everything back into
//! dashboard statistics.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. [`TeamHub`] wires them.

pub mod activity;
pub mod comment;
pub mod context;
pub mod events;
pub mod file;
pub mod hub;
pub mod project;
pub mod stats;
pub mod team;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use activity::{ActivityRecorder, ActivityService};
pub use comment::CommentService;
pub use context::RequestContext;
pub use events::EventBus;
pub use file::{FileDownload, FileService, FileUpload, VersionService, classify_file_type};
pub use hub::TeamHub;
pub use project::ProjectService;
pub use stats::StatsService;
pub use team::TeamService;
pub use user::UserService;
