//! Domain events emitted after TeamHub mutations commit.
//!
//! Events are published on the service event bus and consumed by
//! observers such as the activity recorder.

pub mod collaboration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::id::UserId;

pub use collaboration::CollaborationEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event.
    pub actor_id: UserId,
    /// The event payload.
    pub payload: CollaborationEvent,
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: UserId, payload: CollaborationEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }
}
