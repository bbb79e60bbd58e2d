//! Observer trait for post-commit domain event handling.

use async_trait::async_trait;

use crate::events::DomainEvent;
use crate::result::AppResult;

/// Trait implemented by components reacting to committed mutations.
///
/// Observers run synchronously, in subscription order, after the store
/// write that produced the event has committed. An error aborts the
/// remaining observers and is reported to the caller of the mutation.
#[async_trait]
pub trait EventObserver: Send + Sync + std::fmt::Debug + 'static {
    /// Human-readable observer name, used in logs.
    fn name(&self) -> &str;

    /// Handle one event.
    async fn on_event(&self, event: &DomainEvent) -> AppResult<()>;
}
