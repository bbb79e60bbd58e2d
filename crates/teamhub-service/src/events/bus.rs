//! Event bus: delivers committed domain events to subscribed observers.
//!
//! - Observers run one after another in subscription order.
//! - Delivery is synchronous: `publish` returns once every observer ran.
//! - The first observer error stops delivery and is returned to the
//!   publishing service.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use teamhub_core::events::{CollaborationEvent, DomainEvent};
use teamhub_core::result::AppResult;
use teamhub_core::traits::EventObserver;
use teamhub_core::types::id::UserId;

/// Ordered registry of event observers.
#[derive(Debug, Default)]
pub struct EventBus {
    observers: RwLock<Vec<Arc<dyn EventObserver>>>,
}

impl EventBus {
    /// Creates a bus with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer; it runs after every observer subscribed before it.
    pub async fn subscribe(&self, observer: Arc<dyn EventObserver>) {
        info!(observer = observer.name(), "Event observer subscribed");
        self.observers.write().await.push(observer);
    }

    /// Number of subscribed observers.
    pub async fn observer_count(&self) -> usize {
        self.observers.read().await.len()
    }

    /// Delivers `event` to every observer in order.
    pub async fn publish(&self, event: DomainEvent) -> AppResult<()> {
        // Snapshot so an observer may publish without deadlocking.
        let observers = self.observers.read().await.clone();

        debug!(
            event = event.payload.name(),
            event_id = %event.id,
            observer_count = observers.len(),
            "Publishing event"
        );

        for observer in &observers {
            if let Err(e) = observer.on_event(&event).await {
                warn!(
                    event = event.payload.name(),
                    observer = observer.name(),
                    error = %e,
                    "Observer failed, stopping delivery"
                );
                return Err(e);
            }
        }
        Ok(())
    }

    /// Wraps `payload` in a fresh [`DomainEvent`] and publishes it.
    pub async fn emit(&self, actor_id: UserId, payload: CollaborationEvent) -> AppResult<()> {
        self.publish(DomainEvent::new(actor_id, payload)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use teamhub_core::error::{AppError, ErrorKind};
    use teamhub_core::types::id::ProjectId;

    use super::*;

    #[derive(Debug)]
    struct Probe {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    #[async_trait]
    impl EventObserver for Probe {
        fn name(&self) -> &str {
            self.name
        }

        async fn on_event(&self, event: &DomainEvent) -> AppResult<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, event.payload.name()));
            if self.fail {
                return Err(AppError::internal("observer failure"));
            }
            Ok(())
        }
    }

    fn joined() -> CollaborationEvent {
        CollaborationEvent::MemberJoined {
            user_id: UserId(1),
            project_id: ProjectId(1),
        }
    }

    #[tokio::test]
    async fn test_observers_run_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::new();
        for name in ["first", "second"] {
            bus.subscribe(Arc::new(Probe {
                name,
                log: log.clone(),
                fail: false,
            }))
            .await;
        }

        bus.emit(UserId(1), joined()).await.unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:member_joined", "second:member_joined"]
        );
    }

    #[tokio::test]
    async fn test_first_failure_stops_delivery() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::new();
        bus.subscribe(Arc::new(Probe {
            name: "broken",
            log: log.clone(),
            fail: true,
        }))
        .await;
        bus.subscribe(Arc::new(Probe {
            name: "never",
            log: log.clone(),
            fail: false,
        }))
        .await;

        let err = bus.emit(UserId(1), joined()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(*log.lock().unwrap(), vec!["broken:member_joined"]);
        assert_eq!(bus.observer_count().await, 2);
    }

    #[tokio::test]
    async fn test_publish_without_observers() {
        EventBus::new().emit(UserId(1), joined()).await.unwrap();
    }
}
