//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` in the API state. Handlers
//! publish after their database writes succeed; background services such as
//! the email router subscribe.

use chrono::{DateTime, Utc};
use jobboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// Event names
// ---------------------------------------------------------------------------

pub const EVENT_APPLICATION_SUBMITTED: &str = "application.submitted";
pub const EVENT_APPLICATION_STATUS_CHANGED: &str = "application.status_changed";
pub const EVENT_INQUIRY_CREATED: &str = "inquiry.created";
pub const EVENT_VACANCY_SUBMITTED: &str = "vacancy.submitted";
pub const EVENT_JOB_PUBLISHED: &str = "job.published";

// ---------------------------------------------------------------------------
// DomainEvent
// ---------------------------------------------------------------------------

/// Something that happened on the job board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Dot-separated event name, e.g. `"application.submitted"`.
    pub event_type: String,

    /// Source entity kind (e.g. `"application"`, `"job"`).
    pub source_entity_type: Option<String>,

    pub source_entity_id: Option<DbId>,

    /// Id of the user or admin that triggered the event, if any.
    pub actor_id: Option<DbId>,

    /// Event-specific data, e.g. a job title for the email body.
    pub payload: serde_json::Value,

    pub timestamp: DateTime<Utc>,
}

impl DomainEvent {
    /// Create a new event with only the required `event_type`.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            source_entity_type: None,
            source_entity_id: None,
            actor_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_source(mut self, entity_type: impl Into<String>, entity_id: DbId) -> Self {
        self.source_entity_type = Some(entity_type.into());
        self.source_entity_id = Some(entity_id);
        self
    }

    pub fn with_actor(mut self, actor_id: DbId) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Look up a string field in the payload.
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(|v| v.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// ```rust
/// use jobboard_events::bus::{DomainEvent, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(DomainEvent::new("job.published"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest messages are dropped and slow
    /// receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With no subscribers the event is dropped.
    pub fn publish(&self, event: DomainEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let event = DomainEvent::new(EVENT_APPLICATION_SUBMITTED)
            .with_source("application", 42)
            .with_actor(7)
            .with_payload(serde_json::json!({"job_title": "Welder"}));

        bus.publish(event);

        let received = rx.recv().await.expect("should receive the event");
        assert_eq!(received.event_type, "application.submitted");
        assert_eq!(received.source_entity_type.as_deref(), Some("application"));
        assert_eq!(received.source_entity_id, Some(42));
        assert_eq!(received.actor_id, Some(7));
        assert_eq!(received.payload_str("job_title"), Some("Welder"));
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(DomainEvent::new(EVENT_JOB_PUBLISHED));

        assert_eq!(rx1.recv().await.unwrap().event_type, "job.published");
        assert_eq!(rx2.recv().await.unwrap().event_type, "job.published");
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(DomainEvent::new(EVENT_INQUIRY_CREATED));
    }

    #[test]
    fn payload_str_ignores_missing_and_non_string() {
        let event = DomainEvent::new("x").with_payload(serde_json::json!({"n": 3}));
        assert_eq!(event.payload_str("n"), None);
        assert_eq!(event.payload_str("missing"), None);
        assert!(event.source_entity_type.is_none());
    }
}
