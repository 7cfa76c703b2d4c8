//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` across the application.
//! Publishing never blocks and never fails the caller.

use chrono::{DateTime, Utc};
use mandir_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ContentEvent
// ---------------------------------------------------------------------------

/// Kind of change applied to a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentAction {
    Created,
    Updated,
    Deleted,
    Reordered,
    Toggled,
}

impl ContentAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentAction::Created => "created",
            ContentAction::Updated => "updated",
            ContentAction::Deleted => "deleted",
            ContentAction::Reordered => "reordered",
            ContentAction::Toggled => "toggled",
        }
    }
}

/// A change that happened to site content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEvent {
    /// Dot-separated event name, e.g. `"slider_image.reordered"`.
    pub event_type: String,

    /// Entity kind the event is about (e.g. `"event"`, `"service_card"`).
    pub entity_type: Option<String>,

    pub entity_id: Option<DbId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    pub timestamp: DateTime<Utc>,
}

impl ContentEvent {
    /// Create an event with only the required `event_type`.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            entity_type: None,
            entity_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Event for `action` applied to the record `entity_id` of kind `entity`,
    /// named `"{entity}.{action}"`.
    pub fn record(entity: &str, action: ContentAction, entity_id: DbId) -> Self {
        Self::new(format!("{entity}.{}", action.as_str())).with_entity(entity, entity_id)
    }

    pub fn with_entity(mut self, entity_type: impl Into<String>, entity_id: DbId) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// When the buffer is full the oldest unconsumed messages are dropped and
/// slow receivers observe `RecvError::Lagged`.
pub struct EventBus {
    sender: broadcast::Sender<ContentEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With no subscribers the event is silently dropped.
    pub fn publish(&self, event: ContentEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
