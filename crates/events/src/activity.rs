//! Recent-activity feed.
//!
//! [`ActivityLog`] subscribes to the [`EventBus`](crate::bus::EventBus) and
//! keeps the last `capacity` [`ContentEvent`]s in memory. It runs as a
//! long-lived background task and exits when the bus sender is dropped.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use crate::bus::ContentEvent;

/// Bounded, newest-first view over recent content events.
///
/// Cheap to clone; clones share the same buffer.
#[derive(Clone)]
pub struct ActivityLog {
    entries: Arc<RwLock<VecDeque<ContentEvent>>>,
    capacity: usize,
}

impl ActivityLog {
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an event, evicting the oldest when full.
    pub async fn record(&self, event: ContentEvent) {
        let mut entries = self.entries.write().await;
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(event);
    }

    /// Up to `limit` events, newest first.
    pub async fn recent(&self, limit: usize) -> Vec<ContentEvent> {
        let entries = self.entries.read().await;
        entries.iter().rev().take(limit).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Consume events from `receiver` until the bus closes.
    pub async fn run(self, mut receiver: broadcast::Receiver<ContentEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    tracing::debug!(event_type = %event.event_type, "Recording activity");
                    self.record(event).await;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Activity log lagged, some events were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, activity log shutting down");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::bus::{ContentAction, EventBus};

    #[tokio::test]
    async fn recent_returns_newest_first() {
        let log = ActivityLog::new(10);
        for id in 1..=3 {
            log.record(ContentEvent::record("event", ContentAction::Created, id))
                .await;
        }

        let recent = log.recent(2).await;
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id).collect();
        assert_eq!(ids, vec![Some(3), Some(2)]);
    }

    #[tokio::test]
    async fn oldest_entries_are_evicted_at_capacity() {
        let log = ActivityLog::new(2);
        for id in 1..=5 {
            log.record(ContentEvent::record("service", ContentAction::Updated, id))
                .await;
        }

        assert_eq!(log.len().await, 2);
        let ids: Vec<_> = log.recent(10).await.iter().map(|e| e.entity_id).collect();
        assert_eq!(ids, vec![Some(5), Some(4)]);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        assert_eq!(ActivityLog::new(0).capacity(), 1);
    }

    #[tokio::test]
    async fn run_records_published_events_and_stops_when_bus_drops() {
        let bus = EventBus::default();
        let log = ActivityLog::new(10);
        let handle = tokio::spawn(log.clone().run(bus.subscribe()));

        bus.publish(ContentEvent::record("testimonial", ContentAction::Toggled, 4));
        drop(bus);

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("activity log should stop after the bus closes")
            .unwrap();

        let recent = log.recent(10).await;
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].event_type, "testimonial.toggled");
    }
}
