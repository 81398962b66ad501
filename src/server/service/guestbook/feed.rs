//! In-process guestbook event feed backed by a `tokio::sync::broadcast` channel.
//!
//! [`GuestbookFeed`] is cloned into `AppState`; the guestbook service publishes to it
//! and SSE handlers subscribe.

use tokio::sync::broadcast;

use crate::server::model::guestbook::GuestbookEvent;

/// Default buffer capacity for the broadcast channel.
pub const DEFAULT_CAPACITY: usize = 256;

/// Fan-out feed of guestbook changes.
///
/// When the buffer is full the oldest events are dropped and slow receivers observe
/// `RecvError::Lagged`.
#[derive(Clone)]
pub struct GuestbookFeed {
    sender: broadcast::Sender<GuestbookEvent>,
}

impl GuestbookFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all current subscribers.
    ///
    /// With no subscribers the event is dropped.
    pub fn publish(&self, event: GuestbookEvent) {
        let receivers = self.sender.send(event).unwrap_or(0);
        tracing::debug!("Published guestbook event to {} subscriber(s)", receivers);
    }

    /// Subscribes to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<GuestbookEvent> {
        self.sender.subscribe()
    }
}

impl Default for GuestbookFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::guestbook::{GuestbookEntry, GuestbookEventKind};
    use chrono::Utc;
    use entity::guestbook_entry::GuestbookStatus;
    use tokio::sync::broadcast::error::RecvError;

    fn event(id: i32) -> GuestbookEvent {
        GuestbookEvent {
            kind: GuestbookEventKind::Submitted,
            entry: GuestbookEntry {
                id,
                name: "Guest".to_string(),
                message: "Hello".to_string(),
                status: GuestbookStatus::Pending,
                created_at: Utc::now(),
                moderated_at: None,
            },
        }
    }

    #[tokio::test]
    async fn delivers_to_every_subscriber() {
        let feed = GuestbookFeed::default();
        let mut first = feed.subscribe();
        let mut second = feed.subscribe();

        feed.publish(event(1));

        assert_eq!(first.recv().await.unwrap().entry.id, 1);
        assert_eq!(second.recv().await.unwrap().entry.id, 1);
    }

    #[tokio::test]
    async fn publishing_without_subscribers_is_a_no_op() {
        let feed = GuestbookFeed::new(4);

        feed.publish(event(1));

        let mut late = feed.subscribe();
        feed.publish(event(2));
        assert_eq!(late.recv().await.unwrap().entry.id, 2);
    }

    #[tokio::test]
    async fn slow_subscriber_observes_lag() {
        let feed = GuestbookFeed::new(2);
        let mut slow = feed.subscribe();

        for id in 1..=4 {
            feed.publish(event(id));
        }

        assert!(matches!(slow.recv().await, Err(RecvError::Lagged(2))));
        assert_eq!(slow.recv().await.unwrap().entry.id, 3);
    }
}
