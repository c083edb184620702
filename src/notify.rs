//! One-shot user notifications
//!
//! Install, disconnect, and key actions surface a single notification
//! through a broadcast hub; a WebSocket route fans them out to connected
//! clients. Display rules (one visible at a time, auto-dismiss) belong to
//! the client; the payload carries the dismiss hint.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// How long clients should display a notification before auto-dismissing
pub const DISMISS_AFTER_MS: u64 = 4_000;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A one-shot message for the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub dismiss_after_ms: u64,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            dismiss_after_ms: DISMISS_AFTER_MS,
        }
    }
}

/// Broadcast hub for notifications
#[derive(Clone)]
pub struct NotificationHub {
    tx: broadcast::Sender<Notification>,
}

impl NotificationHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a notification. Send errors mean no client is connected and
    /// are ignored; notifications are best-effort.
    pub fn publish(&self, notification: Notification) {
        let _ = self.tx.send(notification);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn published_notifications_reach_subscribers() {
        let hub = NotificationHub::new(16);
        let mut rx = hub.subscribe();

        hub.publish(Notification::success("Finance Suite 1 installed successfully!"));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.kind, NotificationKind::Success);
        assert_eq!(received.dismiss_after_ms, DISMISS_AFTER_MS);
    }

    #[test]
    fn publish_without_subscribers_is_harmless() {
        let hub = NotificationHub::new(16);
        hub.publish(Notification::info("Integration disconnected."));
    }
}
