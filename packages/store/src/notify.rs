//! Fire-and-forget notification sink.
//!
//! The core reports success/failure events here and never consumes a
//! response; rendering them as toasts is the frontend's concern.

use std::sync::Mutex;

/// Event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

/// Human-readable event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotifyKind,
    pub title: String,
    pub detail: String,
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotifyKind, title: &str, detail: &str);
}

/// Sink that forwards events to the tracing subscriber.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, kind: NotifyKind, title: &str, detail: &str) {
        match kind {
            NotifyKind::Success => tracing::info!(title, detail, "notification"),
            NotifyKind::Error => tracing::error!(title, detail, "notification"),
        }
    }
}

/// Sink that records events for inspection in tests.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().expect("sink lock poisoned").clone()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter(|n| n.kind == NotifyKind::Error)
            .collect()
    }

    pub fn successes(&self) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter(|n| n.kind == NotifyKind::Success)
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, kind: NotifyKind, title: &str, detail: &str) {
        self.events.lock().expect("sink lock poisoned").push(Notification {
            kind,
            title: title.to_string(),
            detail: detail.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order_and_kind() {
        let sink = RecordingSink::new();
        sink.notify(NotifyKind::Success, "Guide saved!", "Guide saved");
        sink.notify(NotifyKind::Error, "Something went wrong", "Guide was not saved");

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, NotifyKind::Success);
        assert_eq!(events[1].title, "Something went wrong");
        assert_eq!(sink.errors().len(), 1);
        assert_eq!(sink.successes().len(), 1);
    }
}
