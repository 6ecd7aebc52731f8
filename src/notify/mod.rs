//! Fire-and-forget notification surface.
//!
//! The component reports user-facing outcomes (submission results, validation
//! failures, refresh results) as [`Notification`] events on an unbounded
//! channel. The host owns the receiving end and renders the events however it
//! likes; nothing is retried or queued beyond the channel itself, and a
//! dropped receiver simply loses events.

use tokio::sync::mpsc;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Success,
    Error,
}

/// One user-facing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".to_owned(),
            message: message.into(),
            variant: Variant::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_owned(),
            message: message.into(),
            variant: Variant::Error,
        }
    }
}

/// Sending half of the notification surface.
#[derive(Clone)]
pub struct Notifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Creates a notifier and the receiver the host consumes.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Emits one event. Delivery is best-effort: if the receiver is gone the
    /// event is dropped without failing the caller.
    pub fn send(&self, notification: Notification) {
        let _ = self.sender.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_delivers_to_receiver() {
        let (notifier, mut receiver) = Notifier::channel();
        notifier.send(Notification::success("done"));

        let event = receiver.try_recv().unwrap();
        assert_eq!(event.title, "Success");
        assert_eq!(event.message, "done");
        assert_eq!(event.variant, Variant::Success);
    }

    #[tokio::test]
    async fn send_after_receiver_dropped_does_not_panic() {
        let (notifier, receiver) = Notifier::channel();
        drop(receiver);
        notifier.send(Notification::error("lost"));
    }
}
