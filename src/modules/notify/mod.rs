//! User-facing notifications: transient, fire-and-forget messages with a
//! severity.

use log::{info, warn};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification {
            severity: Severity::Success,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.notify(Notification {
            severity: Severity::Error,
            message: message.to_string(),
        });
    }
}

/// Writes notifications to the `notify` log target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => info!(target: "notify", "{}", notification.message),
            Severity::Error => warn!(target: "notify", "{}", notification.message),
        }
    }
}

/// Forwards notifications to whoever holds the receiving end, usually the UI.
#[derive(Clone, Debug)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // nobody listening anymore
        let _ = self.tx.send(notification);
    }
}
