//! Queue handle and dispatcher

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use crate::channel::{Channel, Notification};
use crate::telegram::NotificationTransport;

pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Producer handle. Cloning is cheap; sending never blocks.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: Option<mpsc::Sender<Notification>>,
}

impl Notifier {
    /// A notifier that drops everything
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// A notifier plus the receiving end of its queue
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx: Some(tx) }, rx)
    }

    /// Queue `text` for `channel`. Returns whether it was queued.
    pub fn send(&self, channel: Channel, text: impl Into<String>) -> bool {
        let Some(tx) = &self.tx else {
            return false;
        };

        match tx.try_send(Notification::new(channel, text)) {
            Ok(()) => true,
            Err(TrySendError::Full(dropped)) => {
                tracing::warn!(channel = %dropped.channel, "Notification queue full, message dropped");
                false
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!(channel = %channel, "Notification dispatcher stopped, message dropped");
                false
            }
        }
    }
}

/// Spawn the single dispatcher task draining the queue into `transport`.
///
/// The task ends once every [`Notifier`] clone has been dropped.
pub fn spawn_dispatcher<T>(transport: T, capacity: usize) -> (Notifier, JoinHandle<()>)
where
    T: NotificationTransport + Sync + 'static,
{
    let (notifier, mut rx) = Notifier::channel(capacity);

    let handle = tokio::spawn(async move {
        while let Some(notification) = rx.recv().await {
            if let Err(e) = transport.deliver(&notification).await {
                tracing::warn!(
                    channel = %notification.channel,
                    error = %e,
                    "Notification delivery failed"
                );
            }
        }
        tracing::debug!("Notification dispatcher stopped");
    });

    (notifier, handle)
}
