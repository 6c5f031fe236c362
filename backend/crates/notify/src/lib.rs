//! Notification sink
//!
//! Fire-and-forget delivery of HTML messages to chat channels.
//!
//! Producers hold a cheap [`Notifier`] handle and never wait on delivery:
//! messages go into a bounded queue drained by one dispatcher task. A full
//! queue drops the message with a warning. Delivery failures are logged
//! locally and otherwise swallowed.

pub mod channel;
pub mod config;
pub mod error;
pub mod notifier;
pub mod telegram;

pub use channel::{Channel, Notification};
pub use config::TelegramConfig;
pub use error::{NotifyError, NotifyResult};
pub use notifier::{DEFAULT_QUEUE_CAPACITY, Notifier, spawn_dispatcher};
pub use telegram::{LocalNotificationTransport, NotificationTransport, TelegramTransport};

#[cfg(test)]
mod tests;
