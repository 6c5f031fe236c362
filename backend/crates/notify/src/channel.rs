//! Notification channels

/// Logical destination of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Transactions and catalog changes
    Payments,
    /// Provisioning and warranty activity
    Servers,
    /// Failures worth a human look
    Errors,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Payments => "payments",
            Channel::Servers => "servers",
            Channel::Errors => "errors",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One queued message. `text` is Telegram HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub channel: Channel,
    pub text: String,
}

impl Notification {
    pub fn new(channel: Channel, text: impl Into<String>) -> Self {
        Self {
            channel,
            text: text.into(),
        }
    }
}
