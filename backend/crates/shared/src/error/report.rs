//! Error Report
//!
//! A server-side failure leaves an [`ErrorReport`] in the response extensions.
//! The API crate's reporting middleware picks it up, appends it to the error
//! log and forwards it to the `errors` notification channel. Handlers never
//! talk to the error log themselves for 5xx responses.

use serde::Serialize;

/// Internal description of a 5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Message shown to the client
    pub message: String,
    /// Source chain, never exposed to the client
    pub detail: Option<String>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Detail when present, else the public message.
    pub fn describe(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.message)
    }
}
