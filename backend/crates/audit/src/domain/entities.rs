//! Domain Entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// What happened to a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerAction {
    ServerCreated,
    WarrantyClaimed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerLogEntry {
    pub timestamp: DateTime<Utc>,
    pub action: ServerAction,
    pub details: Value,
}

/// All entries for one server, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerLogs {
    pub server_id: String,
    pub logs: Vec<ServerLogEntry>,
}

/// Reconciliation outcome recorded for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentLogStatus {
    Success,
    Failed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLogEntry {
    pub timestamp: DateTime<Utc>,
    pub order_id: String,
    pub amount: u64,
    pub status: PaymentLogStatus,
    pub details: Value,
}

impl PaymentLogEntry {
    pub fn new(
        order_id: impl Into<String>,
        amount: u64,
        status: PaymentLogStatus,
        details: Value,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            order_id: order_id.into(),
            amount,
            status,
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorLogEntry {
    pub timestamp: DateTime<Utc>,
    /// Public message
    pub error: String,
    /// Internal cause chain, if known
    pub detail: Option<String>,
    /// Where it happened (endpoint, order id, ...)
    pub context: Value,
}

impl ErrorLogEntry {
    pub fn new(error: impl Into<String>, detail: Option<String>, context: Value) -> Self {
        Self {
            timestamp: Utc::now(),
            error: error.into(),
            detail,
            context,
        }
    }
}
