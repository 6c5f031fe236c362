//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::entities::{ErrorLogEntry, PaymentLogEntry, ServerLogs};

/// GET /api/admin/logs/servers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerLogsResponse {
    pub success: bool,
    pub total_servers: usize,
    pub logs: Vec<ServerLogs>,
}

/// GET /api/admin/logs/payments
#[derive(Debug, Clone, Serialize)]
pub struct PaymentLogsResponse {
    pub success: bool,
    pub total: usize,
    pub logs: Vec<PaymentLogEntry>,
}

/// GET /api/admin/logs/errors
#[derive(Debug, Clone, Serialize)]
pub struct ErrorLogsResponse {
    pub success: bool,
    pub total: usize,
    pub logs: Vec<ErrorLogEntry>,
}
