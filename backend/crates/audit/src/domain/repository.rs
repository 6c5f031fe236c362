//! Repository Traits

use serde_json::Value;

use crate::domain::entities::{
    ErrorLogEntry, PaymentLogEntry, ServerAction, ServerLogs,
};

/// Audit log repository.
///
/// Appends never fail; tail reads return copies.
#[trait_variant::make(AuditRepository: Send)]
pub trait LocalAuditRepository {
    /// Append an event to the server's log
    async fn record_server(&self, server_id: &str, action: ServerAction, details: Value);

    async fn record_payment(&self, entry: PaymentLogEntry);

    async fn record_error(&self, entry: ErrorLogEntry);

    /// Every server in first-seen order, each with at most its last `per_server` entries
    async fn server_logs(&self, per_server: usize) -> Vec<ServerLogs>;

    /// Total count and the last `limit` entries, newest first
    async fn payment_logs(&self, limit: usize) -> (usize, Vec<PaymentLogEntry>);

    /// Total count and the last `limit` entries, newest first
    async fn error_logs(&self, limit: usize) -> (usize, Vec<ErrorLogEntry>);
}
