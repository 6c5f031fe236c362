//! Admin log queries

use std::sync::Arc;

use crate::domain::entities::{ErrorLogEntry, PaymentLogEntry, ServerLogs};
use crate::domain::repository::AuditRepository;

/// Entries kept per server in the admin view
pub const SERVER_LOG_TAIL: usize = 50;
/// Payment entries in the admin view
pub const PAYMENT_LOG_TAIL: usize = 100;
/// Error entries in the admin view
pub const ERROR_LOG_TAIL: usize = 50;

#[derive(Debug, Clone)]
pub struct ServerLogsView {
    pub total_servers: usize,
    pub logs: Vec<ServerLogs>,
}

#[derive(Debug, Clone)]
pub struct PaymentLogsView {
    pub total: usize,
    pub logs: Vec<PaymentLogEntry>,
}

#[derive(Debug, Clone)]
pub struct ErrorLogsView {
    pub total: usize,
    pub logs: Vec<ErrorLogEntry>,
}

/// Read side of the audit log
pub struct LogQueries<R>
where
    R: AuditRepository,
{
    repo: Arc<R>,
}

impl<R> LogQueries<R>
where
    R: AuditRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn servers(&self) -> ServerLogsView {
        let logs = self.repo.server_logs(SERVER_LOG_TAIL).await;
        ServerLogsView {
            total_servers: logs.len(),
            logs,
        }
    }

    pub async fn payments(&self) -> PaymentLogsView {
        let (total, logs) = self.repo.payment_logs(PAYMENT_LOG_TAIL).await;
        PaymentLogsView { total, logs }
    }

    pub async fn errors(&self) -> ErrorLogsView {
        let (total, logs) = self.repo.error_logs(ERROR_LOG_TAIL).await;
        ErrorLogsView { total, logs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PaymentLogStatus, ServerAction};
    use crate::infra::memory::MemoryAuditRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_error_view_keeps_latest_fifty() {
        let repo = Arc::new(MemoryAuditRepository::new());
        for i in 0..75 {
            repo.record_error(ErrorLogEntry::new(format!("error {i}"), None, json!({})))
                .await;
        }

        let view = LogQueries::new(repo).errors().await;
        assert_eq!(view.total, 75);
        assert_eq!(view.logs.len(), ERROR_LOG_TAIL);
        assert_eq!(view.logs[0].error, "error 74");
        assert_eq!(view.logs[ERROR_LOG_TAIL - 1].error, "error 25");
    }

    #[tokio::test]
    async fn test_payment_and_server_views_apply_their_tails() {
        let repo = Arc::new(MemoryAuditRepository::new());
        for i in 0..120u64 {
            repo.record_payment(PaymentLogEntry::new(
                format!("ZP-{i:06}"),
                i,
                PaymentLogStatus::Success,
                json!({}),
            ))
            .await;
        }
        for i in 0..55 {
            repo.record_server("9", ServerAction::ServerCreated, json!({ "n": i }))
                .await;
        }

        let queries = LogQueries::new(repo);

        let payments = queries.payments().await;
        assert_eq!(payments.total, 120);
        assert_eq!(payments.logs.len(), PAYMENT_LOG_TAIL);
        assert_eq!(payments.logs[0].amount, 119);

        let servers = queries.servers().await;
        assert_eq!(servers.total_servers, 1);
        assert_eq!(servers.logs[0].logs.len(), SERVER_LOG_TAIL);
        assert_eq!(servers.logs[0].logs[0].details["n"], 5);
    }
}
