//! In-memory audit repository

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::entities::{
    ErrorLogEntry, PaymentLogEntry, ServerAction, ServerLogEntry, ServerLogs,
};
use crate::domain::repository::AuditRepository;

#[derive(Debug, Default)]
struct AuditState {
    servers: Vec<ServerLogs>,
    server_index: HashMap<String, usize>,
    payments: Vec<PaymentLogEntry>,
    errors: Vec<ErrorLogEntry>,
}

/// Volatile audit log; cloning shares the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuditRepository {
    state: Arc<RwLock<AuditState>>,
}

impl MemoryAuditRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T: Clone>(entries: &[T], limit: usize) -> Vec<T> {
    entries.iter().rev().take(limit).cloned().collect()
}

impl AuditRepository for MemoryAuditRepository {
    async fn record_server(&self, server_id: &str, action: ServerAction, details: Value) {
        let entry = ServerLogEntry {
            timestamp: Utc::now(),
            action,
            details,
        };

        let mut state = self.state.write().await;
        match state.server_index.get(server_id).copied() {
            Some(i) => state.servers[i].logs.push(entry),
            None => {
                let i = state.servers.len();
                state.servers.push(ServerLogs {
                    server_id: server_id.to_string(),
                    logs: vec![entry],
                });
                state.server_index.insert(server_id.to_string(), i);
            }
        }
    }

    async fn record_payment(&self, entry: PaymentLogEntry) {
        self.state.write().await.payments.push(entry);
    }

    async fn record_error(&self, entry: ErrorLogEntry) {
        self.state.write().await.errors.push(entry);
    }

    async fn server_logs(&self, per_server: usize) -> Vec<ServerLogs> {
        let state = self.state.read().await;
        state
            .servers
            .iter()
            .map(|server| {
                let skip = server.logs.len().saturating_sub(per_server);
                ServerLogs {
                    server_id: server.server_id.clone(),
                    logs: server.logs[skip..].to_vec(),
                }
            })
            .collect()
    }

    async fn payment_logs(&self, limit: usize) -> (usize, Vec<PaymentLogEntry>) {
        let state = self.state.read().await;
        (state.payments.len(), newest_first(&state.payments, limit))
    }

    async fn error_logs(&self, limit: usize) -> (usize, Vec<ErrorLogEntry>) {
        let state = self.state.read().await;
        (state.errors.len(), newest_first(&state.errors, limit))
    }
}
