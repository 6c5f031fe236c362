//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::LogQueries;
use crate::domain::repository::AuditRepository;
use crate::presentation::dto::{ErrorLogsResponse, PaymentLogsResponse, ServerLogsResponse};

/// Shared state for audit handlers
#[derive(Clone)]
pub struct AuditAppState<R>
where
    R: AuditRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/admin/logs/servers
pub async fn server_logs<R>(State(state): State<AuditAppState<R>>) -> Json<ServerLogsResponse>
where
    R: AuditRepository + Clone + Send + Sync + 'static,
{
    let view = LogQueries::new(state.repo.clone()).servers().await;
    Json(ServerLogsResponse {
        success: true,
        total_servers: view.total_servers,
        logs: view.logs,
    })
}

/// GET /api/admin/logs/payments
pub async fn payment_logs<R>(State(state): State<AuditAppState<R>>) -> Json<PaymentLogsResponse>
where
    R: AuditRepository + Clone + Send + Sync + 'static,
{
    let view = LogQueries::new(state.repo.clone()).payments().await;
    Json(PaymentLogsResponse {
        success: true,
        total: view.total,
        logs: view.logs,
    })
}

/// GET /api/admin/logs/errors
pub async fn error_logs<R>(State(state): State<AuditAppState<R>>) -> Json<ErrorLogsResponse>
where
    R: AuditRepository + Clone + Send + Sync + 'static,
{
    let view = LogQueries::new(state.repo.clone()).errors().await;
    Json(ErrorLogsResponse {
        success: true,
        total: view.total,
        logs: view.logs,
    })
}
