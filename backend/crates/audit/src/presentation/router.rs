//! Audit Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::AuditRepository;
use crate::infra::memory::MemoryAuditRepository;
use crate::presentation::handlers::{self, AuditAppState};

/// Admin log routes backed by the in-memory store
pub fn audit_router(repo: MemoryAuditRepository) -> Router {
    audit_router_generic(repo)
}

/// Admin log routes for any repository implementation
pub fn audit_router_generic<R>(repo: R) -> Router
where
    R: AuditRepository + Clone + Send + Sync + 'static,
{
    let state = AuditAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/servers", get(handlers::server_logs::<R>))
        .route("/payments", get(handlers::payment_logs::<R>))
        .route("/errors", get(handlers::error_logs::<R>))
        .with_state(state)
}
