//! Warranty Routers

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use audit::{AuditRepository, MemoryAuditRepository};
use notify::Notifier;

use crate::application::config::WarrantyConfig;
use crate::domain::repository::WarrantyRepository;
use crate::infra::memory::MemoryWarrantyRepository;
use crate::presentation::handlers::{self, WarrantyAdminState, WarrantyAppState};

/// Public claim/check routes backed by the in-memory stores
pub fn warranty_router(
    repo: MemoryWarrantyRepository,
    audit: MemoryAuditRepository,
    notifier: Notifier,
    config: Arc<WarrantyConfig>,
) -> Router {
    warranty_router_generic(repo, audit, notifier, config)
}

/// Public claim/check routes for any repository implementation
pub fn warranty_router_generic<R, A>(
    repo: R,
    audit: A,
    notifier: Notifier,
    config: Arc<WarrantyConfig>,
) -> Router
where
    R: WarrantyRepository + Clone + Send + Sync + 'static,
    A: AuditRepository + Clone + Send + Sync + 'static,
{
    let state = WarrantyAppState {
        repo: Arc::new(repo),
        audit: Arc::new(audit),
        notifier,
        config,
    };

    Router::new()
        .route("/claim", post(handlers::claim::<R, A>))
        .route("/check/{token}", get(handlers::check::<R, A>))
        .with_state(state)
}

/// Admin token view; the caller gates it behind the admin session
pub fn warranty_admin_router(repo: MemoryWarrantyRepository) -> Router {
    warranty_admin_router_generic(repo)
}

pub fn warranty_admin_router_generic<R>(repo: R) -> Router
where
    R: WarrantyRepository + Clone + Send + Sync + 'static,
{
    let state = WarrantyAdminState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/tokens", get(handlers::list_tokens::<R>))
        .with_state(state)
}
