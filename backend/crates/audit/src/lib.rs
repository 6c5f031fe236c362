//! Audit log store
//!
//! Append-only, process-lifetime records of what the storefront did:
//! - server events keyed by server id (`SERVER_CREATED`, `WARRANTY_CLAIMED`)
//! - payment reconciliation outcomes
//! - server-side errors
//!
//! Admins read fixed-size tails through `presentation::router::audit_router`.

pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;

pub use domain::entities::{
    ErrorLogEntry, PaymentLogEntry, PaymentLogStatus, ServerAction, ServerLogEntry, ServerLogs,
};
pub use domain::repository::{AuditRepository, LocalAuditRepository};
pub use infra::memory::MemoryAuditRepository;
pub use presentation::router::{audit_router, audit_router_generic};
