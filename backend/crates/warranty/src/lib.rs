//! Warranty token ledger
//!
//! Clean Architecture structure:
//! - `domain/` - token entity, claim rules, repository trait
//! - `application/` - issue, claim, check and list use cases
//! - `infra/` - in-memory repository
//! - `presentation/` - public claim/check routes and the admin token view
//!
//! ## Token lifecycle
//! - Issued once per provisioned server: 32 random bytes, hex encoded
//! - Valid for a fixed window (30 days by default) from issuance
//! - Consumed at most once; claim checks run existence, used, expiry, then
//!   server match, and the check-and-mark happens atomically in the repository

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::WarrantyConfig;
pub use application::issue::IssueTokenUseCase;
pub use domain::entities::{ClaimOutcome, ClaimRejection, WarrantyToken};
pub use domain::repository::{LocalWarrantyRepository, WarrantyRepository};
pub use domain::value_objects::ServerId;
pub use error::{WarrantyError, WarrantyResult};
pub use infra::memory::MemoryWarrantyRepository;
pub use presentation::router::{
    warranty_admin_router, warranty_admin_router_generic, warranty_router, warranty_router_generic,
};

#[cfg(test)]
mod tests;
