//! Repository Traits

use chrono::{DateTime, Utc};

use crate::domain::entities::{ClaimOutcome, WarrantyToken};
use crate::domain::value_objects::ServerId;

/// Warranty token repository
#[trait_variant::make(WarrantyRepository: Send)]
pub trait LocalWarrantyRepository {
    async fn insert(&self, token: WarrantyToken);

    async fn find(&self, token: &str) -> Option<WarrantyToken>;

    /// Look up, check and mark the token used as one atomic step.
    ///
    /// Two concurrent claims of the same token yield exactly one `Claimed`.
    async fn claim(&self, token: &str, server_id: &ServerId, now: DateTime<Utc>) -> ClaimOutcome;

    /// All tokens in issuance order
    async fn list(&self) -> Vec<WarrantyToken>;
}
