//! Check Token Use Case
//!
//! Read-only status lookup; never mutates the ledger.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::WarrantyToken;
use crate::domain::repository::WarrantyRepository;
use crate::domain::value_objects::ServerId;

/// Token status at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStatus {
    pub valid: bool,
    pub used: bool,
    pub expired: bool,
    pub server_id: ServerId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub days_remaining: i64,
}

impl TokenStatus {
    pub fn of(token: WarrantyToken, now: DateTime<Utc>) -> Self {
        Self {
            valid: token.is_active_at(now),
            used: token.used,
            expired: token.is_expired_at(now),
            days_remaining: token.days_remaining(now),
            server_id: token.server_id,
            username: token.username,
            created_at: token.created_at,
            expires_at: token.expires_at,
            used_at: token.used_at,
        }
    }
}

pub struct CheckTokenUseCase<R>
where
    R: WarrantyRepository,
{
    repo: Arc<R>,
}

impl<R> CheckTokenUseCase<R>
where
    R: WarrantyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, token: &str) -> Option<TokenStatus> {
        self.execute_at(token, Utc::now()).await
    }

    pub async fn execute_at(&self, token: &str, now: DateTime<Utc>) -> Option<TokenStatus> {
        let record = self.repo.find(token).await?;
        Some(TokenStatus::of(record, now))
    }
}
