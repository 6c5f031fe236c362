//! List Tokens Use Case (admin)

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::WarrantyToken;
use crate::domain::repository::WarrantyRepository;

/// Every token plus counts
#[derive(Debug, Clone)]
pub struct TokenSummary {
    pub total: usize,
    pub active: usize,
    pub used: usize,
    pub expired: usize,
    pub tokens: Vec<WarrantyToken>,
}

impl TokenSummary {
    /// `used` and `expired` overlap for tokens consumed before expiry ran out.
    pub fn of(tokens: Vec<WarrantyToken>, now: DateTime<Utc>) -> Self {
        Self {
            total: tokens.len(),
            active: tokens.iter().filter(|t| t.is_active_at(now)).count(),
            used: tokens.iter().filter(|t| t.used).count(),
            expired: tokens.iter().filter(|t| t.is_expired_at(now)).count(),
            tokens,
        }
    }
}

pub struct ListTokensUseCase<R>
where
    R: WarrantyRepository,
{
    repo: Arc<R>,
}

impl<R> ListTokensUseCase<R>
where
    R: WarrantyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> TokenSummary {
        TokenSummary::of(self.repo.list().await, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ServerId;
    use chrono::TimeDelta;

    #[test]
    fn test_counts() {
        let now = Utc::now();
        let fresh = WarrantyToken::issue("a".into(), ServerId::from(1), "u".into(), TimeDelta::days(30), now);
        let mut used = fresh.clone();
        used.token = "b".into();
        used.mark_used(now);
        let old = WarrantyToken::issue(
            "c".into(),
            ServerId::from(2),
            "u".into(),
            TimeDelta::days(30),
            now - TimeDelta::days(40),
        );

        let summary = TokenSummary::of(vec![fresh, used, old], now);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.used, 1);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.tokens[0].token, "a");
    }
}
