//! In-memory warranty repository

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::{ClaimOutcome, ClaimRejection, WarrantyToken};
use crate::domain::repository::WarrantyRepository;
use crate::domain::value_objects::ServerId;

#[derive(Debug, Default)]
struct Ledger {
    tokens: Vec<WarrantyToken>,
    index: HashMap<String, usize>,
}

/// Volatile ledger; cloning shares the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryWarrantyRepository {
    ledger: Arc<RwLock<Ledger>>,
}

impl MemoryWarrantyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WarrantyRepository for MemoryWarrantyRepository {
    async fn insert(&self, token: WarrantyToken) {
        let mut ledger = self.ledger.write().await;
        match ledger.index.get(&token.token).copied() {
            Some(i) => ledger.tokens[i] = token,
            None => {
                let i = ledger.tokens.len();
                ledger.index.insert(token.token.clone(), i);
                ledger.tokens.push(token);
            }
        }
    }

    async fn find(&self, token: &str) -> Option<WarrantyToken> {
        let ledger = self.ledger.read().await;
        ledger.index.get(token).map(|&i| ledger.tokens[i].clone())
    }

    async fn claim(&self, token: &str, server_id: &ServerId, now: DateTime<Utc>) -> ClaimOutcome {
        let mut ledger = self.ledger.write().await;

        let Some(i) = ledger.index.get(token).copied() else {
            return ClaimOutcome::Rejected {
                reason: ClaimRejection::NotFound,
                token: None,
            };
        };

        let record = &mut ledger.tokens[i];
        match record.check_claim(server_id, now) {
            Ok(()) => {
                record.mark_used(now);
                ClaimOutcome::Claimed(record.clone())
            }
            Err(reason) => ClaimOutcome::Rejected {
                reason,
                token: Some(record.clone()),
            },
        }
    }

    async fn list(&self) -> Vec<WarrantyToken> {
        self.ledger.read().await.tokens.clone()
    }
}
