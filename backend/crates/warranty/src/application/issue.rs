//! Issue Token Use Case
//!
//! Mints the warranty token handed out with every freshly provisioned server.

use std::sync::Arc;

use chrono::Utc;
use notify::{Channel, Notifier};
use platform::crypto::random_hex;

use crate::application::config::WarrantyConfig;
use crate::application::messages;
use crate::domain::entities::WarrantyToken;
use crate::domain::repository::WarrantyRepository;
use crate::domain::value_objects::ServerId;

pub struct IssueTokenUseCase<R>
where
    R: WarrantyRepository,
{
    repo: Arc<R>,
    notifier: Notifier,
    config: Arc<WarrantyConfig>,
}

impl<R> IssueTokenUseCase<R>
where
    R: WarrantyRepository,
{
    pub fn new(repo: Arc<R>, notifier: Notifier, config: Arc<WarrantyConfig>) -> Self {
        Self {
            repo,
            notifier,
            config,
        }
    }

    /// Returns the new token, or `None` while the feature is switched off.
    pub async fn execute(&self, server_id: ServerId, username: &str) -> Option<String> {
        if !self.config.enabled {
            tracing::debug!(server_id = %server_id, "Warranty disabled, no token issued");
            return None;
        }

        let record = WarrantyToken::issue(
            random_hex(self.config.token_bytes),
            server_id,
            username.to_string(),
            self.config.validity_delta(),
            Utc::now(),
        );
        let token = record.token.clone();

        self.notifier.send(Channel::Servers, messages::issued(&record));
        tracing::info!(
            server_id = %record.server_id,
            username = %record.username,
            expires_at = %record.expires_at,
            "Warranty token issued"
        );
        self.repo.insert(record).await;

        Some(token)
    }
}
