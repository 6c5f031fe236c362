//! Claim Token Use Case
//!
//! Consumes a warranty token for the server it was issued with.

use std::sync::Arc;

use audit::{AuditRepository, ServerAction};
use chrono::{DateTime, Utc};
use notify::{Channel, Notifier};
use serde_json::json;

use crate::application::config::WarrantyConfig;
use crate::application::messages;
use crate::domain::entities::ClaimOutcome;
use crate::domain::repository::WarrantyRepository;
use crate::domain::value_objects::ServerId;
use crate::error::{WarrantyError, WarrantyResult};

/// Claim input; both fields are required
pub struct ClaimTokenInput {
    pub server_id: Option<ServerId>,
    pub token: Option<String>,
}

/// Claim output
#[derive(Debug)]
pub struct ClaimTokenOutput {
    pub server_id: ServerId,
    pub username: String,
}

pub struct ClaimTokenUseCase<R, A>
where
    R: WarrantyRepository,
    A: AuditRepository,
{
    repo: Arc<R>,
    audit: Arc<A>,
    notifier: Notifier,
    config: Arc<WarrantyConfig>,
}

impl<R, A> ClaimTokenUseCase<R, A>
where
    R: WarrantyRepository,
    A: AuditRepository,
{
    pub fn new(repo: Arc<R>, audit: Arc<A>, notifier: Notifier, config: Arc<WarrantyConfig>) -> Self {
        Self {
            repo,
            audit,
            notifier,
            config,
        }
    }

    pub async fn execute(&self, input: ClaimTokenInput) -> WarrantyResult<ClaimTokenOutput> {
        self.execute_at(input, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        input: ClaimTokenInput,
        now: DateTime<Utc>,
    ) -> WarrantyResult<ClaimTokenOutput> {
        let token = input.token.filter(|t| !t.is_empty());
        let (Some(server_id), Some(token)) = (input.server_id, token) else {
            return Err(WarrantyError::MissingFields);
        };

        if !self.config.enabled {
            return Err(WarrantyError::Disabled);
        }

        match self.repo.claim(&token, &server_id, now).await {
            ClaimOutcome::Claimed(record) => {
                self.notifier
                    .send(Channel::Servers, messages::claimed(&record, now));
                self.audit
                    .record_server(
                        server_id.as_str(),
                        ServerAction::WarrantyClaimed,
                        json!({ "token": record.token, "username": record.username }),
                    )
                    .await;
                tracing::info!(server_id = %server_id, username = %record.username, "Warranty claimed");

                Ok(ClaimTokenOutput {
                    server_id,
                    username: record.username,
                })
            }
            ClaimOutcome::Rejected { reason, token: record } => {
                self.notifier.send(
                    Channel::Errors,
                    messages::rejected(reason, &token, &server_id, record.as_ref()),
                );
                Err(WarrantyError::Rejected(reason))
            }
        }
    }
}
