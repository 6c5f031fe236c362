//! Provision Server Use Case
//!
//! Creates the panel account and server for a paid order, issues its
//! warranty token and records `SERVER_CREATED`.

use std::sync::Arc;

use audit::{AuditRepository, ServerAction};
use chrono::Utc;
use platform::crypto::random_hex;
use platform::text::format_wib_datetime;
use serde_json::json;
use warranty::{IssueTokenUseCase, ServerId, WarrantyRepository};

use crate::application::config::ShopConfig;
use crate::domain::order::{Order, PanelCredentials};
use crate::domain::ports::{HostingPanel, NewPanelAccount, NewPanelServer};
use crate::error::UpstreamResult;

pub struct ProvisionServerUseCase<P, W, A>
where
    P: HostingPanel,
    W: WarrantyRepository,
    A: AuditRepository,
{
    panel: Arc<P>,
    issue: IssueTokenUseCase<W>,
    audit: Arc<A>,
    config: Arc<ShopConfig>,
}

impl<P, W, A> ProvisionServerUseCase<P, W, A>
where
    P: HostingPanel,
    W: WarrantyRepository,
    A: AuditRepository,
{
    pub fn new(
        panel: Arc<P>,
        issue: IssueTokenUseCase<W>,
        audit: Arc<A>,
        config: Arc<ShopConfig>,
    ) -> Self {
        Self {
            panel,
            issue,
            audit,
            config,
        }
    }

    fn account_for(&self, username: &str) -> NewPanelAccount {
        NewPanelAccount {
            username: username.to_string(),
            email: format!("{username}@{}", self.config.account_email_domain),
            first_name: username.to_string(),
            last_name: "Server".to_string(),
            password: format!("{username}{}", random_hex(4)),
        }
    }

    pub async fn execute(&self, order: &Order) -> UpstreamResult<PanelCredentials> {
        let account = self.account_for(&order.username);
        let created = self.panel.create_account(&account).await?;

        let description = format!("Created at {}", format_wib_datetime(Utc::now()));
        let server = self
            .panel
            .create_server(&NewPanelServer {
                name: format!("{} Server", order.username),
                description: description.clone(),
                owner_id: created.id,
                limits: order.specs,
            })
            .await?;
        let server_id = ServerId::from(server.id);

        let token = self.issue.execute(server_id.clone(), &order.username).await;

        if let Some(token) = &token {
            let annotated = format!("{description}\nWarranty Token: {token}");
            if let Err(e) = self.panel.annotate_server(server.id, &annotated).await {
                tracing::warn!(server_id = server.id, error = %e, "Failed to write warranty token to server description");
            }
        }

        self.audit
            .record_server(
                server_id.as_str(),
                ServerAction::ServerCreated,
                json!({
                    "userId": created.id,
                    "username": order.username,
                    "plan": order.plan_id,
                    "warrantyToken": token,
                }),
            )
            .await;

        tracing::info!(
            order_id = %order.order_id,
            server_id = %server_id,
            username = %order.username,
            "Server provisioned"
        );

        Ok(PanelCredentials {
            server_id,
            username: created.username,
            password: account.password,
            email: created.email,
            domain: self.config.panel_domain.clone(),
            warranty_token: token,
        })
    }
}
