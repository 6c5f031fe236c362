//! Check Payment Use Case
//!
//! Polled by the checkout page. Reconciles the gateway's view of a
//! transaction with the stored order and, the first time payment is seen as
//! settled, provisions the server.
//!
//! The stored order is the idempotency key: once it has left
//! `AwaitingPayment` the gateway is no longer asked and the stored outcome
//! is returned.

use std::sync::Arc;

use audit::{AuditRepository, ErrorLogEntry, PaymentLogEntry, PaymentLogStatus};
use notify::{Channel, Notifier};
use serde_json::json;
use warranty::WarrantyRepository;

use crate::application::messages;
use crate::application::provision::ProvisionServerUseCase;
use crate::domain::order::{Fulfillment, FulfillmentStage, Order, PanelCredentials, Transition};
use crate::domain::payment_status::PaymentStatus;
use crate::domain::ports::{HostingPanel, PaymentGateway};
use crate::domain::repository::OrderRepository;
use crate::error::{ShopError, ShopResult};

/// What the checkout page is told
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentCheckOutcome {
    Pending,
    Failed,
    Succeeded(PanelCredentials),
    /// Paid, but no server could be created
    ProvisioningFailed,
}

impl PaymentCheckOutcome {
    /// Outcome for an order that no longer awaits payment
    fn from_settled(fulfillment: &Fulfillment) -> Option<Self> {
        match fulfillment {
            Fulfillment::AwaitingPayment => None,
            Fulfillment::Provisioning => Some(Self::Pending),
            Fulfillment::Fulfilled(credentials) => Some(Self::Succeeded(credentials.clone())),
            Fulfillment::ProvisioningFailed { .. } => Some(Self::ProvisioningFailed),
            Fulfillment::PaymentFailed => Some(Self::Failed),
        }
    }
}

pub struct CheckPaymentUseCase<O, G, P, W, A>
where
    O: OrderRepository,
    G: PaymentGateway,
    P: HostingPanel,
    W: WarrantyRepository,
    A: AuditRepository,
{
    orders: Arc<O>,
    gateway: Arc<G>,
    provision: Arc<ProvisionServerUseCase<P, W, A>>,
    audit: Arc<A>,
    notifier: Notifier,
}

impl<O, G, P, W, A> Clone for CheckPaymentUseCase<O, G, P, W, A>
where
    O: OrderRepository,
    G: PaymentGateway,
    P: HostingPanel,
    W: WarrantyRepository,
    A: AuditRepository,
{
    fn clone(&self) -> Self {
        Self {
            orders: self.orders.clone(),
            gateway: self.gateway.clone(),
            provision: self.provision.clone(),
            audit: self.audit.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<O, G, P, W, A> CheckPaymentUseCase<O, G, P, W, A>
where
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
    P: HostingPanel + Send + Sync + 'static,
    W: WarrantyRepository + Send + Sync + 'static,
    A: AuditRepository + Send + Sync + 'static,
{
    pub fn new(
        orders: Arc<O>,
        gateway: Arc<G>,
        provision: Arc<ProvisionServerUseCase<P, W, A>>,
        audit: Arc<A>,
        notifier: Notifier,
    ) -> Self {
        Self {
            orders,
            gateway,
            provision,
            audit,
            notifier,
        }
    }

    pub async fn execute(&self, order_id: Option<String>) -> ShopResult<PaymentCheckOutcome> {
        let order_id = order_id
            .filter(|id| !id.is_empty())
            .ok_or(ShopError::MissingOrderId)?;
        let order = self
            .orders
            .find_order(&order_id)
            .await
            .ok_or(ShopError::OrderNotFound)?;

        if let Some(outcome) = PaymentCheckOutcome::from_settled(&order.fulfillment) {
            return Ok(outcome);
        }

        let raw_status = self
            .gateway
            .transaction_status(&order.order_id, order.amount)
            .await?;

        match PaymentStatus::classify(&raw_status) {
            PaymentStatus::Pending => {
                self.audit
                    .record_payment(PaymentLogEntry::new(
                        &order.order_id,
                        order.amount,
                        PaymentLogStatus::Pending,
                        json!({}),
                    ))
                    .await;
                Ok(PaymentCheckOutcome::Pending)
            }
            PaymentStatus::Failed => {
                match self
                    .orders
                    .transition(
                        &order.order_id,
                        FulfillmentStage::AwaitingPayment,
                        Fulfillment::PaymentFailed,
                    )
                    .await
                {
                    Transition::Applied(order) => {
                        self.record_failed_payment(&order, &raw_status).await;
                        Ok(PaymentCheckOutcome::Failed)
                    }
                    Transition::Stale(order) => Ok(Self::outcome_of(&order)),
                    Transition::Missing => Err(ShopError::OrderNotFound),
                }
            }
            PaymentStatus::Success => {
                match self
                    .orders
                    .transition(
                        &order.order_id,
                        FulfillmentStage::AwaitingPayment,
                        Fulfillment::Provisioning,
                    )
                    .await
                {
                    Transition::Applied(order) => Ok(self.fulfil_detached(order).await),
                    Transition::Stale(order) => Ok(Self::outcome_of(&order)),
                    Transition::Missing => Err(ShopError::OrderNotFound),
                }
            }
        }
    }

    fn outcome_of(order: &Order) -> PaymentCheckOutcome {
        PaymentCheckOutcome::from_settled(&order.fulfillment).unwrap_or(PaymentCheckOutcome::Pending)
    }

    async fn record_failed_payment(&self, order: &Order, raw_status: &str) {
        self.audit
            .record_payment(PaymentLogEntry::new(
                &order.order_id,
                order.amount,
                PaymentLogStatus::Failed,
                json!({ "status": raw_status }),
            ))
            .await;
        self.notifier
            .send(Channel::Payments, messages::payment_failed(order, raw_status));
        tracing::info!(order_id = %order.order_id, status = %raw_status, "Payment failed");
    }

    /// Runs detached so a dropped request cannot strand the order in
    /// `Provisioning`.
    async fn fulfil_detached(&self, order: Order) -> PaymentCheckOutcome {
        let this = self.clone();
        let order_id = order.order_id.clone();
        match tokio::spawn(async move { this.fulfil(order).await }).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(order_id = %order_id, error = %e, "Provisioning task aborted");
                PaymentCheckOutcome::Pending
            }
        }
    }

    async fn fulfil(&self, order: Order) -> PaymentCheckOutcome {
        self.audit
            .record_payment(PaymentLogEntry::new(
                &order.order_id,
                order.amount,
                PaymentLogStatus::Success,
                json!({
                    "plan": order.plan_id,
                    "username": order.username,
                    "email": order.email,
                }),
            ))
            .await;

        match self.provision.execute(&order).await {
            Ok(credentials) => {
                self.settle(&order, Fulfillment::Fulfilled(credentials.clone()))
                    .await;
                self.notifier.send(
                    Channel::Payments,
                    messages::transaction_succeeded(&order, &credentials),
                );
                PaymentCheckOutcome::Succeeded(credentials)
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::error!(order_id = %order.order_id, error = %reason, "Provisioning failed after payment");

                self.audit
                    .record_error(ErrorLogEntry::new(
                        reason.clone(),
                        None,
                        json!({
                            "orderId": order.order_id,
                            "username": order.username,
                            "email": order.email,
                        }),
                    ))
                    .await;
                self.notifier.send(
                    Channel::Errors,
                    messages::provisioning_failed(&order, &reason),
                );
                self.settle(&order, Fulfillment::ProvisioningFailed { reason })
                    .await;
                PaymentCheckOutcome::ProvisioningFailed
            }
        }
    }

    async fn settle(&self, order: &Order, next: Fulfillment) {
        let result = self
            .orders
            .transition(&order.order_id, FulfillmentStage::Provisioning, next)
            .await;
        if !matches!(result, Transition::Applied(_)) {
            tracing::warn!(order_id = %order.order_id, "Order left Provisioning unexpectedly");
        }
    }
}
