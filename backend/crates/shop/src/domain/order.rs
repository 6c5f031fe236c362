//! Order and fulfilment state

use chrono::{DateTime, Utc};
use serde::Serialize;
use warranty::ServerId;

use crate::domain::plan::{Plan, ResourceSpec};

/// Order ids look like `ZP-1A2B3C`
pub const ORDER_ID_PREFIX: &str = "ZP-";

/// What the buyer receives once the server exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelCredentials {
    pub server_id: ServerId,
    pub username: String,
    pub password: String,
    pub email: String,
    /// Panel URL to log in at
    pub domain: String,
    /// `None` while warranty issuance is switched off
    pub warranty_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fulfillment {
    AwaitingPayment,
    /// Payment settled; one request is creating the server
    Provisioning,
    Fulfilled(PanelCredentials),
    /// Paid, but the panel refused; needs an admin
    ProvisioningFailed { reason: String },
    PaymentFailed,
}

/// Discriminant of [`Fulfillment`] for compare-and-swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FulfillmentStage {
    AwaitingPayment,
    Provisioning,
    Fulfilled,
    ProvisioningFailed,
    PaymentFailed,
}

impl Fulfillment {
    pub fn stage(&self) -> FulfillmentStage {
        match self {
            Fulfillment::AwaitingPayment => FulfillmentStage::AwaitingPayment,
            Fulfillment::Provisioning => FulfillmentStage::Provisioning,
            Fulfillment::Fulfilled(_) => FulfillmentStage::Fulfilled,
            Fulfillment::ProvisioningFailed { .. } => FulfillmentStage::ProvisioningFailed,
            Fulfillment::PaymentFailed => FulfillmentStage::PaymentFailed,
        }
    }

    /// No further transitions happen from here
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            Fulfillment::Fulfilled(_)
                | Fulfillment::ProvisioningFailed { .. }
                | Fulfillment::PaymentFailed
        )
    }
}

/// A checkout. Plan, price, resources and buyer are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: String,
    pub plan_id: String,
    pub amount: u64,
    /// Resources as priced when the order was placed
    pub specs: ResourceSpec,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub fulfillment: Fulfillment,
}

impl Order {
    pub fn new(
        order_id: String,
        plan: &Plan,
        username: String,
        email: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id,
            plan_id: plan.id.clone(),
            amount: plan.price,
            specs: plan.specs,
            username,
            email,
            created_at: now,
            fulfillment: Fulfillment::AwaitingPayment,
        }
    }
}

/// Result of a compare-and-swap on an order's fulfilment state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State matched and was replaced; carries the updated order
    Applied(Order),
    /// State did not match; carries the order as found
    Stale(Order),
    Missing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_snapshots_plan() {
        let plan = Plan::new("2gb", 2000, ResourceSpec::UNLIMITED);
        let order = Order::new("ZP-ABCDEF".into(), &plan, "alice".into(), "a@b.co".into(), Utc::now());
        assert_eq!(order.plan_id, "2gb");
        assert_eq!(order.amount, 2000);
        assert_eq!(order.fulfillment.stage(), FulfillmentStage::AwaitingPayment);
        assert!(!order.fulfillment.is_settled());
    }

    #[test]
    fn test_settled_states() {
        assert!(Fulfillment::PaymentFailed.is_settled());
        assert!(
            Fulfillment::ProvisioningFailed {
                reason: "x".into()
            }
            .is_settled()
        );
        assert!(!Fulfillment::Provisioning.is_settled());
    }
}
