//! Create Payment Use Case
//!
//! Verifies the buyer is human, validates the checkout form, stores the
//! order and opens a QRIS transaction for it.

use std::net::IpAddr;
use std::sync::Arc;

use captcha::HumanVerifier;
use chrono::Utc;
use platform::crypto::random_hex;

use crate::domain::order::{ORDER_ID_PREFIX, Order};
use crate::domain::ports::PaymentGateway;
use crate::domain::repository::{CatalogRepository, OrderRepository};
use crate::domain::value_object::{CustomerEmail, CustomerName};
use crate::error::{ShopError, ShopResult, UpstreamError};

/// Checkout form
#[derive(Debug, Clone, Default)]
pub struct CreatePaymentInput {
    pub plan: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    /// Turnstile response token
    pub captcha_response: Option<String>,
    pub remote_ip: Option<IpAddr>,
}

/// Payment instructions for the buyer
#[derive(Debug, Clone)]
pub struct CreatePaymentOutput {
    pub order_id: String,
    pub amount: u64,
    pub qr_url: String,
    pub payment_code: Option<String>,
    pub qris_string: Option<String>,
    pub plan: String,
    pub username: String,
    pub email: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn generate_order_id() -> String {
    format!("{ORDER_ID_PREFIX}{}", random_hex(3).to_uppercase())
}

pub struct CreatePaymentUseCase<C, O, G, V>
where
    C: CatalogRepository,
    O: OrderRepository,
    G: PaymentGateway,
    V: HumanVerifier,
{
    catalog: Arc<C>,
    orders: Arc<O>,
    gateway: Arc<G>,
    verifier: Arc<V>,
}

impl<C, O, G, V> CreatePaymentUseCase<C, O, G, V>
where
    C: CatalogRepository,
    O: OrderRepository,
    G: PaymentGateway,
    V: HumanVerifier,
{
    pub fn new(catalog: Arc<C>, orders: Arc<O>, gateway: Arc<G>, verifier: Arc<V>) -> Self {
        Self {
            catalog,
            orders,
            gateway,
            verifier,
        }
    }

    pub async fn execute(&self, input: CreatePaymentInput) -> ShopResult<CreatePaymentOutput> {
        let captcha = non_empty(input.captcha_response).ok_or(ShopError::MissingCaptcha)?;
        if !self.verifier.verify(&captcha, input.remote_ip).await? {
            return Err(ShopError::CaptchaRejected);
        }

        let (Some(plan_id), Some(username), Some(email)) = (
            non_empty(input.plan),
            non_empty(input.username),
            non_empty(input.email),
        ) else {
            return Err(ShopError::MissingOrderFields);
        };

        let username = CustomerName::new(&username)?;
        let email = CustomerEmail::new(&email)?;

        // Free plans cannot go through the gateway
        let plan = self
            .catalog
            .find_plan(&plan_id)
            .await
            .filter(|p| p.price > 0)
            .ok_or(ShopError::InvalidPlan)?;

        let order = loop {
            let order = Order::new(
                generate_order_id(),
                &plan,
                username.as_str().to_string(),
                email.as_str().to_string(),
                Utc::now(),
            );
            if self.orders.insert_order(order.clone()).await {
                break order;
            }
        };

        let payment = self
            .gateway
            .create_qris(&order.order_id, order.amount)
            .await
            .map_err(|e| match e {
                UpstreamError::Rejected(_) => ShopError::TransactionRejected(e),
                UpstreamError::Malformed(_) => ShopError::InvalidQrisResponse,
                other => ShopError::Upstream(other),
            })?;

        tracing::info!(
            order_id = %order.order_id,
            username = %order.username,
            plan = %order.plan_id,
            amount = order.amount,
            "Order created"
        );

        Ok(CreatePaymentOutput {
            order_id: order.order_id,
            amount: order.amount,
            qr_url: payment.qr_url,
            payment_code: payment.payment_code,
            qris_string: payment.qris_string,
            plan: order.plan_id,
            username: order.username,
            email: order.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Fulfillment;
    use crate::infra::memory::MemoryShopRepository;
    use crate::testing::{FakeGateway, FakeVerifier};

    fn build(
        verifier: bool,
        gateway: FakeGateway,
    ) -> (
        CreatePaymentUseCase<MemoryShopRepository, MemoryShopRepository, FakeGateway, FakeVerifier>,
        Arc<MemoryShopRepository>,
    ) {
        let repo = Arc::new(MemoryShopRepository::new());
        let use_case = CreatePaymentUseCase::new(
            repo.clone(),
            repo.clone(),
            Arc::new(gateway),
            Arc::new(FakeVerifier(verifier)),
        );
        (use_case, repo)
    }

    fn input() -> CreatePaymentInput {
        CreatePaymentInput {
            plan: Some("3gb".into()),
            username: Some("alice".into()),
            email: Some("alice@mail.com".into()),
            captcha_response: Some("token".into()),
            remote_ip: None,
        }
    }

    #[tokio::test]
    async fn test_creates_order_and_transaction() {
        let (use_case, repo) = build(true, FakeGateway::with_status("PENDING"));
        let out = use_case.execute(input()).await.unwrap();

        assert!(out.order_id.starts_with("ZP-"));
        assert_eq!(out.order_id.len(), 9);
        assert!(out.order_id[3..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        assert_eq!(out.amount, 3000);
        assert_eq!(out.qr_url, format!("https://qr.test/{}.png", out.order_id));

        let order = repo.find_order(&out.order_id).await.unwrap();
        assert_eq!(order.fulfillment, Fulfillment::AwaitingPayment);
        assert_eq!(order.username, "alice");
        assert_eq!(order.specs.ram, 3000);
    }

    #[tokio::test]
    async fn test_captcha_checked_first() {
        let (use_case, _) = build(true, FakeGateway::with_status(""));
        let err = use_case
            .execute(CreatePaymentInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::MissingCaptcha));

        let (use_case, _) = build(false, FakeGateway::with_status(""));
        let err = use_case.execute(input()).await.unwrap_err();
        assert!(matches!(err, ShopError::CaptchaRejected));
    }

    #[tokio::test]
    async fn test_form_validation() {
        let (use_case, _) = build(true, FakeGateway::with_status(""));

        let mut missing = input();
        missing.email = Some(String::new());
        assert!(matches!(
            use_case.execute(missing).await.unwrap_err(),
            ShopError::MissingOrderFields
        ));

        let mut bad_name = input();
        bad_name.username = Some("Alice".into());
        assert!(matches!(
            use_case.execute(bad_name).await.unwrap_err(),
            ShopError::InvalidUsername
        ));

        let mut bad_email = input();
        bad_email.email = Some("alice@localhost".into());
        assert!(matches!(
            use_case.execute(bad_email).await.unwrap_err(),
            ShopError::InvalidEmail
        ));

        let mut bad_plan = input();
        bad_plan.plan = Some("99gb".into());
        assert!(matches!(
            use_case.execute(bad_plan).await.unwrap_err(),
            ShopError::InvalidPlan
        ));
    }

    #[tokio::test]
    async fn test_gateway_rejection() {
        let mut gateway = FakeGateway::with_status("");
        gateway.reject_create = Some("invalid api key".into());
        let (use_case, _) = build(true, gateway);

        let err = use_case.execute(input()).await.unwrap_err();
        assert!(matches!(err, ShopError::TransactionRejected(_)));
    }
}
