//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{CreatePaymentOutput, PaymentCheckOutcome, ProductInput, ProductStats};
use crate::domain::order::PanelCredentials;
use crate::domain::plan::{Plan, ResourceSpec};

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PlanBody {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub specs: ResourceSpec,
}

impl From<Plan> for PlanBody {
    fn from(plan: Plan) -> Self {
        Self {
            name: plan.display_name(),
            id: plan.id,
            price: plan.price,
            specs: plan.specs,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlansResponse {
    pub success: bool,
    pub plans: Vec<PlanBody>,
}

// ============================================================================
// Create Payment
// ============================================================================

/// Checkout form; the Turnstile token keeps its historical field name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub recaptcha_response: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    pub success: bool,
    pub order_id: String,
    pub amount: u64,
    pub qris_url: String,
    pub payment_code: Option<String>,
    pub qris_string: Option<String>,
    pub plan: String,
    pub username: String,
    pub email: String,
}

impl From<CreatePaymentOutput> for CreatePaymentResponse {
    fn from(out: CreatePaymentOutput) -> Self {
        Self {
            success: true,
            order_id: out.order_id,
            amount: out.amount,
            qris_url: out.qr_url,
            payment_code: out.payment_code,
            qris_string: out.qris_string,
            plan: out.plan,
            username: out.username,
            email: out.email,
        }
    }
}

// ============================================================================
// Check Payment
// ============================================================================

/// Only `orderId` is read; plan, amount and buyer come from the stored order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPaymentRequest {
    #[serde(default)]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckPaymentResponse {
    pub success: bool,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<PaymentCheckOutcome> for CheckPaymentResponse {
    fn from(outcome: PaymentCheckOutcome) -> Self {
        let (success, status, panel, message) = match outcome {
            PaymentCheckOutcome::Pending => (true, "pending", None, None),
            PaymentCheckOutcome::Failed => (true, "failed", None, None),
            PaymentCheckOutcome::Succeeded(credentials) => (true, "success", Some(credentials), None),
            PaymentCheckOutcome::ProvisioningFailed => (
                false,
                "payment_success_panel_failed",
                None,
                Some("Pembayaran berhasil tapi gagal membuat panel. Hubungi admin."),
            ),
        };
        Self {
            success,
            status,
            panel,
            message,
        }
    }
}

// ============================================================================
// Admin Products
// ============================================================================

/// Product form; numeric fields may arrive as numbers or numeric strings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub ram: Option<Value>,
    #[serde(default)]
    pub disk: Option<Value>,
    #[serde(default)]
    pub cpu: Option<Value>,
}

impl ProductRequest {
    pub fn into_parts(self) -> (Option<String>, ProductInput) {
        (
            self.id,
            ProductInput {
                price: self.price,
                ram: self.ram,
                disk: self.disk,
                cpu: self.cpu,
            },
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductBody {
    pub id: String,
    pub price: u64,
    pub specs: ResourceSpec,
}

impl From<Plan> for ProductBody {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id,
            price: plan.price,
            specs: plan.specs,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductBody>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub products: Vec<PlanBody>,
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBody {
    pub total_products: usize,
    pub total_revenue: u64,
    pub avg_price: u64,
    pub cheapest_product: u64,
    pub most_expensive: u64,
}

impl From<ProductStats> for StatsBody {
    fn from(stats: ProductStats) -> Self {
        Self {
            total_products: stats.total_products,
            total_revenue: stats.total_revenue,
            avg_price: stats.avg_price,
            cheapest_product: stats.cheapest_product,
            most_expensive: stats.most_expensive,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: StatsBody,
}
