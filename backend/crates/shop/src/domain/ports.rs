//! Upstream service ports
//!
//! The payment gateway and the hosting panel are remote REST APIs. Use cases
//! only see these traits; `infra/` holds the HTTP clients.

use crate::domain::plan::ResourceSpec;
use crate::error::UpstreamResult;

/// A QRIS transaction ready to be paid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrisPayment {
    /// Gateway payment code, when the gateway hosts the QR image
    pub payment_code: Option<String>,
    /// Raw QRIS payload or payment number
    pub qris_string: Option<String>,
    /// Image URL to render
    pub qr_url: String,
}

/// QR payment gateway
#[trait_variant::make(PaymentGateway: Send)]
pub trait LocalPaymentGateway {
    /// Open a QRIS transaction for `amount` rupiah
    async fn create_qris(&self, order_id: &str, amount: u64) -> UpstreamResult<QrisPayment>;

    /// Raw status text of a transaction; empty when the gateway reports none
    async fn transaction_status(&self, order_id: &str, amount: u64) -> UpstreamResult<String>;
}

/// Panel user to create for a buyer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPanelAccount {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Panel user as created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAccount {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// Server instance to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPanelServer {
    pub name: String,
    pub description: String,
    pub owner_id: u64,
    pub limits: ResourceSpec,
}

/// Server instance as created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelServer {
    pub id: u64,
}

/// Hosting panel administration API
#[trait_variant::make(HostingPanel: Send)]
pub trait LocalHostingPanel {
    async fn create_account(&self, account: &NewPanelAccount) -> UpstreamResult<PanelAccount>;

    async fn create_server(&self, server: &NewPanelServer) -> UpstreamResult<PanelServer>;

    /// Replace the server description
    async fn annotate_server(&self, server_id: u64, description: &str) -> UpstreamResult<()>;
}
