//! Storefront: catalog, orders and fulfilment
//!
//! Clean Architecture structure:
//! - `domain/` - plans, orders, payment status classification, value objects,
//!   repository and upstream port traits
//! - `application/` - plan listing, payment creation, payment reconciliation
//!   with provisioning, admin product management and stats
//! - `infra/` - in-memory catalog/order store, Pakasir QRIS gateway client,
//!   Pterodactyl application API client
//! - `presentation/` - public checkout routes and admin product routes
//!
//! ## Order lifecycle
//! `AwaitingPayment` → `Provisioning` → `Fulfilled` | `ProvisioningFailed`,
//! or `AwaitingPayment` → `PaymentFailed`. Leaving `AwaitingPayment` is a
//! compare-and-swap in the order store, so a paid order is provisioned at
//! most once no matter how often or how concurrently it is polled.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::ShopConfig;
pub use domain::order::{Fulfillment, Order, PanelCredentials};
pub use domain::payment_status::PaymentStatus;
pub use domain::plan::{Plan, ResourceSpec, default_catalog};
pub use domain::ports::{HostingPanel, LocalHostingPanel, LocalPaymentGateway, PaymentGateway};
pub use domain::repository::{
    CatalogRepository, LocalCatalogRepository, LocalOrderRepository, OrderRepository,
};
pub use error::{ShopError, ShopResult, UpstreamError, UpstreamResult};
pub use infra::memory::MemoryShopRepository;
pub use infra::pakasir::{PakasirClient, PakasirConfig};
pub use infra::pterodactyl::{PanelConfig, PterodactylClient};
pub use presentation::handlers::{LiveShop, ShopAppState, ShopBackend};
pub use presentation::router::{shop_admin_router, shop_router};

#[cfg(test)]
pub(crate) mod testing;
