//! HTTP Handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::HeaderMap;
use axum::Extension;

use audit::{AuditRepository, MemoryAuditRepository};
use captcha::{HumanVerifier, TurnstileClient};
use kernel::extract::ApiJson;
use kernel::principal::AdminPrincipal;
use notify::Notifier;
use platform::client::extract_client_ip;
use warranty::{IssueTokenUseCase, MemoryWarrantyRepository, WarrantyConfig, WarrantyRepository};

use crate::application::config::ShopConfig;
use crate::application::{
    CheckPaymentUseCase, CreatePaymentInput, CreatePaymentUseCase, CreateProductUseCase,
    DeleteProductUseCase, ListPlansUseCase, ProductStatsUseCase, ProvisionServerUseCase,
    UpdateProductUseCase,
};
use crate::domain::ports::{HostingPanel, PaymentGateway};
use crate::domain::repository::{CatalogRepository, OrderRepository};
use crate::error::ShopResult;
use crate::infra::memory::MemoryShopRepository;
use crate::infra::pakasir::PakasirClient;
use crate::infra::pterodactyl::PterodactylClient;
use crate::presentation::dto::{
    CheckPaymentRequest, CheckPaymentResponse, CreatePaymentRequest, CreatePaymentResponse,
    PlanBody, PlansResponse, ProductBody, ProductRequest, ProductResponse, ProductsResponse,
    StatsResponse,
};

/// The set of collaborators the storefront runs against
pub trait ShopBackend: Clone + Send + Sync + 'static {
    type Repo: CatalogRepository + OrderRepository + Send + Sync + 'static;
    type Gateway: PaymentGateway + Send + Sync + 'static;
    type Panel: HostingPanel + Send + Sync + 'static;
    type Verifier: HumanVerifier + Send + Sync + 'static;
    type Warranty: WarrantyRepository + Send + Sync + 'static;
    type Audit: AuditRepository + Send + Sync + 'static;
}

/// Production wiring: in-memory stores, Pakasir, Pterodactyl and Turnstile
#[derive(Debug, Clone, Copy)]
pub struct LiveShop;

impl ShopBackend for LiveShop {
    type Repo = MemoryShopRepository;
    type Gateway = PakasirClient;
    type Panel = PterodactylClient;
    type Verifier = TurnstileClient;
    type Warranty = MemoryWarrantyRepository;
    type Audit = MemoryAuditRepository;
}

/// Shared state for the storefront and admin product handlers
pub struct ShopAppState<B: ShopBackend> {
    pub repo: Arc<B::Repo>,
    pub gateway: Arc<B::Gateway>,
    pub panel: Arc<B::Panel>,
    pub verifier: Arc<B::Verifier>,
    pub warranty: Arc<B::Warranty>,
    pub audit: Arc<B::Audit>,
    pub notifier: Notifier,
    pub config: Arc<ShopConfig>,
    pub warranty_config: Arc<WarrantyConfig>,
}

impl<B: ShopBackend> Clone for ShopAppState<B> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            gateway: self.gateway.clone(),
            panel: self.panel.clone(),
            verifier: self.verifier.clone(),
            warranty: self.warranty.clone(),
            audit: self.audit.clone(),
            notifier: self.notifier.clone(),
            config: self.config.clone(),
            warranty_config: self.warranty_config.clone(),
        }
    }
}

impl<B: ShopBackend> ShopAppState<B> {
    fn check_payment_use_case(
        &self,
    ) -> CheckPaymentUseCase<B::Repo, B::Gateway, B::Panel, B::Warranty, B::Audit> {
        let issue = IssueTokenUseCase::new(
            self.warranty.clone(),
            self.notifier.clone(),
            self.warranty_config.clone(),
        );
        let provision = ProvisionServerUseCase::new(
            self.panel.clone(),
            issue,
            self.audit.clone(),
            self.config.clone(),
        );
        CheckPaymentUseCase::new(
            self.repo.clone(),
            self.gateway.clone(),
            Arc::new(provision),
            self.audit.clone(),
            self.notifier.clone(),
        )
    }
}

// ============================================================================
// Storefront
// ============================================================================

/// GET /api/plans
pub async fn list_plans<B: ShopBackend>(State(state): State<ShopAppState<B>>) -> Json<PlansResponse> {
    let plans = ListPlansUseCase::new(state.repo.clone()).execute().await;
    Json(PlansResponse {
        success: true,
        plans: plans.into_iter().map(PlanBody::from).collect(),
    })
}

/// POST /api/payment/create
pub async fn create_payment<B: ShopBackend>(
    State(state): State<ShopAppState<B>>,
    connect_info: Option<Extension<ConnectInfo<SocketAddr>>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<CreatePaymentRequest>,
) -> ShopResult<Json<CreatePaymentResponse>> {
    let peer = connect_info.map(|Extension(ConnectInfo(addr))| addr.ip());
    let use_case = CreatePaymentUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.gateway.clone(),
        state.verifier.clone(),
    );

    let output = use_case
        .execute(CreatePaymentInput {
            plan: req.plan,
            username: req.username,
            email: req.email,
            captcha_response: req.recaptcha_response,
            remote_ip: extract_client_ip(&headers, peer),
        })
        .await?;

    Ok(Json(output.into()))
}

/// POST /api/payment/check
pub async fn check_payment<B: ShopBackend>(
    State(state): State<ShopAppState<B>>,
    ApiJson(req): ApiJson<CheckPaymentRequest>,
) -> ShopResult<Json<CheckPaymentResponse>> {
    let outcome = state.check_payment_use_case().execute(req.order_id).await?;
    Ok(Json(outcome.into()))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/admin/products
pub async fn list_products<B: ShopBackend>(
    State(state): State<ShopAppState<B>>,
) -> Json<ProductsResponse> {
    let plans = ListPlansUseCase::new(state.repo.clone()).execute().await;
    Json(ProductsResponse {
        success: true,
        products: plans.into_iter().map(PlanBody::from).collect(),
    })
}

/// POST /api/admin/products
pub async fn create_product<B: ShopBackend>(
    State(state): State<ShopAppState<B>>,
    Extension(admin): Extension<AdminPrincipal>,
    ApiJson(req): ApiJson<ProductRequest>,
) -> ShopResult<Json<ProductResponse>> {
    let (id, input) = req.into_parts();
    let plan = CreateProductUseCase::new(state.repo.clone(), state.notifier.clone())
        .execute(id, input, &admin)
        .await?;

    Ok(Json(ProductResponse {
        success: true,
        message: "Product berhasil ditambahkan",
        product: Some(ProductBody::from(plan)),
    }))
}

/// PUT /api/admin/products/{id}
pub async fn update_product<B: ShopBackend>(
    State(state): State<ShopAppState<B>>,
    Extension(admin): Extension<AdminPrincipal>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ProductRequest>,
) -> ShopResult<Json<ProductResponse>> {
    let (_, input) = req.into_parts();
    let plan = UpdateProductUseCase::new(state.repo.clone(), state.notifier.clone())
        .execute(&id, input, &admin)
        .await?;

    Ok(Json(ProductResponse {
        success: true,
        message: "Product berhasil diupdate",
        product: Some(ProductBody::from(plan)),
    }))
}

/// DELETE /api/admin/products/{id}
pub async fn delete_product<B: ShopBackend>(
    State(state): State<ShopAppState<B>>,
    Extension(admin): Extension<AdminPrincipal>,
    Path(id): Path<String>,
) -> ShopResult<Json<ProductResponse>> {
    DeleteProductUseCase::new(state.repo.clone(), state.notifier.clone())
        .execute(&id, &admin)
        .await?;

    Ok(Json(ProductResponse {
        success: true,
        message: "Product berhasil dihapus",
        product: None,
    }))
}

/// GET /api/admin/stats
pub async fn stats<B: ShopBackend>(State(state): State<ShopAppState<B>>) -> Json<StatsResponse> {
    let stats = ProductStatsUseCase::new(state.repo.clone()).execute().await;
    Json(StatsResponse {
        success: true,
        stats: stats.into(),
    })
}
