//! Router assembly
//!
//! `/api` carries the storefront, warranty, admin and health routes; every
//! other path is served from the public directory.

use std::sync::Arc;

use audit::{MemoryAuditRepository, audit_router};
use auth::{auth_router_generic, require_admin_session};
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::{Router, middleware};
use captcha::TurnstileClient;
use notify::Notifier;
use shop::{
    LiveShop, MemoryShopRepository, PakasirClient, PterodactylClient, ShopAppState,
    shop_admin_router, shop_router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use warranty::{MemoryWarrantyRepository, warranty_admin_router, warranty_router};

use crate::config::AppConfig;
use crate::health::{Features, health_router};
use crate::middleware::{
    ErrorSink, RateLimiter, panic_response, rate_limit, report_server_errors,
};

/// Long-lived stores and upstream clients shared by all routes
pub struct Services {
    pub shop: ShopAppState<LiveShop>,
    pub warranty: MemoryWarrantyRepository,
    pub audit: MemoryAuditRepository,
    pub verifier: Arc<TurnstileClient>,
    pub notifier: Notifier,
}

impl Services {
    pub fn build(config: &AppConfig, notifier: Notifier) -> anyhow::Result<Self> {
        let warranty = MemoryWarrantyRepository::new();
        let audit = MemoryAuditRepository::new();
        let verifier = Arc::new(TurnstileClient::new(config.turnstile.clone())?);

        let shop = ShopAppState {
            repo: Arc::new(MemoryShopRepository::new()),
            gateway: Arc::new(PakasirClient::new(config.pakasir.clone())?),
            panel: Arc::new(PterodactylClient::new(config.panel.clone())?),
            verifier: verifier.clone(),
            warranty: Arc::new(warranty.clone()),
            audit: Arc::new(audit.clone()),
            notifier: notifier.clone(),
            config: Arc::new(config.shop.clone()),
            warranty_config: Arc::new(config.warranty.clone()),
        };

        Ok(Self {
            shop,
            warranty,
            audit,
            verifier,
            notifier,
        })
    }
}

fn cors(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

/// Browser hardening headers, added unless a handler set them; no CSP or COEP
const SECURITY_HEADERS: [(&str, &str); 11] = [
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=15552000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

fn with_security_headers(router: Router) -> Router {
    SECURITY_HEADERS.iter().fold(router, |router, &(name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}

pub fn build_router(config: &AppConfig, services: Services) -> Router {
    let auth_config = Arc::new(config.auth.clone());

    let admin_gated = shop_admin_router(services.shop.clone())
        .nest("/logs", audit_router(services.audit.clone()))
        .nest("/warranty", warranty_admin_router(services.warranty.clone()))
        .route_layer(middleware::from_fn_with_state(
            auth_config.clone(),
            require_admin_session,
        ));

    let admin = auth_router_generic(services.verifier.clone(), auth_config).merge(admin_gated);

    let api = shop_router(services.shop.clone())
        .nest(
            "/warranty",
            warranty_router(
                services.warranty.clone(),
                services.audit.clone(),
                services.notifier.clone(),
                Arc::new(config.warranty.clone()),
            ),
        )
        .nest("/admin", admin)
        .merge(health_router(Features {
            warranty: config.warranty.enabled,
            telegram_logs: config.telegram.has_log_channels(),
            admin: true,
        }));

    let sink = ErrorSink {
        audit: services.audit.clone(),
        notifier: services.notifier.clone(),
    };

    let router = Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(sink, report_server_errors))
        .layer(middleware::from_fn_with_state(
            RateLimiter::storefront(),
            rate_limit,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors(&config.frontend_origins));

    with_security_headers(router)
}
