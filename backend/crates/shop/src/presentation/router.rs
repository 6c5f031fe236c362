//! Shop Routers

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::presentation::handlers::{self, ShopAppState, ShopBackend};

/// Public catalog and checkout routes
pub fn shop_router<B: ShopBackend>(state: ShopAppState<B>) -> Router {
    Router::new()
        .route("/plans", get(handlers::list_plans::<B>))
        .route("/payment/create", post(handlers::create_payment::<B>))
        .route("/payment/check", post(handlers::check_payment::<B>))
        .with_state(state)
}

/// Product management; the caller gates it behind the admin session, which
/// supplies the `AdminPrincipal` extension
pub fn shop_admin_router<B: ShopBackend>(state: ShopAppState<B>) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products::<B>).post(handlers::create_product::<B>),
        )
        .route(
            "/products/{id}",
            put(handlers::update_product::<B>).delete(handlers::delete_product::<B>),
        )
        .route("/stats", get(handlers::stats::<B>))
        .with_state(state)
}
