//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use captcha::{HumanVerifier, TurnstileClient};

use crate::application::config::AuthConfig;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the admin login router with the Turnstile verifier
pub fn auth_router(verifier: TurnstileClient, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(Arc::new(verifier), config)
}

/// Create a generic admin login router for any verifier
pub fn auth_router_generic<V>(verifier: Arc<V>, config: Arc<AuthConfig>) -> Router
where
    V: HumanVerifier + Send + Sync + 'static,
{
    let state = AuthAppState { verifier, config };

    Router::new()
        .route("/login", post(handlers::sign_in::<V>))
        .route("/logout", post(handlers::sign_out::<V>))
        .route("/session", get(handlers::session_status::<V>))
        .with_state(state)
}
