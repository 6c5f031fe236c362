//! HTTP Handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::DateTime;

use captcha::HumanVerifier;
use kernel::extract::ApiJson;
use platform::client::extract_client_ip;
use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::{CheckSessionUseCase, SignInInput, SignInUseCase};
use crate::error::AuthResult;
use crate::presentation::dto::{
    SessionStatusResponse, SignInRequest, SignInResponse, SignOutResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<V>
where
    V: HumanVerifier + Send + Sync + 'static,
{
    pub verifier: Arc<V>,
    pub config: Arc<AuthConfig>,
}

impl<V> Clone for AuthAppState<V>
where
    V: HumanVerifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            verifier: self.verifier.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/admin/login
pub async fn sign_in<V>(
    State(state): State<AuthAppState<V>>,
    connect_info: Option<Extension<ConnectInfo<SocketAddr>>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    V: HumanVerifier + Send + Sync + 'static,
{
    let peer = connect_info.map(|Extension(ConnectInfo(addr))| addr.ip());
    let use_case = SignInUseCase::new(state.verifier.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            username: req.username,
            password: req.password,
            captcha_response: req.turnstile_response,
            remote_ip: extract_client_ip(&headers, peer),
        })
        .await?;

    let cookie = state.config.cookie().build_set_cookie(&output.session_token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            success: true,
            message: "Login berhasil",
            username: output.session.username,
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/admin/logout
pub async fn sign_out<V>(State(state): State<AuthAppState<V>>) -> impl IntoResponse
where
    V: HumanVerifier + Send + Sync + 'static,
{
    let cookie = state.config.cookie().build_delete_cookie();
    (
        [(header::SET_COOKIE, cookie)],
        Json(SignOutResponse {
            success: true,
            message: "Logout berhasil",
        }),
    )
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/admin/session
pub async fn session_status<V>(
    State(state): State<AuthAppState<V>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    V: HumanVerifier + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);
    let session = CheckSessionUseCase::new(state.config.clone())
        .execute(token.as_deref())
        .ok();

    Json(match session {
        Some(session) => SessionStatusResponse {
            success: true,
            authenticated: true,
            expires_at: DateTime::from_timestamp_millis(session.expires_at_ms),
            username: Some(session.username),
        },
        None => SessionStatusResponse {
            success: true,
            authenticated: false,
            username: None,
            expires_at: None,
        },
    })
}
