//! Auth Middleware
//!
//! Gate for the admin routes.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::principal::AdminPrincipal;
use platform::cookie::extract_cookie;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;

/// Middleware that requires a valid admin session.
///
/// Rejects with 401 and `X-Auth-Required: true`; on success the
/// [`AdminPrincipal`] is available to handlers as an extension.
pub async fn require_admin_session(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = extract_cookie(req.headers(), &config.session_cookie_name);

    match CheckSessionUseCase::new(config).execute(token.as_deref()) {
        Ok(session) => {
            req.extensions_mut()
                .insert(AdminPrincipal::new(session.username));
            next.run(req).await
        }
        Err(e) => {
            let mut response = e.into_response();
            response
                .headers_mut()
                .insert("X-Auth-Required", axum::http::HeaderValue::from_static("true"));
            response
        }
    }
}
