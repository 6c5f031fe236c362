//! Cross-cutting HTTP middleware
//!
//! - Fixed-window rate limiting per client IP
//! - Reporting of 5xx responses to the error log and the `errors` channel
//! - Panic to 500 conversion

use std::any::Any;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use audit::{AuditRepository, ErrorLogEntry, MemoryAuditRepository};
use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderValue, Method, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use kernel::error::app_error::AppError;
use kernel::error::report::ErrorReport;
use notify::{Channel, Notifier};
use platform::client::{client_key, extract_client_ip};
use platform::rate_limit::{MemoryRateLimitStore, RateLimitConfig, RateLimitStore};
use platform::text::{format_wib_time, html_escape};
use serde_json::json;

const GENERIC_SERVER_ERROR: &str = "Terjadi kesalahan server";

fn client_ip(req: &Request<Body>) -> Option<IpAddr> {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    extract_client_ip(req.headers(), peer)
}

// ============================================================================
// Rate limiting
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub enum PathMatch {
    Prefix(&'static str),
    Exact(&'static str),
}

#[derive(Debug, Clone)]
pub struct RateLimitRule {
    /// Counter namespace, so one client has a separate window per rule
    pub scope: &'static str,
    pub method: Option<Method>,
    pub path: PathMatch,
    pub config: RateLimitConfig,
    pub message: &'static str,
}

impl RateLimitRule {
    fn matches(&self, method: &Method, path: &str) -> bool {
        if self.method.as_ref().is_some_and(|m| m != method) {
            return false;
        }
        match self.path {
            PathMatch::Prefix(prefix) => path.starts_with(prefix),
            PathMatch::Exact(exact) => path == exact,
        }
    }
}

#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<MemoryRateLimitStore>,
    rules: Arc<[RateLimitRule]>,
}

impl RateLimiter {
    pub fn new(rules: Vec<RateLimitRule>) -> Self {
        Self {
            store: Arc::new(MemoryRateLimitStore::new()),
            rules: rules.into(),
        }
    }

    /// `/api/*` 100 per 15 min, checkout 5 per 5 min, admin login 5 per minute
    pub fn storefront() -> Self {
        const TOO_MANY: &str = "Terlalu banyak request dari IP ini, coba lagi nanti.";
        Self::new(vec![
            RateLimitRule {
                scope: "api",
                method: None,
                path: PathMatch::Prefix("/api/"),
                config: RateLimitConfig::new(100, 15 * 60),
                message: TOO_MANY,
            },
            RateLimitRule {
                scope: "payment-create",
                method: Some(Method::POST),
                path: PathMatch::Exact("/api/payment/create"),
                config: RateLimitConfig::new(5, 5 * 60),
                message: "Terlalu banyak pembuatan pembayaran, tunggu 5 menit.",
            },
            RateLimitRule {
                scope: "admin-login",
                method: Some(Method::POST),
                path: PathMatch::Exact("/api/admin/login"),
                config: RateLimitConfig::new(5, 60),
                message: TOO_MANY,
            },
        ])
    }
}

pub async fn rate_limit(State(limiter): State<RateLimiter>, req: Request<Body>, next: Next) -> Response {
    let key = client_key(client_ip(&req));
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    for rule in limiter
        .rules
        .iter()
        .filter(|rule| rule.matches(&method, &path))
    {
        let scoped = format!("{}:{key}", rule.scope);
        match limiter.store.check_and_increment(&scoped, &rule.config).await {
            Ok(result) if !result.allowed => {
                let retry_after = result.retry_after_secs(Utc::now().timestamp_millis());
                tracing::warn!(scope = rule.scope, client = %key, retry_after, "Rate limit exceeded");

                let mut response = AppError::too_many_requests(rule.message).into_response();
                if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
                    response.headers_mut().insert(header::RETRY_AFTER, value);
                }
                return response;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, scope = rule.scope, "Rate limit check failed, allowing request");
            }
        }
    }

    next.run(req).await
}

// ============================================================================
// Server error reporting
// ============================================================================

#[derive(Clone)]
pub struct ErrorSink {
    pub audit: MemoryAuditRepository,
    pub notifier: Notifier,
}

fn server_error_message(method: &Method, uri: &str, error: &str, at: DateTime<Utc>) -> String {
    format!(
        "🔥 <b>SERVER ERROR</b>\n\n\
         📄 <b>Endpoint:</b> {method} {}\n\
         ❌ <b>Error:</b> {}\n\
         🕒 <b>Waktu:</b> {}",
        html_escape(uri),
        html_escape(error),
        format_wib_time(at),
    )
}

/// Every 5xx leaving the router lands in the error log and the `errors`
/// channel. The client body is left untouched.
pub async fn report_server_errors(
    State(sink): State<ErrorSink>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().to_string();
    let ip = client_ip(&req).map(|ip| ip.to_string());
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let response = next.run(req).await;
    if !response.status().is_server_error() {
        return response;
    }

    let report = response
        .extensions()
        .get::<ErrorReport>()
        .cloned()
        .unwrap_or_else(|| ErrorReport::new(GENERIC_SERVER_ERROR));

    tracing::error!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        error = %report.describe(),
        "Request failed"
    );

    sink.notifier.send(
        Channel::Errors,
        server_error_message(&method, &uri, report.describe(), Utc::now()),
    );
    sink.audit
        .record_error(ErrorLogEntry::new(
            report.message,
            report.detail,
            json!({
                "url": uri,
                "method": method.as_str(),
                "ip": ip,
                "userAgent": user_agent,
            }),
        ))
        .await;

    response
}

/// `CatchPanicLayer` hook: a generic 500 whose report carries the panic text
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    AppError::internal(GENERIC_SERVER_ERROR)
        .with_detail(format!("panic: {detail}"))
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_matching() {
        let limiter = RateLimiter::storefront();
        let hits = |method: Method, path: &str| {
            limiter
                .rules
                .iter()
                .filter(|r| r.matches(&method, path))
                .map(|r| r.scope)
                .collect::<Vec<_>>()
        };

        assert_eq!(hits(Method::GET, "/api/plans"), ["api"]);
        assert_eq!(hits(Method::POST, "/api/payment/create"), ["api", "payment-create"]);
        assert_eq!(hits(Method::GET, "/api/payment/create"), ["api"]);
        assert_eq!(hits(Method::POST, "/api/admin/login"), ["api", "admin-login"]);
        assert!(hits(Method::GET, "/index.html").is_empty());
    }

    #[test]
    fn test_server_error_message_escapes() {
        let text = server_error_message(&Method::GET, "/api/x?a=<b>", "boom & bust", Utc::now());
        assert!(text.contains("SERVER ERROR"));
        assert!(text.contains("GET /api/x?a=&lt;b&gt;"));
        assert!(text.contains("boom &amp; bust"));
    }

    #[test]
    fn test_panic_response_is_500_with_report() {
        let response = panic_response(Box::new("kaboom"));
        assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.describe(), "panic: kaboom");
    }
}
