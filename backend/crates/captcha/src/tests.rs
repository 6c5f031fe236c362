//! Turnstile client tests against a local stand-in for `siteverify`

#[cfg(test)]
mod turnstile_tests {
    use std::net::SocketAddr;

    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use crate::config::TurnstileConfig;
    use crate::error::CaptchaError;
    use crate::turnstile::TurnstileClient;
    use crate::verifier::HumanVerifier;

    async fn spawn_provider() -> SocketAddr {
        async fn siteverify(Json(body): Json<Value>) -> Json<Value> {
            let ok = body["secret"] == "s3cret" && body["response"] == "good-token";
            if ok {
                Json(json!({ "success": true }))
            } else {
                Json(json!({ "success": false, "error-codes": ["invalid-input-response"] }))
            }
        }

        async fn broken() -> StatusCode {
            StatusCode::INTERNAL_SERVER_ERROR
        }

        let app = Router::new()
            .route("/siteverify", post(siteverify))
            .route("/broken", post(broken));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client(addr: SocketAddr, path: &str) -> TurnstileClient {
        let config = TurnstileConfig {
            verify_url: format!("http://{addr}{path}"),
            ..TurnstileConfig::new("s3cret", "site")
        };
        TurnstileClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_accepts_genuine_token() {
        let addr = spawn_provider().await;
        let verifier = client(addr, "/siteverify");
        assert!(verifier.verify("good-token", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_rejected_token_is_not_an_error() {
        let addr = spawn_provider().await;
        let verifier = client(addr, "/siteverify");
        let ip = Some("198.51.100.7".parse().unwrap());
        assert!(!verifier.verify("forged", ip).await.unwrap());
    }

    #[tokio::test]
    async fn test_provider_failure_is_api_error() {
        let addr = spawn_provider().await;
        let verifier = client(addr, "/broken");
        let err = verifier.verify("good-token", None).await.unwrap_err();
        assert!(matches!(err, CaptchaError::Api { status: 500, .. }));
    }
}

#[cfg(test)]
mod config_tests {
    use crate::config::*;
    use std::time::Duration;

    #[test]
    fn test_development_uses_always_pass_keys() {
        let config = TurnstileConfig::development();
        assert_eq!(config.secret_key, TEST_SECRET_ALWAYS_PASSES);
        assert_eq!(config.site_key, TEST_SITE_KEY_ALWAYS_PASSES);
        assert!(config.verify_url.starts_with("https://challenges.cloudflare.com/"));
    }

    #[test]
    fn test_with_timeout() {
        let config = TurnstileConfig::default().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::CaptchaError;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[test]
    fn test_api_error_is_generic_server_error() {
        let err = CaptchaError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        let app: AppError = err.into();
        assert_eq!(app.kind(), ErrorKind::InternalServerError);
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Terjadi kesalahan server");
        assert!(app.source_chain().unwrap().contains("503"));
    }
}
