//! Route-level tests for the warranty ledger

mod router_tests {
    use std::sync::Arc;

    use audit::{AuditRepository, MemoryAuditRepository};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::{TimeDelta, Utc};
    use http_body_util::BodyExt;
    use notify::Notifier;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::{
        IssueTokenUseCase, MemoryWarrantyRepository, ServerId, WarrantyConfig, WarrantyRepository,
        WarrantyToken, warranty_admin_router, warranty_router,
    };

    struct Harness {
        repo: MemoryWarrantyRepository,
        audit: MemoryAuditRepository,
        app: Router,
    }

    fn harness(config: WarrantyConfig) -> Harness {
        let repo = MemoryWarrantyRepository::new();
        let audit = MemoryAuditRepository::new();
        let app = warranty_router(
            repo.clone(),
            audit.clone(),
            Notifier::disabled(),
            Arc::new(config),
        );
        Harness { repo, audit, app }
    }

    async fn issue(repo: &MemoryWarrantyRepository, server: u64) -> String {
        IssueTokenUseCase::new(
            Arc::new(repo.clone()),
            Notifier::disabled(),
            Arc::new(WarrantyConfig::default()),
        )
        .execute(ServerId::from(server), "alice")
        .await
        .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn claim_request(body: Value) -> Request<Body> {
        Request::post("/claim")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_claim_then_reclaim() {
        let h = harness(WarrantyConfig::default());
        let token = issue(&h.repo, 42).await;

        let (status, body) = send(
            h.app.clone(),
            claim_request(json!({ "serverId": 42, "token": token })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Klaim garansi berhasil");
        assert_eq!(body["details"], "Server akan di-reset dalam waktu 24 jam");

        let (status, body) = send(
            h.app,
            claim_request(json!({ "serverId": "42", "token": token })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Token sudah digunakan");

        assert_eq!(h.audit.server_logs(50).await[0].logs.len(), 1);
    }

    #[tokio::test]
    async fn test_claim_string_and_number_ids_match() {
        let h = harness(WarrantyConfig::default());
        let token = issue(&h.repo, 7).await;

        let (status, _) = send(
            h.app,
            claim_request(json!({ "serverId": " 7 ", "token": token })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_claim_wrong_server() {
        let h = harness(WarrantyConfig::default());
        let token = issue(&h.repo, 42).await;

        let (status, body) = send(
            h.app,
            claim_request(json!({ "serverId": 43, "token": token })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Token tidak cocok untuk server ini");
        assert!(!h.repo.find(&token).await.unwrap().used);
    }

    #[tokio::test]
    async fn test_claim_missing_fields() {
        let h = harness(WarrantyConfig::default());
        let (status, body) = send(h.app, claim_request(json!({ "token": "abc" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Server ID dan token wajib diisi");
    }

    #[tokio::test]
    async fn test_claim_unknown_token() {
        let h = harness(WarrantyConfig::default());
        let (status, body) = send(
            h.app,
            claim_request(json!({ "serverId": 1, "token": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Token tidak valid");
    }

    #[tokio::test]
    async fn test_claim_when_disabled() {
        let h = harness(WarrantyConfig::disabled());
        let (status, body) = send(
            h.app,
            claim_request(json!({ "serverId": 1, "token": "abc" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Fitur garansi sedang tidak aktif");
    }

    #[tokio::test]
    async fn test_check_known_and_unknown() {
        let h = harness(WarrantyConfig::default());
        let token = issue(&h.repo, 42).await;

        let (status, body) = send(
            h.app.clone(),
            Request::get(format!("/check/{token}")).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["valid"], true);
        assert_eq!(body["used"], false);
        assert_eq!(body["expired"], false);
        assert_eq!(body["serverId"], "42");
        assert_eq!(body["username"], "alice");
        assert_eq!(body["usedAt"], Value::Null);
        assert_eq!(body["daysRemaining"], 30);

        let (status, body) = send(
            h.app,
            Request::get("/check/unknown-token").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": false, "valid": false, "message": "Token tidak ditemukan" })
        );
        assert!(!h.repo.find(&token).await.unwrap().used);
    }

    #[tokio::test]
    async fn test_admin_tokens_view() {
        let repo = MemoryWarrantyRepository::new();
        issue(&repo, 1).await;
        repo.insert(WarrantyToken::issue(
            "old".into(),
            ServerId::from(2),
            "bob".into(),
            TimeDelta::days(30),
            Utc::now() - TimeDelta::days(60),
        ))
        .await;

        let (status, body) = send(
            warranty_admin_router(repo),
            Request::get("/tokens").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["active"], 1);
        assert_eq!(body["used"], 0);
        assert_eq!(body["expired"], 1);
        assert_eq!(body["tokens"][1]["token"], "old");
        assert_eq!(body["tokens"][1]["serverId"], "2");
    }

    #[tokio::test]
    async fn test_malformed_claim_bodies_get_json_errors() {
        let h = harness(WarrantyConfig::default());
        let token = issue(&h.repo, 42).await;

        let (status, body) = send(
            h.app.clone(),
            claim_request(json!({ "serverId": 42, "token": 123 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Format JSON tidak valid");

        let request = Request::post("/claim")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(h.app.clone(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Format JSON tidak valid");

        // Rejected bodies never touch the ledger
        let stored = h.repo.find(&token).await.unwrap();
        assert!(!stored.used);
    }
}
