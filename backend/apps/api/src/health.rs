//! Liveness check

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub warranty: bool,
    pub telegram_logs: bool,
    pub admin: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub features: Features,
}

/// GET /api/health
async fn health(State(features): State<Features>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Server is running",
        features,
    })
}

pub fn health_router(features: Features) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(features)
}
