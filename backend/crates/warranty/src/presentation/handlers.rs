//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use audit::AuditRepository;
use kernel::extract::ApiJson;
use notify::Notifier;

use crate::application::config::WarrantyConfig;
use crate::application::{
    CheckTokenUseCase, ClaimTokenInput, ClaimTokenUseCase, ListTokensUseCase,
};
use crate::domain::repository::WarrantyRepository;
use crate::error::WarrantyResult;
use crate::presentation::dto::{CheckResponse, ClaimRequest, ClaimResponse, TokensResponse};

/// Shared state for the public warranty handlers
#[derive(Clone)]
pub struct WarrantyAppState<R, A>
where
    R: WarrantyRepository + Clone + Send + Sync + 'static,
    A: AuditRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub audit: Arc<A>,
    pub notifier: Notifier,
    pub config: Arc<WarrantyConfig>,
}

/// Shared state for the admin token view
#[derive(Clone)]
pub struct WarrantyAdminState<R>
where
    R: WarrantyRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/warranty/claim
pub async fn claim<R, A>(
    State(state): State<WarrantyAppState<R, A>>,
    ApiJson(req): ApiJson<ClaimRequest>,
) -> WarrantyResult<Json<ClaimResponse>>
where
    R: WarrantyRepository + Clone + Send + Sync + 'static,
    A: AuditRepository + Clone + Send + Sync + 'static,
{
    let use_case = ClaimTokenUseCase::new(
        state.repo.clone(),
        state.audit.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    use_case
        .execute(ClaimTokenInput {
            server_id: req.server_id,
            token: req.token,
        })
        .await?;

    Ok(Json(ClaimResponse {
        success: true,
        message: "Klaim garansi berhasil",
        details: "Server akan di-reset dalam waktu 24 jam",
    }))
}

/// GET /api/warranty/check/{token}
pub async fn check<R, A>(
    State(state): State<WarrantyAppState<R, A>>,
    Path(token): Path<String>,
) -> Json<CheckResponse>
where
    R: WarrantyRepository + Clone + Send + Sync + 'static,
    A: AuditRepository + Clone + Send + Sync + 'static,
{
    let status = CheckTokenUseCase::new(state.repo.clone()).execute(&token).await;
    Json(status.map_or_else(CheckResponse::not_found, CheckResponse::from))
}

/// GET /api/admin/warranty/tokens
pub async fn list_tokens<R>(State(state): State<WarrantyAdminState<R>>) -> Json<TokensResponse>
where
    R: WarrantyRepository + Clone + Send + Sync + 'static,
{
    let summary = ListTokensUseCase::new(state.repo.clone()).execute().await;
    Json(TokensResponse {
        success: true,
        total: summary.total,
        active: summary.active,
        used: summary.used,
        expired: summary.expired,
        tokens: summary.tokens,
    })
}
