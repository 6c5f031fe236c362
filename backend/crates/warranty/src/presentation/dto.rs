//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::TokenStatus;
use crate::domain::entities::WarrantyToken;
use crate::domain::value_objects::{ServerId, deserialize_optional_server_id};

// ============================================================================
// Claim
// ============================================================================

/// Claim request; `serverId` may be a JSON number or string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    #[serde(default, deserialize_with = "deserialize_optional_server_id")]
    pub server_id: Option<ServerId>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaimResponse {
    pub success: bool,
    pub message: &'static str,
    pub details: &'static str,
}

// ============================================================================
// Check
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatusBody {
    pub used: bool,
    pub expired: bool,
    pub server_id: ServerId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub days_remaining: i64,
}

/// Check response; unknown tokens carry only `message`
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub success: bool,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(flatten)]
    pub status: Option<TokenStatusBody>,
}

impl CheckResponse {
    pub fn not_found() -> Self {
        Self {
            success: false,
            valid: false,
            message: Some("Token tidak ditemukan"),
            status: None,
        }
    }
}

impl From<TokenStatus> for CheckResponse {
    fn from(status: TokenStatus) -> Self {
        Self {
            success: true,
            valid: status.valid,
            message: None,
            status: Some(TokenStatusBody {
                used: status.used,
                expired: status.expired,
                server_id: status.server_id,
                username: status.username,
                created_at: status.created_at,
                expires_at: status.expires_at,
                used_at: status.used_at,
                days_remaining: status.days_remaining,
            }),
        }
    }
}

// ============================================================================
// Admin
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TokensResponse {
    pub success: bool,
    pub total: usize,
    pub active: usize,
    pub used: usize,
    pub expired: usize,
    pub tokens: Vec<WarrantyToken>,
}
