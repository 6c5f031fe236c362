//! Warranty Error Types
//!
//! Warranty-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::entities::ClaimRejection;

pub type WarrantyResult<T> = Result<T, WarrantyError>;

#[derive(Debug, Error)]
pub enum WarrantyError {
    /// Claim request without server id or token
    #[error("Server ID dan token wajib diisi")]
    MissingFields,

    /// Claim refused by the ledger
    #[error("{0}")]
    Rejected(ClaimRejection),

    /// Warranty feature switched off
    #[error("Fitur garansi sedang tidak aktif")]
    Disabled,
}

impl WarrantyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WarrantyError::MissingFields | WarrantyError::Rejected(_) => StatusCode::BAD_REQUEST,
            WarrantyError::Disabled => StatusCode::FORBIDDEN,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WarrantyError::MissingFields | WarrantyError::Rejected(_) => ErrorKind::BadRequest,
            WarrantyError::Disabled => ErrorKind::Forbidden,
        }
    }

    fn log(&self) {
        match self {
            WarrantyError::Rejected(reason) => {
                tracing::warn!(reason = ?reason, "Warranty claim rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Warranty error");
            }
        }
    }
}

impl From<WarrantyError> for AppError {
    fn from(err: WarrantyError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for WarrantyError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_maps_to_400_with_reason() {
        let err = WarrantyError::Rejected(ClaimRejection::Expired);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let app: AppError = err.into();
        assert_eq!(app.message(), "Token sudah kadaluarsa");
    }

    #[test]
    fn test_disabled_is_forbidden() {
        assert_eq!(WarrantyError::Disabled.kind(), ErrorKind::Forbidden);
    }
}
