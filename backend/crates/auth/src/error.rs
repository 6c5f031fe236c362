//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use captcha::CaptchaError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login form without a Turnstile response
    #[error("Harap selesaikan verifikasi keamanan (Cloudflare)!")]
    MissingCaptcha,

    /// Turnstile refused the response
    #[error("Verifikasi keamanan gagal, silakan refresh halaman.")]
    CaptchaRejected,

    /// Wrong username or password
    #[error("Username atau password salah!")]
    InvalidCredentials,

    /// Missing, forged or expired session cookie
    #[error("Sesi admin tidak valid, silakan login kembali")]
    SessionInvalid,

    /// Turnstile could not be reached
    #[error("Terjadi kesalahan server saat verifikasi.")]
    Captcha(#[from] CaptchaError),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCaptcha | AuthError::CaptchaRejected => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Captcha(e) => e.kind(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Captcha(e) => e.log(),
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid admin login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let app = AppError::new(err.kind(), err.to_string());
        match err {
            AuthError::Captcha(source) => app.with_source(source),
            _ => app,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::MissingCaptcha.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::SessionInvalid.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_message_reaches_client() {
        let app: AppError = AuthError::InvalidCredentials.into();
        assert_eq!(app.message(), "Username atau password salah!");
    }
}
