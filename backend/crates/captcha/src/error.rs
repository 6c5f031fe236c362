//! Captcha Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type CaptchaResult<T> = Result<T, CaptchaError>;

/// Failures talking to the verification provider.
///
/// A token the provider rejects is not an error; it is `Ok(false)`.
#[derive(Debug, Error)]
pub enum CaptchaError {
    /// Transport failure or undecodable body
    #[error("Turnstile request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success HTTP status
    #[error("Turnstile API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl CaptchaError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    pub fn log(&self) {
        tracing::error!(error = %self, "Human verification backend failed");
    }
}

impl From<CaptchaError> for AppError {
    fn from(err: CaptchaError) -> Self {
        err.log();
        AppError::new(err.kind(), "Terjadi kesalahan server").with_source(err)
    }
}
