//! Shop Error Types
//!
//! `ShopError` is what handlers return; `UpstreamError` is what the gateway
//! and panel clients return. Upstream failures reach the buyer as a generic
//! 500 while the detail travels in the error report.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use captcha::CaptchaError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type ShopResult<T> = Result<T, ShopError>;
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Failures of the payment gateway or hosting panel APIs
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failure or undecodable body
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status without a usable error body
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered with an explicit error message
    #[error("{0}")]
    Rejected(String),

    /// Body parsed but a required field is missing
    #[error("unexpected response: {0}")]
    Malformed(&'static str),
}

#[derive(Debug, Error)]
pub enum ShopError {
    // ------------------------------------------------------------------
    // Checkout input
    // ------------------------------------------------------------------
    #[error("Harap verifikasi keamanan (Cloudflare)")]
    MissingCaptcha,

    #[error("Verifikasi keamanan gagal/kadaluarsa. Silakan refresh halaman.")]
    CaptchaRejected,

    #[error("Plan, username, dan email wajib diisi")]
    MissingOrderFields,

    #[error("Username harus 3-16 karakter, hanya huruf kecil dan angka")]
    InvalidUsername,

    #[error("Format email tidak valid")]
    InvalidEmail,

    #[error("Plan tidak valid")]
    InvalidPlan,

    #[error("Order ID wajib diisi")]
    MissingOrderId,

    #[error("Order tidak ditemukan")]
    OrderNotFound,

    // ------------------------------------------------------------------
    // Admin product input
    // ------------------------------------------------------------------
    #[error("Semua field wajib diisi")]
    MissingProductFields,

    #[error("ID hanya boleh huruf kecil, angka, - dan _")]
    InvalidProductId,

    #[error("Product ID sudah ada")]
    DuplicateProduct,

    #[error("Price, RAM, Disk, dan CPU harus berupa angka")]
    NonNumericField,

    #[error("Nilai tidak boleh negatif (gunakan 0 untuk unlimited)")]
    NegativeField,

    #[error("Product tidak ditemukan")]
    ProductNotFound,

    // ------------------------------------------------------------------
    // Upstream
    // ------------------------------------------------------------------
    /// Gateway refused to open the transaction
    #[error("Gagal membuat transaksi QRIS")]
    TransactionRejected(#[source] UpstreamError),

    /// Gateway opened it but returned nothing to render a QR from
    #[error("Format response QRIS tidak valid")]
    InvalidQrisResponse,

    #[error("Terjadi kesalahan server")]
    Upstream(#[from] UpstreamError),

    #[error("Terjadi kesalahan server")]
    Captcha(#[from] CaptchaError),
}

impl ShopError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ShopError::OrderNotFound | ShopError::ProductNotFound => ErrorKind::NotFound,
            ShopError::TransactionRejected(_)
            | ShopError::InvalidQrisResponse
            | ShopError::Upstream(_) => ErrorKind::InternalServerError,
            ShopError::Captcha(e) => e.kind(),
            _ => ErrorKind::BadRequest,
        }
    }

    fn log(&self) {
        match self {
            ShopError::TransactionRejected(e) | ShopError::Upstream(e) => {
                tracing::error!(error = %e, "Upstream API failed");
            }
            ShopError::InvalidQrisResponse => {
                tracing::error!("Payment gateway returned no QR data");
            }
            ShopError::Captcha(e) => e.log(),
            _ => {
                tracing::debug!(error = %self, "Shop request rejected");
            }
        }
    }
}

impl From<ShopError> for AppError {
    fn from(err: ShopError) -> Self {
        let app = AppError::new(err.kind(), err.to_string());
        match err {
            ShopError::TransactionRejected(source) | ShopError::Upstream(source) => {
                app.with_source(source)
            }
            ShopError::Captcha(source) => app.with_source(source),
            _ => app,
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
