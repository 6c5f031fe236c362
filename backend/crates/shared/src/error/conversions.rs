//! Error conversions - HTTP rendering of [`AppError`] and extractor rejections

use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Storefront clients key off `success` and `message`; the rest follows RFC 7807 naming.
        let body = serde_json::json!({
            "success": false,
            "message": self.message(),
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "action": self.action(),
        });

        let mut response = (status, Json(body)).into_response();
        if self.is_server_error() {
            response.extensions_mut().insert(self.report());
        }
        response
    }
}

/// Malformed or mistyped JSON bodies become a 400 in the common error shape
#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use super::kind::ErrorKind;
        use axum::extract::rejection::JsonRejection;

        let message = match &rejection {
            JsonRejection::MissingJsonContentType(_) => "Content-Type harus application/json",
            _ => "Format JSON tidak valid",
        };
        AppError::new(ErrorKind::BadRequest, message).with_detail(rejection.body_text())
    }
}
