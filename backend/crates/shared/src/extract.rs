//! Request extractors
//!
//! [`ApiJson`] is `axum::Json` with rejections rendered as [`AppError`], so a
//! malformed body gets the same `{success:false, message}` shape as every
//! other failure.

use axum::extract::FromRequest;

use crate::error::app_error::AppError;

#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
