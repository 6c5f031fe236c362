//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary every storefront crate agrees on:
//! - The unified error type and its HTTP mapping
//! - The JSON body extractor that reports rejections in that shape
//! - The report attached to server-side failures
//! - The authenticated admin principal carried through request extensions

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
    pub mod report;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod principal;
