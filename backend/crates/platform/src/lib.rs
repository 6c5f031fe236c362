//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Random tokens and constant-time comparison
//! - Cookie management
//! - Client IP resolution behind reverse proxies
//! - Fixed-window rate limiting
//! - Text helpers for HTML notifications (escaping, rupiah, WIB time)

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod rate_limit;
pub mod text;
