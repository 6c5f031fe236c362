//! Auth (Admin Session) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - the signed session credential
//! - `application/` - sign-in and session check use cases
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! ## Security Model
//! - One admin account from configuration, compared in constant time
//! - Human verification (Turnstile) precedes the credential check
//! - Stateless HMAC-SHA256 signed cookie with a 24 hour expiry

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::session::AdminSession;
pub use error::{AuthError, AuthResult};
pub use presentation::middleware::require_admin_session;
pub use presentation::router::{auth_router, auth_router_generic};
