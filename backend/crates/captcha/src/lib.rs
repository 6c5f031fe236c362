//! Human verification (bot check)
//!
//! - `verifier` - the [`HumanVerifier`] seam every form handler depends on
//! - `turnstile` - Cloudflare Turnstile `siteverify` client
//!
//! The browser solves the challenge and posts the opaque response token along
//! with the form; the backend is the only party that asks the provider whether
//! the token is genuine. A token is single-use on the provider side.

pub mod config;
pub mod error;
pub mod turnstile;
pub mod verifier;

pub use config::TurnstileConfig;
pub use error::{CaptchaError, CaptchaResult};
pub use turnstile::TurnstileClient;
pub use verifier::{HumanVerifier, LocalHumanVerifier};

#[cfg(test)]
mod tests;
