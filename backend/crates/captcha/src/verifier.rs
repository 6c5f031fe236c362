//! Verifier trait

use std::net::IpAddr;

use crate::error::CaptchaResult;

/// Asks a provider whether a browser-supplied response token is genuine.
#[trait_variant::make(HumanVerifier: Send)]
pub trait LocalHumanVerifier {
    /// `Ok(false)` when the provider rejects the token (bad, reused or expired)
    async fn verify(&self, response: &str, remote_ip: Option<IpAddr>) -> CaptchaResult<bool>;
}
