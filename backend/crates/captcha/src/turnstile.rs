//! Cloudflare Turnstile client

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::config::TurnstileConfig;
use crate::error::{CaptchaError, CaptchaResult};
use crate::verifier::HumanVerifier;

#[derive(Debug, Serialize)]
struct SiteVerifyRequest<'a> {
    secret: &'a str,
    response: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    remoteip: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SiteVerifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}

/// `siteverify` client
#[derive(Debug, Clone)]
pub struct TurnstileClient {
    http: reqwest::Client,
    config: TurnstileConfig,
}

impl TurnstileClient {
    pub fn new(config: TurnstileConfig) -> CaptchaResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn site_key(&self) -> &str {
        &self.config.site_key
    }

    fn check_status(resp: &reqwest::Response) -> CaptchaResult<()> {
        let status = resp.status();
        if !status.is_success() {
            return Err(CaptchaError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").into(),
            });
        }
        Ok(())
    }
}

impl HumanVerifier for TurnstileClient {
    async fn verify(&self, response: &str, remote_ip: Option<IpAddr>) -> CaptchaResult<bool> {
        let body = SiteVerifyRequest {
            secret: &self.config.secret_key,
            response,
            remoteip: remote_ip.map(|ip| ip.to_string()),
        };

        let resp = self
            .http
            .post(&self.config.verify_url)
            .json(&body)
            .send()
            .await?;
        Self::check_status(&resp)?;
        let outcome: SiteVerifyResponse = resp.json().await?;

        if !outcome.success {
            tracing::info!(error_codes = ?outcome.error_codes, "Turnstile rejected response token");
        }

        Ok(outcome.success)
    }
}
