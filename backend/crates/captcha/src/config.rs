//! Turnstile configuration

use std::time::Duration;

/// Cloudflare test secret that accepts every response token.
pub const TEST_SECRET_ALWAYS_PASSES: &str = "1x0000000000000000000000000000000AA";
/// Matching test site key for the frontend widget.
pub const TEST_SITE_KEY_ALWAYS_PASSES: &str = "1x00000000000000000000AA";

#[derive(Debug, Clone)]
pub struct TurnstileConfig {
    /// Server-side secret
    pub secret_key: String,
    /// Public site key rendered into the widget
    pub site_key: String,
    /// `siteverify` endpoint
    pub verify_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for TurnstileConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            site_key: String::new(),
            verify_url: "https://challenges.cloudflare.com/turnstile/v0/siteverify".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl TurnstileConfig {
    pub fn new(secret_key: impl Into<String>, site_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            site_key: site_key.into(),
            ..Default::default()
        }
    }

    /// Test keys that always pass
    pub fn development() -> Self {
        Self::new(TEST_SECRET_ALWAYS_PASSES, TEST_SITE_KEY_ALWAYS_PASSES)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
