//! Application Configuration
//!
//! Configuration for the admin session.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::crypto::random_bytes;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Admin session configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The single admin account
    pub admin_username: String,
    pub admin_password: String,
    /// Session cookie name
    pub session_cookie_name: String,
    /// HMAC key for signing session cookies
    pub session_secret: Vec<u8>,
    /// Session lifetime (24 hours)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: String::new(),
            admin_password: String::new(),
            session_cookie_name: "admin_session".to_string(),
            session_secret: Vec::new(),
            session_ttl: Duration::from_secs(24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    pub fn new(
        admin_username: impl Into<String>,
        admin_password: impl Into<String>,
        session_secret: Vec<u8>,
    ) -> Self {
        Self {
            admin_username: admin_username.into(),
            admin_password: admin_password.into(),
            session_secret,
            ..Default::default()
        }
    }

    /// Create config with a random session secret; sessions die with the process
    pub fn with_random_secret(
        admin_username: impl Into<String>,
        admin_password: impl Into<String>,
    ) -> Self {
        Self::new(admin_username, admin_password, random_bytes(32))
    }

    /// Create config for development (admin/admin, insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret("admin", "admin")
        }
    }

    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Cookie attributes for the session cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = AuthConfig::development();
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.session_secret.len(), 32);
        assert!(!config.cookie_secure);
        assert_eq!(config.session_ttl_ms(), 86_400_000);
    }

    #[test]
    fn test_cookie_carries_ttl() {
        let cookie = AuthConfig::development().cookie().build_set_cookie("v");
        assert!(cookie.starts_with("admin_session=v"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));
    }
}
