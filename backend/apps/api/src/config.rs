//! Process configuration
//!
//! Everything comes from environment variables (optionally via `.env`).
//! Release builds refuse to start without the admin credentials and session
//! secret; debug builds fall back to development values and say so.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use captcha::TurnstileConfig;
use notify::TelegramConfig;
use shop::{PakasirConfig, PanelConfig, ShopConfig};
use warranty::WarrantyConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub public_dir: PathBuf,
    pub auth: AuthConfig,
    pub pakasir: PakasirConfig,
    pub panel: PanelConfig,
    pub turnstile: TurnstileConfig,
    pub telegram: TelegramConfig,
    pub warranty: WarrantyConfig,
    pub shop: ShopConfig,
}

/// `LOG_FORMAT=json` switches to structured log lines. Read before the
/// subscriber exists, so separately from [`AppConfig`].
pub fn log_json() -> bool {
    std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"))
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Build from any key lookup; `development` enables the insecure fallbacks
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let parse = |key: &str| -> anyhow::Result<Option<u64>> {
            var(key)
                .map(|v| v.trim().parse::<u64>())
                .transpose()
                .with_context(|| format!("{key} must be a non-negative integer"))
        };

        let timeout = Duration::from_secs(parse("HTTP_TIMEOUT_SECS")?.unwrap_or(30));

        let port = match parse("PORT")? {
            Some(port) => u16::try_from(port).context("PORT out of range")?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let auth = match (
            var("ADMIN_USERNAME"),
            var("ADMIN_PASSWORD"),
            var("ADMIN_SESSION_SECRET"),
        ) {
            (Some(username), Some(password), Some(secret_b64)) => {
                let secret = general_purpose::STANDARD
                    .decode(secret_b64.trim())
                    .context("ADMIN_SESSION_SECRET must be base64")?;
                if secret.len() < 32 {
                    bail!("ADMIN_SESSION_SECRET must decode to at least 32 bytes");
                }
                AuthConfig {
                    cookie_secure: !development,
                    ..AuthConfig::new(username, password, secret)
                }
            }
            _ if development => {
                tracing::warn!("Admin credentials not configured, using development login admin/admin");
                AuthConfig::development()
            }
            _ => bail!("ADMIN_USERNAME, ADMIN_PASSWORD and ADMIN_SESSION_SECRET must be set"),
        };

        let turnstile = match (var("TURNSTILE_SECRET_KEY"), var("TURNSTILE_SITE_KEY")) {
            (Some(secret), Some(site)) => TurnstileConfig::new(secret, site),
            _ if development => {
                tracing::warn!("Turnstile keys not configured, using test keys that always pass");
                TurnstileConfig::development()
            }
            _ => bail!("TURNSTILE_SECRET_KEY and TURNSTILE_SITE_KEY must be set"),
        }
        .with_timeout(timeout);

        let mut pakasir = PakasirConfig::new(
            var("PAKASIR_PROJECT").unwrap_or_default(),
            var("PAKASIR_API_KEY").unwrap_or_default(),
        )
        .with_timeout(timeout);
        if let Some(base_url) = var("PAKASIR_BASE_URL") {
            pakasir = pakasir.with_base_url(base_url);
        }

        let panel_domain = var("PANEL_DOMAIN").unwrap_or_default();
        let defaults = PanelConfig::default();
        let panel = PanelConfig::new(panel_domain.clone(), var("PANEL_API_KEY").unwrap_or_default())
            .with_egg(
                parse("PANEL_NEST_ID")?.unwrap_or(defaults.nest_id),
                parse("PANEL_EGG_ID")?.unwrap_or(defaults.egg_id),
            )
            .with_location(parse("PANEL_LOCATION_ID")?.unwrap_or(defaults.location_id))
            .with_timeout(timeout);

        let telegram = TelegramConfig {
            payments_chat_id: var("TELEGRAM_CHANNEL_PAYMENTS"),
            servers_chat_id: var("TELEGRAM_CHANNEL_SERVERS"),
            errors_chat_id: var("TELEGRAM_CHANNEL_ERRORS"),
            timeout,
            ..TelegramConfig::new(
                var("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
                var("TELEGRAM_CHAT_ID").unwrap_or_default(),
            )
        };

        let warranty = WarrantyConfig {
            enabled: var("WARRANTY_ENABLED").is_none_or(|v| v.trim() != "false"),
            ..WarrantyConfig::with_validity_days(parse("WARRANTY_EXPIRY_DAYS")?.unwrap_or(30))
        };

        Ok(Self {
            port,
            frontend_origins,
            public_dir: var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            auth,
            pakasir,
            panel,
            turnstile,
            telegram,
            warranty,
            shop: ShopConfig::new(panel_domain),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_development_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]), true).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.auth.admin_username, "admin");
        assert!(config.warranty.enabled);
        assert!(!config.telegram.is_enabled());
    }

    #[test]
    fn test_release_requires_secrets() {
        let err = AppConfig::from_lookup(lookup(&[]), false).unwrap_err();
        assert!(err.to_string().contains("ADMIN_USERNAME"));
    }

    #[test]
    fn test_full_environment() {
        let secret = general_purpose::STANDARD.encode([7u8; 32]);
        let config = AppConfig::from_lookup(
            lookup(&[
                ("PORT", "8080"),
                ("FRONTEND_ORIGINS", "https://a.test, https://b.test"),
                ("ADMIN_USERNAME", "boss"),
                ("ADMIN_PASSWORD", "hunter2"),
                ("ADMIN_SESSION_SECRET", &secret),
                ("TURNSTILE_SECRET_KEY", "sk"),
                ("TURNSTILE_SITE_KEY", "pk"),
                ("PANEL_DOMAIN", "https://panel.test"),
                ("PANEL_EGG_ID", "16"),
                ("PAKASIR_BASE_URL", "https://sandbox.pakasir.test/"),
                ("WARRANTY_ENABLED", "false"),
                ("WARRANTY_EXPIRY_DAYS", "7"),
                ("TELEGRAM_BOT_TOKEN", "bot"),
                ("TELEGRAM_CHAT_ID", "1"),
                ("TELEGRAM_CHANNEL_ERRORS", "2"),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_origins, ["https://a.test", "https://b.test"]);
        assert_eq!(config.auth.session_secret, vec![7u8; 32]);
        assert!(config.auth.cookie_secure);
        assert_eq!(config.panel.egg_id, 16);
        assert_eq!(config.panel.nest_id, 5);
        assert_eq!(config.pakasir.base_url, "https://sandbox.pakasir.test");
        assert_eq!(config.shop.panel_domain, "https://panel.test");
        assert!(!config.warranty.enabled);
        assert_eq!(config.warranty.validity_delta(), chrono::TimeDelta::days(7));
        assert_eq!(config.telegram.errors_chat_id.as_deref(), Some("2"));
    }

    #[test]
    fn test_rejects_short_secret() {
        let short = general_purpose::STANDARD.encode([1u8; 8]);
        let result = AppConfig::from_lookup(
            lookup(&[
                ("ADMIN_USERNAME", "boss"),
                ("ADMIN_PASSWORD", "x"),
                ("ADMIN_SESSION_SECRET", &short),
            ]),
            true,
        );
        assert!(result.is_err());
    }
}
