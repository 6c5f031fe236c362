//! Application Configuration

use std::time::Duration;

use chrono::TimeDelta;

#[derive(Debug, Clone)]
pub struct WarrantyConfig {
    /// Issue and accept tokens at all
    pub enabled: bool,
    /// Random bytes per token (hex doubles the length)
    pub token_bytes: usize,
    /// Lifetime of a token from issuance
    pub validity: Duration,
}

impl Default for WarrantyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            token_bytes: 32,
            validity: Duration::from_secs(30 * 24 * 3600),
        }
    }
}

impl WarrantyConfig {
    pub fn with_validity_days(days: u64) -> Self {
        Self {
            validity: Duration::from_secs(days * 24 * 3600),
            ..Default::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn validity_delta(&self) -> TimeDelta {
        TimeDelta::from_std(self.validity).unwrap_or(TimeDelta::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WarrantyConfig::default();
        assert!(config.enabled);
        assert_eq!(config.token_bytes, 32);
        assert_eq!(config.validity_delta(), TimeDelta::days(30));
    }

    #[test]
    fn test_with_validity_days() {
        assert_eq!(
            WarrantyConfig::with_validity_days(7).validity_delta(),
            TimeDelta::days(7)
        );
    }
}
