//! Telegram configuration

use std::time::Duration;

use crate::channel::Channel;

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token; empty disables delivery
    pub bot_token: String,
    /// Fallback chat for channels without their own chat id
    pub default_chat_id: String,
    pub payments_chat_id: Option<String>,
    pub servers_chat_id: Option<String>,
    pub errors_chat_id: Option<String>,
    /// Bot API base URL
    pub api_base: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            default_chat_id: String::new(),
            payments_chat_id: None,
            servers_chat_id: None,
            errors_chat_id: None,
            api_base: "https://api.telegram.org".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>, default_chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            default_chat_id: default_chat_id.into(),
            ..Default::default()
        }
    }

    /// Chat id for `channel`, falling back to the default chat
    pub fn chat_for(&self, channel: Channel) -> &str {
        let specific = match channel {
            Channel::Payments => self.payments_chat_id.as_deref(),
            Channel::Servers => self.servers_chat_id.as_deref(),
            Channel::Errors => self.errors_chat_id.as_deref(),
        };
        specific
            .filter(|id| !id.is_empty())
            .unwrap_or(&self.default_chat_id)
    }

    pub fn is_enabled(&self) -> bool {
        !self.bot_token.is_empty()
    }

    /// Whether any dedicated log channel is configured
    pub fn has_log_channels(&self) -> bool {
        [
            &self.payments_chat_id,
            &self.servers_chat_id,
            &self.errors_chat_id,
        ]
        .into_iter()
        .any(|id| id.as_deref().is_some_and(|id| !id.is_empty()))
    }

    pub fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}
