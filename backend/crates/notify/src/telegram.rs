//! Telegram Bot API transport

use serde::{Deserialize, Serialize};

use crate::channel::Notification;
use crate::config::TelegramConfig;
use crate::error::{NotifyError, NotifyResult};

/// Delivers one notification to its destination.
#[trait_variant::make(NotificationTransport: Send)]
pub trait LocalNotificationTransport {
    async fn deliver(&self, notification: &Notification) -> NotifyResult<()>;
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

#[derive(Debug, Deserialize)]
struct BotApiReply {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// `sendMessage` client
#[derive(Debug, Clone)]
pub struct TelegramTransport {
    http: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramTransport {
    pub fn new(config: TelegramConfig) -> NotifyResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TelegramConfig {
        &self.config
    }
}

impl NotificationTransport for TelegramTransport {
    async fn deliver(&self, notification: &Notification) -> NotifyResult<()> {
        if !self.config.is_enabled() {
            tracing::debug!(
                channel = %notification.channel,
                text = %notification.text,
                "Telegram disabled, notification not sent"
            );
            return Ok(());
        }

        let body = SendMessage {
            chat_id: self.config.chat_for(notification.channel),
            text: &notification.text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };

        let resp = self
            .http
            .post(self.config.send_message_url())
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        let reply: BotApiReply = resp.json().await?;

        if !status.is_success() || !reply.ok {
            return Err(NotifyError::Api {
                status: status.as_u16(),
                message: reply
                    .description
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").into()),
            });
        }

        Ok(())
    }
}
