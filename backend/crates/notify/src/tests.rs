//! Dispatcher and transport tests

#[cfg(test)]
mod dispatcher_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Mutex;

    use crate::channel::{Channel, Notification};
    use crate::error::{NotifyError, NotifyResult};
    use crate::notifier::spawn_dispatcher;
    use crate::telegram::NotificationTransport;

    #[derive(Clone, Default)]
    struct RecordingTransport {
        seen: Arc<Mutex<Vec<Notification>>>,
        failures: Arc<AtomicUsize>,
    }

    impl NotificationTransport for RecordingTransport {
        async fn deliver(&self, notification: &Notification) -> NotifyResult<()> {
            if notification.text == "boom" {
                self.failures.fetch_add(1, Ordering::SeqCst);
                return Err(NotifyError::Api {
                    status: 400,
                    message: "chat not found".into(),
                });
            }
            self.seen.lock().await.push(notification.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_dispatcher_delivers_in_order_and_survives_failures() {
        let transport = RecordingTransport::default();
        let (notifier, handle) = spawn_dispatcher(transport.clone(), 16);

        assert!(notifier.send(Channel::Payments, "one"));
        assert!(notifier.send(Channel::Errors, "boom"));
        assert!(notifier.send(Channel::Servers, "two"));
        drop(notifier);
        handle.await.unwrap();

        let seen = transport.seen.lock().await;
        let texts: Vec<_> = seen.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["one", "two"]);
        assert_eq!(seen[1].channel, Channel::Servers);
        assert_eq!(transport.failures.load(Ordering::SeqCst), 1);
    }
}

#[cfg(test)]
mod telegram_tests {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use axum::extract::{Path, State};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use tokio::sync::Mutex;

    use crate::channel::{Channel, Notification};
    use crate::config::TelegramConfig;
    use crate::error::NotifyError;
    use crate::telegram::{NotificationTransport, TelegramTransport};

    type Captured = Arc<Mutex<Vec<(String, Value)>>>;

    async fn spawn_bot_api() -> (SocketAddr, Captured) {
        async fn send_message(
            State(captured): State<Captured>,
            Path(bot): Path<String>,
            Json(body): Json<Value>,
        ) -> Json<Value> {
            captured.lock().await.push((bot.clone(), body.clone()));
            if body["chat_id"] == "missing" {
                Json(json!({ "ok": false, "description": "Bad Request: chat not found" }))
            } else {
                Json(json!({ "ok": true, "result": {} }))
            }
        }

        let captured: Captured = Arc::default();
        let app = Router::new()
            .route("/{bot}/sendMessage", post(send_message))
            .with_state(captured.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (addr, captured)
    }

    #[tokio::test]
    async fn test_send_message_body() {
        let (addr, captured) = spawn_bot_api().await;
        let config = TelegramConfig {
            api_base: format!("http://{addr}"),
            servers_chat_id: Some("-100servers".into()),
            ..TelegramConfig::new("42:token", "777")
        };
        let transport = TelegramTransport::new(config).unwrap();

        transport
            .deliver(&Notification::new(Channel::Servers, "<b>hi</b>"))
            .await
            .unwrap();

        let captured = captured.lock().await;
        let (bot, body) = &captured[0];
        assert_eq!(bot, "bot42:token");
        assert_eq!(body["chat_id"], "-100servers");
        assert_eq!(body["text"], "<b>hi</b>");
        assert_eq!(body["parse_mode"], "HTML");
        assert_eq!(body["disable_web_page_preview"], true);
    }

    #[tokio::test]
    async fn test_api_refusal_is_error() {
        let (addr, _) = spawn_bot_api().await;
        let config = TelegramConfig {
            api_base: format!("http://{addr}"),
            ..TelegramConfig::new("42:token", "missing")
        };
        let transport = TelegramTransport::new(config).unwrap();

        let err = transport
            .deliver(&Notification::new(Channel::Errors, "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::Api { message, .. } if message.contains("chat not found")));
    }

    #[tokio::test]
    async fn test_disabled_transport_is_noop() {
        let transport = TelegramTransport::new(TelegramConfig::default()).unwrap();
        transport
            .deliver(&Notification::new(Channel::Payments, "x"))
            .await
            .unwrap();
    }
}
