//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;
mod health;
mod middleware;


use std::net::SocketAddr;

use notify::{DEFAULT_QUEUE_CAPACITY, TelegramTransport, spawn_dispatcher};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{Services, build_router};
use crate::config::AppConfig;

const DEFAULT_LOG_FILTER: &str =
    "api=info,auth=info,shop=info,warranty=info,audit=info,notify=info,captcha=info,tower_http=info";

fn init_tracing(log_json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    if log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing(config::log_json());

    let config = AppConfig::from_env()?;

    if !config.telegram.is_enabled() {
        tracing::warn!("TELEGRAM_BOT_TOKEN not set, notifications are only logged");
    }
    let (notifier, _dispatcher) = spawn_dispatcher(
        TelegramTransport::new(config.telegram.clone())?,
        DEFAULT_QUEUE_CAPACITY,
    );

    let services = Services::build(&config, notifier)?;
    let app = build_router(&config, services);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        %addr,
        warranty = config.warranty.enabled,
        public_dir = %config.public_dir.display(),
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
